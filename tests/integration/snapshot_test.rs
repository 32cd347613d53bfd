use aquaflow::core::telemetry::{LeakState, SystemSnapshot, UnitState};

#[test]
fn test_full_backend_payload() {
    let payload = r#"{
        "valves": {"Main Supply Valve": 1, "Distribution Zone Valve": "Closed"},
        "taps": {"Kitchen Sink": "Flowing", "Garden Tap": 0},
        "sensors": {"pH": 7.2, "turbidity": 2.5, "salinity": 0.3, "flow": 15.0},
        "water_level": 67.5,
        "leaks": {"Main Supply Line": "ACTIVE"},
        "active_alerts": [],
        "unacknowledged_alerts": 0,
        "timestamp": "2024-01-15T10:30:00"
    }"#;

    let snapshot: SystemSnapshot = serde_json::from_str(payload).unwrap();

    assert_eq!(snapshot.valves["Main Supply Valve"], UnitState::Open);
    assert_eq!(snapshot.valves["Distribution Zone Valve"], UnitState::Closed);
    assert_eq!(snapshot.taps["Kitchen Sink"], UnitState::Open);
    assert_eq!(snapshot.taps["Garden Tap"], UnitState::Closed);
    assert_eq!(snapshot.sensors.ph, Some(7.2));
    assert_eq!(snapshot.water_level, 67.5);
    assert_eq!(snapshot.leaks["Main Supply Line"], LeakState::Active);
    assert_eq!(snapshot.timestamp.as_deref(), Some("2024-01-15T10:30:00"));
}

#[test]
fn test_empty_payload_yields_empty_snapshot() {
    let snapshot: SystemSnapshot = serde_json::from_str("{}").unwrap();

    assert!(snapshot.valves.is_empty());
    assert!(snapshot.taps.is_empty());
    assert!(snapshot.leaks.is_empty());
    assert_eq!(snapshot.water_level, 0.0);
    assert_eq!(snapshot.sensors.ph, None);
}

#[test]
fn test_state_strings_are_case_insensitive() {
    let snapshot: SystemSnapshot = serde_json::from_str(
        r#"{"valves":{"A":"OPEN","B":"open"},"leaks":{"P1":"active","P2":"Active"}}"#,
    )
    .unwrap();

    assert!(snapshot.valves["A"].is_open());
    assert!(snapshot.valves["B"].is_open());
    assert!(snapshot.leaks["P1"].is_active());
    assert!(snapshot.leaks["P2"].is_active());
}

#[test]
fn test_snapshot_replaces_wholesale() {
    let first: SystemSnapshot =
        serde_json::from_str(r#"{"valves":{"A":1,"B":1},"water_level":80}"#).unwrap();
    let second: SystemSnapshot = serde_json::from_str(r#"{"water_level":20}"#).unwrap();

    // A later snapshot is not a merge: fields absent from the payload reset
    assert_eq!(first.valves.len(), 2);
    assert!(second.valves.is_empty());
    assert_eq!(second.water_level, 20.0);
}
