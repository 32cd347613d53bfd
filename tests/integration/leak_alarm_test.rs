use aquaflow::core::telemetry::{evaluate_alerts, AlertCategory, LeakAlarm, SystemSnapshot};

#[test]
fn test_alarm_fires_once_per_transition() {
    let mut alarm = LeakAlarm::new();

    // Quiet system: never fires
    for _ in 0..5 {
        assert!(!alarm.observe(0));
    }

    // First poll with leaks fires exactly once
    assert!(alarm.observe(1));

    // Stays silent while leaks remain, regardless of count changes
    for count in [1, 2, 5, 3] {
        assert!(!alarm.observe(count));
    }

    // Resolving all leaks re-arms without firing
    assert!(!alarm.observe(0));
    assert!(!alarm.is_latched());

    // Next incident fires again
    assert!(alarm.observe(4));
}

#[test]
fn test_alarm_latch_state_tracks_activity() {
    let mut alarm = LeakAlarm::new();
    assert!(!alarm.is_latched());

    alarm.observe(2);
    assert!(alarm.is_latched());

    alarm.observe(0);
    assert!(!alarm.is_latched());
}

#[test]
fn test_active_leaks_produce_alerts() {
    let snapshot: SystemSnapshot = serde_json::from_str(
        r#"{"water_level":50,"leaks":{"TANK-S1":"ACTIVE","S1-S2":"INACTIVE","S5-JUNCTION_E":1}}"#,
    )
    .unwrap();

    let alerts = evaluate_alerts(&snapshot);
    let leak_alerts: Vec<_> = alerts
        .iter()
        .filter(|a| matches!(a.category, AlertCategory::Leak(_)))
        .collect();

    assert_eq!(leak_alerts.len(), 2);
}
