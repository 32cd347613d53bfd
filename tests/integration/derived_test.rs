use aquaflow::core::telemetry::{
    classify_ph, energy_efficiency, open_tap_count, quality_rating, quality_score, system_pressure,
    total_flow, QualityRating, SensorReadings, SensorStatus, SystemSnapshot,
};

fn snapshot_with_sensors(ph: f64, turbidity: f64, salinity: f64) -> SystemSnapshot {
    SystemSnapshot {
        sensors: SensorReadings {
            ph: Some(ph),
            turbidity: Some(turbidity),
            salinity: Some(salinity),
            flow: None,
        },
        ..Default::default()
    }
}

#[test]
fn test_ph_classification_across_bands() {
    for ph in [6.5, 6.8, 7.0, 7.5, 8.0, 8.5] {
        assert_eq!(classify_ph(ph), SensorStatus::Good, "pH {}", ph);
    }
    for ph in [6.0, 6.4, 8.6, 9.0] {
        assert_eq!(classify_ph(ph), SensorStatus::Warning, "pH {}", ph);
    }
    for ph in [0.0, 5.9, 9.1, 14.0] {
        assert_eq!(classify_ph(ph), SensorStatus::Critical, "pH {}", ph);
    }
}

#[test]
fn test_quality_score_monotone_in_turbidity_and_salinity() {
    let mut previous = f64::MAX;
    for turbidity in [0.0, 1.0, 5.0, 10.0, 50.0] {
        let score = quality_score(&snapshot_with_sensors(7.0, turbidity, 0.0).sensors);
        assert!(score <= previous, "turbidity {} raised the score", turbidity);
        previous = score;
    }

    let mut previous = f64::MAX;
    for salinity in [0.0, 0.2, 0.5, 1.0, 5.0] {
        let score = quality_score(&snapshot_with_sensors(7.0, 0.0, salinity).sensors);
        assert!(score <= previous, "salinity {} raised the score", salinity);
        previous = score;
    }
}

#[test]
fn test_quality_score_symmetric_around_neutral_ph() {
    for delta in [0.1, 0.5, 1.0, 2.5] {
        let above = quality_score(&snapshot_with_sensors(7.0 + delta, 0.0, 0.0).sensors);
        let below = quality_score(&snapshot_with_sensors(7.0 - delta, 0.0, 0.0).sensors);
        assert!((above - below).abs() < 1e-9, "asymmetric at delta {}", delta);
    }
}

#[test]
fn test_quality_index_example_is_excellent() {
    // 100 - (0 * 5) - (2 * 0.5) - (0.1 * 10) = 98
    let sensors = snapshot_with_sensors(7.0, 2.0, 0.1).sensors;
    let score = quality_score(&sensors);
    assert!((score - 98.0).abs() < 1e-9);
    assert_eq!(quality_rating(score), QualityRating::Excellent);
}

#[test]
fn test_energy_efficiency_zero_cases() {
    let mut snapshot = SystemSnapshot {
        water_level: 0.0,
        ..Default::default()
    };
    snapshot.sensors.flow = Some(12.0);
    assert_eq!(energy_efficiency(&snapshot), 0);

    let mut snapshot = SystemSnapshot {
        water_level: 60.0,
        ..Default::default()
    };
    snapshot.sensors.flow = Some(0.0);
    assert_eq!(energy_efficiency(&snapshot), 0);

    // No flow sensor at all behaves like zero flow
    let snapshot = SystemSnapshot {
        water_level: 60.0,
        ..Default::default()
    };
    assert_eq!(energy_efficiency(&snapshot), 0);
}

#[test]
fn test_energy_efficiency_capped_at_100() {
    let mut snapshot = SystemSnapshot {
        water_level: 10.0,
        ..Default::default()
    };
    snapshot.sensors.flow = Some(50.0);
    assert_eq!(energy_efficiency(&snapshot), 100);
}

#[test]
fn test_open_tap_count_with_mixed_encodings() {
    // "Flowing" counts as open
    let snapshot: SystemSnapshot =
        serde_json::from_str(r#"{"taps":{"A":"Open","B":"Closed","C":"Flowing"}}"#).unwrap();
    assert_eq!(open_tap_count(&snapshot), 2);
}

#[test]
fn test_total_flow_scales_with_open_taps() {
    let mut snapshot: SystemSnapshot =
        serde_json::from_str(r#"{"taps":{"TAP1":1,"TAP2":1,"TAP3":0}}"#).unwrap();
    snapshot.sensors.flow = Some(4.5);
    assert!((total_flow(&snapshot) - 9.0).abs() < 1e-9);
}

#[test]
fn test_system_pressure_from_level_and_valves() {
    let mut snapshot: SystemSnapshot =
        serde_json::from_str(r#"{"valves":{"TANK_VALVE":1,"VALVE_A":0}}"#).unwrap();
    snapshot.water_level = 50.0;
    // (50 / 100) * 3 + 1 * 0.5 = 2.0
    assert!((system_pressure(&snapshot) - 2.0).abs() < 1e-9);
}
