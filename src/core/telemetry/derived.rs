use std::collections::BTreeMap;

use serde::Serialize;

use super::snapshot::{LeakState, SensorReadings, SystemSnapshot};

/// Classification of a sensor reading against its fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SensorStatus {
    Good,
    Warning,
    Critical,
}

/// Coarse water-level band shown by the dashboard gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WaterLevelClass {
    High,
    Medium,
    Low,
}

/// Overall rating derived from the water-quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QualityRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityRating {
    pub fn label(self) -> &'static str {
        match self {
            QualityRating::Excellent => "Excellent",
            QualityRating::Good => "Good",
            QualityRating::Fair => "Fair",
            QualityRating::Poor => "Poor",
        }
    }
}

pub fn classify_ph(ph: f64) -> SensorStatus {
    if (6.5..=8.5).contains(&ph) {
        SensorStatus::Good
    } else if (6.0..=9.0).contains(&ph) {
        SensorStatus::Warning
    } else {
        SensorStatus::Critical
    }
}

pub fn classify_turbidity(ntu: f64) -> SensorStatus {
    if ntu <= 5.0 {
        SensorStatus::Good
    } else if ntu <= 10.0 {
        SensorStatus::Warning
    } else {
        SensorStatus::Critical
    }
}

pub fn classify_salinity(grams_per_liter: f64) -> SensorStatus {
    if grams_per_liter <= 0.5 {
        SensorStatus::Good
    } else if grams_per_liter <= 1.0 {
        SensorStatus::Warning
    } else {
        SensorStatus::Critical
    }
}

pub fn water_level_class(percent: f64) -> WaterLevelClass {
    if percent >= 75.0 {
        WaterLevelClass::High
    } else if percent >= 25.0 {
        WaterLevelClass::Medium
    } else {
        WaterLevelClass::Low
    }
}

/// Water-quality score in [0, 100].
///
/// Starts at 100 and deducts 5 per pH unit away from 7.0, 0.5 per NTU of
/// turbidity and 10 per g/L of salinity. Missing readings fall back to
/// neutral values (pH 7.0, turbidity and salinity 0.0).
pub fn quality_score(sensors: &SensorReadings) -> f64 {
    let ph = sensors.ph.unwrap_or(7.0);
    let turbidity = sensors.turbidity.unwrap_or(0.0);
    let salinity = sensors.salinity.unwrap_or(0.0);

    let score = 100.0 - (ph - 7.0).abs() * 5.0 - turbidity * 0.5 - salinity * 10.0;
    score.clamp(0.0, 100.0)
}

pub fn quality_rating(score: f64) -> QualityRating {
    if score >= 90.0 {
        QualityRating::Excellent
    } else if score >= 75.0 {
        QualityRating::Good
    } else if score >= 60.0 {
        QualityRating::Fair
    } else {
        QualityRating::Poor
    }
}

pub fn open_tap_count(snapshot: &SystemSnapshot) -> usize {
    snapshot.taps.values().filter(|s| s.is_open()).count()
}

pub fn open_valve_count(snapshot: &SystemSnapshot) -> usize {
    snapshot.valves.values().filter(|s| s.is_open()).count()
}

/// Total distribution flow in L/min: flow reading times open taps.
pub fn total_flow(snapshot: &SystemSnapshot) -> f64 {
    snapshot.sensors.flow.unwrap_or(0.0) * open_tap_count(snapshot) as f64
}

/// System pressure in Bar, from tank level and open valves.
pub fn system_pressure(snapshot: &SystemSnapshot) -> f64 {
    (snapshot.water_level / 100.0) * 3.0 + open_valve_count(snapshot) as f64 * 0.5
}

/// Energy efficiency in percent.
///
/// Zero when either the tank is empty or nothing flows; otherwise the
/// flow-to-level ratio rounded and capped at 100.
pub fn energy_efficiency(snapshot: &SystemSnapshot) -> u32 {
    let flow = snapshot.sensors.flow.unwrap_or(0.0);
    if snapshot.water_level == 0.0 || flow == 0.0 {
        return 0;
    }

    let efficiency = flow / (snapshot.water_level / 100.0) * 100.0;
    efficiency.round().clamp(0.0, 100.0) as u32
}

/// Active / inactive partition of the leak map.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LeakSummary {
    pub active: Vec<String>,
    pub inactive: Vec<String>,
}

impl LeakSummary {
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }
}

pub fn partition_leaks(leaks: &BTreeMap<String, LeakState>) -> LeakSummary {
    let mut summary = LeakSummary::default();
    for (pipe, state) in leaks {
        if state.is_active() {
            summary.active.push(pipe.clone());
        } else {
            summary.inactive.push(pipe.clone());
        }
    }
    summary
}
