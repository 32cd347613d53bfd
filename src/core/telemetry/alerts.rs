//! Alert evaluation for water-system snapshots.
//!
//! Classifies sensor readings against the fixed quality thresholds and
//! generates alerts, plus the one-shot alarm latch for new leak activity.

use serde::{Deserialize, Serialize};

use super::derived::{
    classify_ph, classify_salinity, classify_turbidity, partition_leaks, SensorStatus,
};
use super::snapshot::SystemSnapshot;

/// Water level below this percentage raises a critical alert.
pub const LOW_WATER_LEVEL_PERCENT: f64 = 20.0;

/// An individual alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub category: AlertCategory,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertCategory {
    Ph,
    Turbidity,
    Salinity,
    WaterLevel,
    Leak(String), // Pipe name
}

/// Evaluate a snapshot and generate alerts
pub fn evaluate_alerts(snapshot: &SystemSnapshot) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if let Some(ph) = snapshot.sensors.ph {
        match classify_ph(ph) {
            SensorStatus::Critical => alerts.push(Alert {
                severity: AlertSeverity::Critical,
                category: AlertCategory::Ph,
                message: format!("pH at {:.1} is outside the safe range (6.0-9.0)", ph),
            }),
            SensorStatus::Warning => alerts.push(Alert {
                severity: AlertSeverity::Warning,
                category: AlertCategory::Ph,
                message: format!("pH at {:.1} is outside the ideal range (6.5-8.5)", ph),
            }),
            SensorStatus::Good => {}
        }
    }

    if let Some(turbidity) = snapshot.sensors.turbidity {
        match classify_turbidity(turbidity) {
            SensorStatus::Critical => alerts.push(Alert {
                severity: AlertSeverity::Critical,
                category: AlertCategory::Turbidity,
                message: format!("Turbidity at {:.1} NTU exceeds 10.0 NTU", turbidity),
            }),
            SensorStatus::Warning => alerts.push(Alert {
                severity: AlertSeverity::Warning,
                category: AlertCategory::Turbidity,
                message: format!("Turbidity at {:.1} NTU exceeds 5.0 NTU", turbidity),
            }),
            SensorStatus::Good => {}
        }
    }

    if let Some(salinity) = snapshot.sensors.salinity {
        match classify_salinity(salinity) {
            SensorStatus::Critical => alerts.push(Alert {
                severity: AlertSeverity::Critical,
                category: AlertCategory::Salinity,
                message: format!("Salinity at {:.2} g/L exceeds 1.0 g/L", salinity),
            }),
            SensorStatus::Warning => alerts.push(Alert {
                severity: AlertSeverity::Warning,
                category: AlertCategory::Salinity,
                message: format!("Salinity at {:.2} g/L exceeds 0.5 g/L", salinity),
            }),
            SensorStatus::Good => {}
        }
    }

    if snapshot.water_level < LOW_WATER_LEVEL_PERCENT {
        alerts.push(Alert {
            severity: AlertSeverity::Critical,
            category: AlertCategory::WaterLevel,
            message: format!(
                "Water level critically low: {:.0}%",
                snapshot.water_level
            ),
        });
    }

    for pipe in partition_leaks(&snapshot.leaks).active {
        alerts.push(Alert {
            severity: AlertSeverity::Critical,
            category: AlertCategory::Leak(pipe.clone()),
            message: format!("Active leak detected on {}", pipe),
        });
    }

    alerts
}

/// One-shot alarm latch for leak activity.
///
/// Fires on the transition from zero active leaks to any active leaks and
/// stays latched until the active count drops back to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeakAlarm {
    latched: bool,
}

impl LeakAlarm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current active-leak count.
    ///
    /// Returns true only when the count transitions from 0 upward; it does
    /// not re-fire while the count stays positive.
    pub fn observe(&mut self, active_count: usize) -> bool {
        if active_count == 0 {
            self.latched = false;
            return false;
        }
        if self.latched {
            return false;
        }
        self.latched = true;
        true
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }
}
