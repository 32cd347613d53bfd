use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Complete point-in-time readout of the monitored water system.
///
/// Every field is tolerant to being absent from the backend payload; a
/// snapshot fully replaces the previous one on each successful poll.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemSnapshot {
    #[serde(default)]
    pub valves: BTreeMap<String, UnitState>,
    #[serde(default)]
    pub taps: BTreeMap<String, UnitState>,
    #[serde(default)]
    pub sensors: SensorReadings,
    #[serde(default)]
    pub water_level: f64,
    #[serde(default)]
    pub leaks: BTreeMap<String, LeakState>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Raw sensor readings; any sensor may be offline.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SensorReadings {
    #[serde(default, rename = "pH")]
    pub ph: Option<f64>,
    /// Turbidity in NTU
    #[serde(default)]
    pub turbidity: Option<f64>,
    /// Salinity in g/L
    #[serde(default)]
    pub salinity: Option<f64>,
    /// Flow in L/min
    #[serde(default)]
    pub flow: Option<f64>,
}

/// Canonical open/closed state for valves and taps.
///
/// The backend encodes state as either a number (1/0) or a string
/// ("Open", "Flowing", "Closed", any case). Everything is normalized here
/// at the deserialization boundary; "Flowing" and 1 both mean Open.
/// Unknown encodings read as Closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum UnitState {
    Open,
    #[default]
    Closed,
}

impl UnitState {
    pub fn is_open(self) -> bool {
        matches!(self, UnitState::Open)
    }
}

impl<'de> Deserialize<'de> for UnitState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawState::deserialize(deserializer)? {
            RawState::Flag(true) => UnitState::Open,
            RawState::Flag(false) => UnitState::Closed,
            RawState::Number(n) => {
                if n == 1.0 {
                    UnitState::Open
                } else {
                    UnitState::Closed
                }
            }
            RawState::Text(s) => match s.to_ascii_lowercase().as_str() {
                "open" | "flowing" | "on" => UnitState::Open,
                _ => UnitState::Closed,
            },
        })
    }
}

/// Canonical leak state for a pipe section.
///
/// Normalized the same way as [`UnitState`]: 1 or "ACTIVE" mean Active,
/// anything unknown reads as Inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LeakState {
    Active,
    #[default]
    Inactive,
}

impl LeakState {
    pub fn is_active(self) -> bool {
        matches!(self, LeakState::Active)
    }
}

impl<'de> Deserialize<'de> for LeakState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawState::deserialize(deserializer)? {
            RawState::Flag(true) => LeakState::Active,
            RawState::Flag(false) => LeakState::Inactive,
            RawState::Number(n) => {
                if n == 1.0 {
                    LeakState::Active
                } else {
                    LeakState::Inactive
                }
            }
            RawState::Text(s) => match s.to_ascii_lowercase().as_str() {
                "active" | "leak" => LeakState::Active,
                _ => LeakState::Inactive,
            },
        })
    }
}

/// Wire form of a unit or leak state before normalization.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawState {
    Flag(bool),
    Number(f64),
    Text(String),
}

/// Result of a backend leak scan (`POST /api/check-leaks`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeakScanReport {
    #[serde(default)]
    pub total_active: usize,
    #[serde(default)]
    pub total_pipes: Option<usize>,
    #[serde(default)]
    pub inactive_leak_count: Option<usize>,
    #[serde(default)]
    pub active_leaks: Vec<String>,
}

/// Body of a control command (`POST /api/control`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlRequest {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Backend acknowledgement of a control command.
///
/// A 2xx response with no body fields counts as accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandAck {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_state_numeric_encoding() {
        let snapshot: SystemSnapshot =
            serde_json::from_str(r#"{"valves":{"TANK_VALVE":1,"VALVE_A":0}}"#).unwrap();
        assert_eq!(snapshot.valves["TANK_VALVE"], UnitState::Open);
        assert_eq!(snapshot.valves["VALVE_A"], UnitState::Closed);
    }

    #[test]
    fn test_unit_state_string_encoding() {
        let snapshot: SystemSnapshot = serde_json::from_str(
            r#"{"taps":{"TAP1":"Open","TAP2":"Closed","TAP3":"Flowing","TAP4":"weird"}}"#,
        )
        .unwrap();
        assert!(snapshot.taps["TAP1"].is_open());
        assert!(!snapshot.taps["TAP2"].is_open());
        assert!(snapshot.taps["TAP3"].is_open());
        // Unknown encodings are not counted as flowing
        assert!(!snapshot.taps["TAP4"].is_open());
    }

    #[test]
    fn test_leak_state_encoding() {
        let snapshot: SystemSnapshot =
            serde_json::from_str(r#"{"leaks":{"TANK-S1":"ACTIVE","S1-S2":0,"S2-VALVE_A":1}}"#)
                .unwrap();
        assert!(snapshot.leaks["TANK-S1"].is_active());
        assert!(!snapshot.leaks["S1-S2"].is_active());
        assert!(snapshot.leaks["S2-VALVE_A"].is_active());
    }

    #[test]
    fn test_sensor_rename_and_defaults() {
        let snapshot: SystemSnapshot =
            serde_json::from_str(r#"{"sensors":{"pH":7.2,"flow":12.5}}"#).unwrap();
        assert_eq!(snapshot.sensors.ph, Some(7.2));
        assert_eq!(snapshot.sensors.flow, Some(12.5));
        assert_eq!(snapshot.sensors.turbidity, None);
        assert_eq!(snapshot.water_level, 0.0);
        assert!(snapshot.valves.is_empty());
    }

    #[test]
    fn test_extra_backend_fields_ignored() {
        let snapshot: SystemSnapshot = serde_json::from_str(
            r#"{"water_level":55,"active_alerts":[],"unacknowledged_alerts":0,"timestamp":"2024-01-15T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(snapshot.water_level, 55.0);
        assert_eq!(snapshot.timestamp.as_deref(), Some("2024-01-15T10:00:00"));
    }

    #[test]
    fn test_command_ack_empty_body_is_accepted() {
        let ack: CommandAck = serde_json::from_str("{}").unwrap();
        assert!(ack.success);
        assert!(ack.message.is_none());
    }
}
