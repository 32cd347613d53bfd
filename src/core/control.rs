//! Control commands for the water system.
//!
//! Each action is a real request/response round trip against the backend.
//! The caller surfaces [`ControlAction::describe`] before executing and the
//! returned [`CommandOutcome`] afterwards, then re-polls when `refresh` is
//! set, so every command keeps the notify-before / notify-after /
//! refresh-after sequence.

use serde::{Deserialize, Serialize};

use crate::core::telemetry::{ControlRequest, SnapshotClient};
use crate::error::Result;

/// A user-initiated control action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlAction {
    ToggleValve(String),
    ToggleTap(String),
    IsolateLeak(String),
    EmergencyShutdown,
    NotifyMaintenance,
}

impl ControlAction {
    /// Wire name of the action.
    pub fn name(&self) -> &'static str {
        match self {
            ControlAction::ToggleValve(_) => "toggle_valve",
            ControlAction::ToggleTap(_) => "toggle_tap",
            ControlAction::IsolateLeak(_) => "isolate_leak",
            ControlAction::EmergencyShutdown => "emergency_shutdown",
            ControlAction::NotifyMaintenance => "notify_maintenance",
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            ControlAction::ToggleValve(name)
            | ControlAction::ToggleTap(name)
            | ControlAction::IsolateLeak(name) => Some(name),
            _ => None,
        }
    }

    /// Human description used for the in-progress notification.
    pub fn describe(&self) -> String {
        match self {
            ControlAction::ToggleValve(name) => format!("{} toggle command sent", name),
            ControlAction::ToggleTap(name) => format!("{} toggle command sent", name),
            ControlAction::IsolateLeak(pipe) => format!("Initiating isolation for {}...", pipe),
            ControlAction::EmergencyShutdown => "EMERGENCY SHUTDOWN INITIATED".to_string(),
            ControlAction::NotifyMaintenance => "Notifying maintenance team...".to_string(),
        }
    }

    /// Fallback completion message when the backend ack carries none.
    fn default_completion(&self) -> String {
        match self {
            ControlAction::ToggleValve(name) | ControlAction::ToggleTap(name) => {
                format!("{} status updated", name)
            }
            ControlAction::IsolateLeak(pipe) => {
                format!("{} isolated successfully. Maintenance team notified.", pipe)
            }
            ControlAction::EmergencyShutdown => {
                "System shutdown complete. All valves closed.".to_string()
            }
            ControlAction::NotifyMaintenance => "Maintenance team acknowledged".to_string(),
        }
    }

    /// Whether a completed command triggers a fresh poll.
    pub fn refreshes(&self) -> bool {
        !matches!(self, ControlAction::NotifyMaintenance)
    }

    /// Parse a CLI action name plus optional target.
    pub fn from_cli(action: &str, target: Option<&str>) -> std::result::Result<Self, String> {
        let require_target = |kind: &str| {
            target
                .map(str::to_string)
                .ok_or_else(|| format!("'{}' requires a target name", kind))
        };

        match action {
            "toggle-valve" => Ok(ControlAction::ToggleValve(require_target("toggle-valve")?)),
            "toggle-tap" => Ok(ControlAction::ToggleTap(require_target("toggle-tap")?)),
            "isolate-leak" => Ok(ControlAction::IsolateLeak(require_target("isolate-leak")?)),
            "emergency-shutdown" => Ok(ControlAction::EmergencyShutdown),
            "notify-maintenance" => Ok(ControlAction::NotifyMaintenance),
            other => Err(format!(
                "Unknown action '{}'. Expected one of: toggle-valve, toggle-tap, isolate-leak, emergency-shutdown, notify-maintenance",
                other
            )),
        }
    }

    fn request(&self) -> ControlRequest {
        ControlRequest {
            action: self.name().to_string(),
            target: self.target().map(str::to_string),
        }
    }
}

/// Outcome of one executed command, for the notification feed.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub accepted: bool,
    pub message: String,
    /// A fresh poll should follow this command.
    pub refresh: bool,
}

/// Execute a control action against the backend.
pub fn execute(client: &SnapshotClient, action: &ControlAction) -> Result<CommandOutcome> {
    log::info!("Sending control command: {}", action.name());

    let ack = client.send_command(&action.request())?;
    let message = ack
        .message
        .unwrap_or_else(|| action.default_completion());

    Ok(CommandOutcome {
        accepted: ack.success,
        refresh: ack.success && action.refreshes(),
        message,
    })
}
