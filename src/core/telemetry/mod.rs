//! Water-system telemetry core.
//!
//! This module provides the snapshot data model, the polling HTTP client,
//! and the pure functions that turn a snapshot into derived display
//! metrics and alerts.

pub mod alerts;
mod client;
mod derived;
mod history;
mod snapshot;

pub use alerts::{evaluate_alerts, Alert, AlertCategory, AlertSeverity, LeakAlarm};
pub use client::SnapshotClient;
pub use derived::{
    classify_ph, classify_salinity, classify_turbidity, energy_efficiency, open_tap_count,
    open_valve_count, partition_leaks, quality_rating, quality_score, system_pressure, total_flow,
    water_level_class, LeakSummary, QualityRating, SensorStatus, WaterLevelClass,
};
pub use history::TelemetryHistory;
pub use snapshot::{
    CommandAck, ControlRequest, LeakScanReport, LeakState, SensorReadings, SystemSnapshot,
    UnitState,
};
