use std::collections::VecDeque;

use super::derived::{quality_score, system_pressure, total_flow};
use super::snapshot::SystemSnapshot;

const DEFAULT_HISTORY_SIZE: usize = 60;

/// Ring buffers of derived metrics (for sparklines)
#[derive(Debug, Clone)]
pub struct TelemetryHistory {
    capacity: usize,
    pub quality_score: VecDeque<f64>,
    pub water_level: VecDeque<f64>,
    pub total_flow: VecDeque<f64>,
    pub pressure: VecDeque<f64>,
}

impl TelemetryHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            quality_score: VecDeque::with_capacity(capacity),
            water_level: VecDeque::with_capacity(capacity),
            total_flow: VecDeque::with_capacity(capacity),
            pressure: VecDeque::with_capacity(capacity),
        }
    }

    /// Record the derived metrics of one snapshot.
    pub fn record(&mut self, snapshot: &SystemSnapshot) {
        let capacity = self.capacity;
        Self::push_value(&mut self.quality_score, quality_score(&snapshot.sensors), capacity);
        Self::push_value(&mut self.water_level, snapshot.water_level, capacity);
        Self::push_value(&mut self.total_flow, total_flow(snapshot), capacity);
        Self::push_value(&mut self.pressure, system_pressure(snapshot), capacity);
    }

    fn push_value(queue: &mut VecDeque<f64>, value: f64, capacity: usize) {
        if queue.len() >= capacity {
            queue.pop_front();
        }
        queue.push_back(value);
    }

    /// Convert quality_score to u64 slice for the history bar chart
    /// Scales values by 10 to preserve decimal precision (0-1000 range)
    pub fn quality_as_u64(&self) -> Vec<u64> {
        self.quality_score.iter().map(|&v| (v * 10.0) as u64).collect()
    }

    /// Convert water_level to u64 slice for the history bar chart
    /// Scales values by 10 to preserve decimal precision (0-1000 range)
    pub fn level_as_u64(&self) -> Vec<u64> {
        self.water_level.iter().map(|&v| (v * 10.0) as u64).collect()
    }
}

impl Default for TelemetryHistory {
    fn default() -> Self {
        Self::new()
    }
}
