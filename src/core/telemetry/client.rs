use crate::error::{AquaError, Result};

use super::snapshot::{CommandAck, ControlRequest, LeakScanReport, SystemSnapshot};

/// Blocking HTTP client for the monitoring backend.
///
/// One instance is shared by the poller and the control commands; no
/// timeout is set beyond the transport default, and in-flight requests are
/// never cancelled (the last completed poll wins).
pub struct SnapshotClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl SnapshotClient {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::blocking::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a full system snapshot from the backend.
    pub fn fetch_snapshot(&self) -> Result<SystemSnapshot> {
        let url = format!("{}/api/system-data", self.base_url);
        let response = self.http.get(&url).send()?;

        if !response.status().is_success() {
            return Err(AquaError::Http {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json()?)
    }

    /// Run a leak scan on the backend.
    pub fn check_leaks(&self) -> Result<LeakScanReport> {
        let url = format!("{}/api/check-leaks", self.base_url);
        let response = self.http.post(&url).send()?;

        if !response.status().is_success() {
            return Err(AquaError::Http {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json()?)
    }

    /// Send a control command to the backend.
    pub fn send_command(&self, request: &ControlRequest) -> Result<CommandAck> {
        let url = format!("{}/api/control", self.base_url);
        let response = self.http.post(&url).json(request).send()?;

        if !response.status().is_success() {
            return Err(AquaError::Http {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json()?)
    }
}
