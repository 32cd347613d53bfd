//! Dashboard command handler.
//!
//! Runs the live water-monitoring dashboard in a TUI.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::config::Config;
use crate::ui::dashboard::{run_dashboard_app, DashboardAppConfig};

/// Execute the dashboard command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;

    let endpoint = matches
        .get_one::<String>("endpoint")
        .cloned()
        .unwrap_or_else(|| config.endpoint().to_string());

    let interval_secs = matches
        .get_one::<u64>("interval")
        .copied()
        .unwrap_or(config.poll_interval_secs);

    let auto_refresh = !matches.get_flag("no-auto-refresh");

    let app_config = DashboardAppConfig {
        endpoint,
        interval_secs,
        auto_refresh,
    };

    run_dashboard_app(app_config).context("Failed to run dashboard")
}
