//! Control command handler.
//!
//! Sends one control action to the backend from the CLI, keeping the
//! notify-before / notify-after / refresh-after sequence.

use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use colored::*;

use crate::core::config::Config;
use crate::core::control::{self, ControlAction};
use crate::core::telemetry::{open_tap_count, open_valve_count, partition_leaks, SnapshotClient};

/// Execute the control command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let endpoint = matches
        .get_one::<String>("endpoint")
        .cloned()
        .unwrap_or_else(|| config.endpoint().to_string());

    let action_name = matches.get_one::<String>("action").unwrap();
    let target = matches.get_one::<String>("target").map(String::as_str);

    let action = ControlAction::from_cli(action_name, target).map_err(|e| anyhow!(e))?;

    println!("{}", action.describe().cyan());

    let client = SnapshotClient::new(&endpoint);
    let outcome =
        control::execute(&client, &action).context("Failed to send control command")?;

    if outcome.accepted {
        println!("{}", outcome.message.green());
    } else {
        println!("{}", outcome.message.red());
    }

    if outcome.refresh {
        let snapshot = client
            .fetch_snapshot()
            .context("Failed to refresh after command")?;
        println!(
            "{} {} valves open, {} taps open, {} active leaks",
            "Refreshed:".white().bold(),
            open_valve_count(&snapshot),
            open_tap_count(&snapshot),
            partition_leaks(&snapshot.leaks).active_count()
        );
    }

    Ok(())
}
