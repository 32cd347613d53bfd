//! Status command handler.
//!
//! Fetches one snapshot and prints a status report, or the raw snapshot
//! as JSON for scripting.

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::*;

use crate::core::config::Config;
use crate::core::telemetry::{
    classify_ph, classify_salinity, classify_turbidity, energy_efficiency, open_tap_count,
    open_valve_count, partition_leaks, quality_rating, quality_score, system_pressure, total_flow,
    SensorStatus, SnapshotClient, SystemSnapshot,
};
use crate::ui::formatters::{
    format_flow, format_percent, format_ph, format_pressure, format_salinity, format_turbidity,
};

/// Execute the status command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let endpoint = matches
        .get_one::<String>("endpoint")
        .cloned()
        .unwrap_or_else(|| config.endpoint().to_string());

    let client = SnapshotClient::new(&endpoint);
    let snapshot = client
        .fetch_snapshot()
        .context("Failed to fetch system snapshot")?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    print_report(&endpoint, &snapshot);
    Ok(())
}

fn colorize(status: SensorStatus, text: String) -> ColoredString {
    match status {
        SensorStatus::Good => text.green(),
        SensorStatus::Warning => text.yellow(),
        SensorStatus::Critical => text.red().bold(),
    }
}

fn print_sensor<F, C>(label: &str, reading: Option<f64>, format: F, classify: C)
where
    F: Fn(f64) -> String,
    C: Fn(f64) -> SensorStatus,
{
    match reading {
        Some(value) => {
            let status = classify(value);
            println!(
                "  {} {} ({:?})",
                format!("{:<12}", label).white(),
                colorize(status, format(value)),
                status
            );
        }
        None => println!("  {} {}", format!("{:<12}", label).white(), "offline".dimmed()),
    }
}

fn print_report(endpoint: &str, snapshot: &SystemSnapshot) {
    println!("{} {}", "Endpoint:".white(), endpoint.cyan().bold());
    println!();

    println!("{}", "Sensors".white().bold());
    print_sensor("pH", snapshot.sensors.ph, format_ph, classify_ph);
    print_sensor(
        "Turbidity",
        snapshot.sensors.turbidity,
        format_turbidity,
        classify_turbidity,
    );
    print_sensor(
        "Salinity",
        snapshot.sensors.salinity,
        format_salinity,
        classify_salinity,
    );
    match snapshot.sensors.flow {
        Some(flow) => println!("  {} {}", format!("{:<12}", "Flow").white(), format_flow(flow).cyan()),
        None => println!("  {} {}", format!("{:<12}", "Flow").white(), "offline".dimmed()),
    }
    println!();

    let score = quality_score(&snapshot.sensors);
    let rating = quality_rating(score);
    println!("{}", "System".white().bold());
    println!(
        "  {} {}",
        format!("{:<18}", "Water level").white(),
        format_percent(snapshot.water_level).cyan().bold()
    );
    println!(
        "  {} {} ({:.0})",
        format!("{:<18}", "Water quality").white(),
        rating.label().cyan().bold(),
        score
    );
    println!(
        "  {} {}",
        format!("{:<18}", "Total flow").white(),
        format_flow(total_flow(snapshot)).cyan()
    );
    println!(
        "  {} {}",
        format!("{:<18}", "System pressure").white(),
        format_pressure(system_pressure(snapshot)).cyan()
    );
    println!(
        "  {} {}%",
        format!("{:<18}", "Energy efficiency").white(),
        energy_efficiency(snapshot).to_string().cyan()
    );
    println!();

    println!(
        "{} {} open / {} total",
        "Valves:".white().bold(),
        open_valve_count(snapshot).to_string().cyan().bold(),
        snapshot.valves.len()
    );
    for (name, state) in &snapshot.valves {
        let state_str = if state.is_open() {
            "OPEN".green()
        } else {
            "CLOSED".dimmed()
        };
        println!("  {} {}", name.cyan(), state_str);
    }
    println!();

    println!(
        "{} {} open / {} total",
        "Taps:".white().bold(),
        open_tap_count(snapshot).to_string().cyan().bold(),
        snapshot.taps.len()
    );
    for (name, state) in &snapshot.taps {
        let state_str = if state.is_open() {
            "FLOWING".green()
        } else {
            "CLOSED".dimmed()
        };
        println!("  {} {}", name.cyan(), state_str);
    }
    println!();

    let leaks = partition_leaks(&snapshot.leaks);
    if leaks.has_active() {
        println!(
            "{} {}",
            "ACTIVE LEAKS DETECTED:".red().bold(),
            leaks.active_count().to_string().red().bold()
        );
        for pipe in &leaks.active {
            println!("  {} {}", "●".red(), pipe.red());
        }
    } else {
        println!("{}", "No active leaks detected.".green());
    }
}
