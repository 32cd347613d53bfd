//! Leak scan command handler.

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::*;

use crate::core::config::Config;
use crate::core::telemetry::SnapshotClient;

/// Execute the leaks command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let endpoint = matches
        .get_one::<String>("endpoint")
        .cloned()
        .unwrap_or_else(|| config.endpoint().to_string());

    println!("{}", "Scanning for leaks...".cyan());

    let client = SnapshotClient::new(&endpoint);
    let report = client.check_leaks().context("Failed to check for leaks")?;

    println!();
    println!("{}", "Leak Detection Report".white().bold());
    println!("{}", "─".repeat(40));

    if let Some(total_pipes) = report.total_pipes {
        println!(
            "{} {}",
            "Pipes scanned:".white(),
            total_pipes.to_string().cyan().bold()
        );
    }

    let active_str = report.total_active.to_string();
    println!(
        "{} {}",
        "Active leaks:".white(),
        if report.total_active > 0 {
            active_str.red().bold()
        } else {
            active_str.green().bold()
        }
    );

    if let Some(inactive) = report.inactive_leak_count {
        println!(
            "{} {}",
            "Inactive leaks:".white(),
            inactive.to_string().yellow()
        );
    }

    if report.active_leaks.is_empty() {
        println!();
        println!(
            "{}",
            "All pipes in the water network are functioning properly.".green()
        );
    } else {
        println!();
        println!("{}", "Active leaks detected:".red().bold());
        for (index, pipe) in report.active_leaks.iter().enumerate() {
            println!("  {}. {}", index + 1, pipe.red());
        }
        println!();
        println!("{}", "Recommended actions:".white().bold());
        println!("  1. Immediately isolate affected pipe sections");
        println!("  2. Dispatch maintenance team to location");
        println!("  3. Monitor adjacent pipe pressure");
    }

    Ok(())
}
