//! Config command handler.

use anyhow::Result;
use clap::ArgMatches;
use colored::*;

use crate::core::config::Config;

/// Execute the config command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("set-endpoint", sub_matches)) => {
            let url = sub_matches.get_one::<String>("url").unwrap();

            let mut config = Config::load()?;
            config.set_endpoint(url.clone());
            config.save()?;

            println!("{} {}", "Endpoint set to:".white(), url.cyan().bold());
        }
        Some(("set-interval", sub_matches)) => {
            let secs = *sub_matches.get_one::<u64>("seconds").unwrap();

            let mut config = Config::load()?;
            config.set_poll_interval(secs);
            config.save()?;

            println!(
                "{} {}",
                "Poll interval set to:".white(),
                format!("{}s", secs).cyan().bold()
            );
        }
        Some(("show", _)) => {
            let config = Config::load()?;

            println!("{}", "Configuration:".white().bold());
            println!(
                "  {} {}",
                format!("{:<16}", "endpoint").white(),
                config.endpoint().cyan().bold()
            );
            println!(
                "  {} {}",
                format!("{:<16}", "poll interval").white(),
                format!("{}s", config.poll_interval_secs).cyan().bold()
            );
        }
        _ => {
            println!("Use 'aquaflow config --help' for more information.");
        }
    }

    Ok(())
}
