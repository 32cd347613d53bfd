use anyhow::Result;
use clap::{Arg, Command};

use aquaflow::commands;

fn build_cli() -> Command {
    Command::new("aquaflow")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal dashboard for water-utility telemetry monitoring and control")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Run the live monitoring dashboard")
                .arg(
                    Arg::new("endpoint")
                        .short('e')
                        .long("endpoint")
                        .value_name("URL")
                        .help("Backend base URL (overrides the configured endpoint)"),
                )
                .arg(
                    Arg::new("interval")
                        .short('i')
                        .long("interval")
                        .value_name("SECONDS")
                        .help("Auto-refresh interval in seconds")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("no-auto-refresh")
                        .long("no-auto-refresh")
                        .help("Start with the auto-refresh timer disabled")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("status")
                .about("Fetch one snapshot and print a status report")
                .arg(
                    Arg::new("endpoint")
                        .short('e')
                        .long("endpoint")
                        .value_name("URL")
                        .help("Backend base URL (overrides the configured endpoint)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the raw snapshot as JSON")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("leaks")
                .about("Run a leak scan on the backend and print the report")
                .arg(
                    Arg::new("endpoint")
                        .short('e')
                        .long("endpoint")
                        .value_name("URL")
                        .help("Backend base URL (overrides the configured endpoint)"),
                ),
        )
        .subcommand(
            Command::new("control")
                .about("Send a control command to the backend")
                .arg(
                    Arg::new("action")
                        .help("One of: toggle-valve, toggle-tap, isolate-leak, emergency-shutdown, notify-maintenance")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("target")
                        .help("Valve, tap or pipe name (required by targeted actions)")
                        .index(2),
                )
                .arg(
                    Arg::new("endpoint")
                        .short('e')
                        .long("endpoint")
                        .value_name("URL")
                        .help("Backend base URL (overrides the configured endpoint)"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Manage persisted configuration (use 'aquaflow config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("set-endpoint")
                        .about("Set the backend base URL")
                        .arg(
                            Arg::new("url")
                                .help("Backend base URL")
                                .required(true)
                                .index(1),
                        ),
                )
                .subcommand(
                    Command::new("set-interval")
                        .about("Set the dashboard auto-refresh interval")
                        .arg(
                            Arg::new("seconds")
                                .help("Interval in seconds")
                                .required(true)
                                .value_parser(clap::value_parser!(u64))
                                .index(1),
                        ),
                )
                .subcommand(Command::new("show").about("Show the current configuration")),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for (bash, zsh, fish, powershell, elvish)")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn main() -> Result<()> {
    aquaflow::init_logging();

    let mut cli = build_cli();
    let matches = cli.clone().get_matches();

    if matches.get_flag("version") {
        println!("aquaflow version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match matches.subcommand() {
        Some(("dashboard", sub_matches)) => commands::dashboard::execute(sub_matches),
        Some(("status", sub_matches)) => commands::status::execute(sub_matches),
        Some(("leaks", sub_matches)) => commands::leaks::execute(sub_matches),
        Some(("control", sub_matches)) => commands::control::execute(sub_matches),
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        Some(("completions", sub_matches)) => commands::completions::execute(sub_matches, &mut cli),
        Some(("version", _)) => commands::version::execute(),
        _ => {
            println!("Welcome to AquaFlow!");
            println!("Use 'aquaflow --help' for more information.");
            Ok(())
        }
    }
}
