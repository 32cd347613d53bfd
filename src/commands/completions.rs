use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completions for the specified shell
pub fn execute(matches: &ArgMatches, cli: &mut Command) -> Result<()> {
    let shell_str = matches
        .get_one::<String>("shell")
        .ok_or_else(|| anyhow!("shell argument is required"))?;

    let shell = shell_str.to_lowercase().parse::<Shell>().map_err(|_| {
        anyhow!(
            "Unsupported shell: {} (expected bash, zsh, fish, powershell or elvish)",
            shell_str
        )
    })?;

    generate(shell, cli, "aquaflow", &mut io::stdout());
    Ok(())
}
