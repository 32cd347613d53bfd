use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("aquaflow version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
