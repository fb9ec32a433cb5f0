use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("nodestat version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
