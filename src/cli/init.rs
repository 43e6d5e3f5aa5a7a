//! Init command - write the starter config file

use anyhow::{Context, Result};

use crate::config::{CONFIG_FILE, CONFIG_TEMPLATE};

pub fn run() -> Result<()> {
    let path = std::path::Path::new(CONFIG_FILE);
    if path.exists() {
        println!("{CONFIG_FILE} already exists; leaving it unchanged.");
        return Ok(());
    }

    std::fs::write(path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {CONFIG_FILE}"))?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  Edit {CONFIG_FILE} to tune scoring weights or extend the lexicons");
    println!("  rhetor analyze --file essay.txt      Run a full analysis");
    println!("  rhetor coach \"...\" --count 5         Practice against counterpoints");
    Ok(())
}
