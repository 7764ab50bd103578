use crate::config::{CONFIG_FILE_NAME, StorycraftConfig};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn handle_init() -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);
    if path.exists() {
        anyhow::bail!("{} already exists in the current directory", CONFIG_FILE_NAME);
    }

    StorycraftConfig::default().save(path)?;
    println!("{} {}", "Created".green().bold(), CONFIG_FILE_NAME);
    println!("Edit the [llm] section to point at your completion endpoint.");
    Ok(())
}
