// ABOUTME: CLI config command - print the effective configuration or write it out as a starting point

use anyhow::{Context, Result};

use super::ConfigArgs;
use crate::config::AppConfig;

pub fn execute(args: &ConfigArgs, config: &AppConfig) -> Result<()> {
    match &args.write {
        Some(path) => {
            config.save_to(path)?;
            println!("Wrote configuration to {}", path.display());
        }
        None => {
            let content =
                toml::to_string_pretty(config).context("Failed to serialize configuration")?;
            print!("{content}");
        }
    }
    Ok(())
}
