//! Configuration command handlers
//!
//! Handles the `configure` subcommand for changing data sources.

use crate::config::Config;
use anyhow::Result;

/// Requested changes to the stored configuration
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub proto_url: Option<String>,
    pub shiny_url: Option<String>,
    pub released_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConfigUpdate {
    fn is_empty(&self) -> bool {
        self.proto_url.is_none()
            && self.shiny_url.is_none()
            && self.released_url.is_none()
            && self.timeout_secs.is_none()
    }

    /// Apply the update, returning whether anything was set
    fn apply(self, config: &mut Config) -> bool {
        if self.is_empty() {
            return false;
        }

        if let Some(url) = self.proto_url {
            config.proto_url = url;
        }
        if let Some(url) = self.shiny_url {
            config.shiny_url = url;
        }
        if let Some(url) = self.released_url {
            config.released_url = url;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }

        true
    }
}

/// Handle the configure command
pub fn handle(update: ConfigUpdate, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if update.apply(&mut config) {
        config.save()?;
        println!("Configuration updated");
        if let Ok(path) = Config::config_path() {
            println!("Config saved to: {}", path.display());
        }
    } else {
        show_usage();
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    println!("Proto:    {}", config.proto_url);
    println!("Shiny:    {}", config.shiny_url);
    println!("Released: {}", config.released_url);
    println!("Timeout:  {}s", config.timeout_secs);

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn show_usage() {
    println!("Usage: shiny-icons configure --proto-url URL --shiny-url URL --released-url URL");
    println!("   or: shiny-icons configure --timeout-secs 60");
    println!("   or: shiny-icons configure --show");
}
