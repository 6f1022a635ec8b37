mod cli;
mod commands;
mod config;
mod fetch;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::*;
use commands::configure::ConfigUpdate;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or_else(Commands::default_build) {
        Commands::Build { root, dry_run } => {
            commands::build::handle(&root, &cli.overrides, dry_run)?;
        }

        Commands::Forms { name, json } => {
            commands::forms::handle(&name, &cli.overrides, json)?;
        }

        Commands::Configure {
            proto_url,
            shiny_url,
            released_url,
            timeout_secs,
            show,
        } => {
            let update = ConfigUpdate {
                proto_url,
                shiny_url,
                released_url,
                timeout_secs,
            };
            commands::configure::handle(update, show)?;
        }
    }

    Ok(())
}

/// Log to stderr; only warnings and errors unless -v is given
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
