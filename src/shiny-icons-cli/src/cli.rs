//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand};
use shiny_icons::DEFAULT_OVERRIDES_FILE;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shiny-icons")]
#[command(about = "Assemble shiny-aware Pokemon GO icon folders", long_about = None)]
pub struct Cli {
    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Enum overrides file (ignored if it doesn't exist)
    #[arg(long, global = true, default_value = DEFAULT_OVERRIDES_FILE)]
    pub overrides: PathBuf,

    /// Defaults to `build`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Copy the selected icons into the withShiny folders
    #[command(visible_alias = "b")]
    Build {
        /// Directory containing the icon pack folders
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Resolve and log every copy without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the form and shiny decisions for one creature
    #[command(visible_alias = "f")]
    Forms {
        /// Display name as in released_pokemon.json (e.g. "Vulpix")
        name: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configure data source URLs and timeout
    #[command(visible_alias = "c")]
    Configure {
        #[arg(long)]
        proto_url: Option<String>,

        #[arg(long)]
        shiny_url: Option<String>,

        #[arg(long)]
        released_url: Option<String>,

        /// Download timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

impl Commands {
    pub fn default_build() -> Self {
        Commands::Build {
            root: PathBuf::from("."),
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["shiny-icons"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.overrides, PathBuf::from(DEFAULT_OVERRIDES_FILE));
        match Commands::default_build() {
            Commands::Build { root, dry_run } => {
                assert_eq!(root, PathBuf::from("."));
                assert!(!dry_run);
            }
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn test_build_dry_run() {
        let cli = Cli::try_parse_from(["shiny-icons", "-vv", "build", "--dry-run", "--root", "/icons"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Build { root, dry_run }) => {
                assert_eq!(root, PathBuf::from("/icons"));
                assert!(dry_run);
            }
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn test_forms_rejects_root() {
        assert!(Cli::try_parse_from(["shiny-icons", "forms", "Vulpix", "--root", "/icons"]).is_err());

        let cli = Cli::try_parse_from(["shiny-icons", "forms", "Vulpix", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Forms { name, json }) => {
                assert_eq!(name, "Vulpix");
                assert!(json);
            }
            _ => panic!("expected forms command"),
        }
    }
}
