//! Build command handler
//!
//! Fetches the datasets and fills the `withShiny` folders.

use anyhow::{Context, Result};
use shiny_icons::{EnumOverrides, IconLayout};
use std::path::Path;

use crate::config::Config;
use crate::fetch;

/// Handle the build command (also the default when no command is given)
pub fn handle(root: &Path, overrides_path: &Path, dry_run: bool) -> Result<()> {
    let config = Config::load()?;
    let overrides = EnumOverrides::load(overrides_path)
        .with_context(|| format!("Failed to load overrides from {}", overrides_path.display()))?;

    let catalog = fetch::load_catalog(&config, &overrides)?;
    let layout = IconLayout::new(root).with_dry_run(dry_run);

    let summary = shiny_icons::run(&catalog, &layout).context(
        "Refusing to copy into a partial output tree. \
         Remove the conflicting path manually and re-run.",
    )?;

    if dry_run {
        println!("Dry run - nothing was written");
    }
    println!(
        "{} creatures: {} files copied, {} missing, {} shadow/purified forms skipped",
        summary.creatures, summary.files.copied, summary.files.missing, summary.skipped_forms
    );
    if summary.files.missing > 0 {
        println!("Some icons were missing - check the log for details");
    }

    Ok(())
}
