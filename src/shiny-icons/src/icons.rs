//! Icon pack layout, icon lookup and copying
//!
//! Source icons live in one directory per (pack, shininess):
//!
//! ```text
//! Discord_hiRes_noShiny_withBorder/pokemon_icon_001_00.png
//! Discord_hiRes_allShiny_withBorder/pokemon_icon_001_00.png
//! Telegram_hiRes_noShiny_withBorder/pokemon_icon_001_00.webp
//! Telegram_hiRes_allShiny_withBorder/pokemon_icon_001_00.webp
//! ```
//!
//! Output goes to `<Pack>_hiRes_withShiny_withBorder/` under the same
//! canonical file name, whichever variant was picked.

use std::fs;
use std::io::ErrorKind;
use std::ops::AddAssign;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::error::{IconError, Result};

/// A branded icon set with its own file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconPack {
    pub name: &'static str,
    pub extension: &'static str,
}

pub const DISCORD: IconPack = IconPack {
    name: "Discord",
    extension: "png",
};

pub const TELEGRAM: IconPack = IconPack {
    name: "Telegram",
    extension: "webp",
};

/// Packs in copy order
pub const PACKS: [IconPack; 2] = [DISCORD, TELEGRAM];

/// Pack whose source directories decide which file name exists
const PROBE_PACK: IconPack = TELEGRAM;

/// `pokemon_icon_<id3>_<form2>` without extension
pub fn icon_base_name(creature_id: u32, form_id: i64) -> String {
    format!("pokemon_icon_{:03}_{:02}", creature_id, form_id)
}

/// Result counters for one or more copy requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOutcome {
    pub copied: usize,
    pub missing: usize,
}

impl AddAssign for CopyOutcome {
    fn add_assign(&mut self, rhs: Self) {
        self.copied += rhs.copied;
        self.missing += rhs.missing;
    }
}

/// Directory layout rooted at the working directory
#[derive(Debug, Clone)]
pub struct IconLayout {
    root: PathBuf,
    dry_run: bool,
}

impl IconLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        IconLayout {
            root: root.into(),
            dry_run: false,
        }
    }

    /// Resolve icons and log planned copies without touching the outputs
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn source_dir(&self, pack: IconPack, shiny: bool) -> PathBuf {
        let variant = if shiny { "allShiny" } else { "noShiny" };
        self.root
            .join(format!("{}_hiRes_{}_withBorder", pack.name, variant))
    }

    pub fn output_dir(&self, pack: IconPack) -> PathBuf {
        self.root
            .join(format!("{}_hiRes_withShiny_withBorder", pack.name))
    }

    /// Create both output directories.
    ///
    /// An existing directory is reused. Any other failure is returned so the
    /// run can stop before a partial tree is written.
    pub fn create_output_dirs(&self) -> Result<()> {
        for pack in [TELEGRAM, DISCORD] {
            let path = self.output_dir(pack);
            match fs::create_dir(&path) {
                Ok(()) => info!("Created {}", path.display()),
                Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => {
                    debug!("Reusing existing {}", path.display());
                }
                Err(source) => return Err(IconError::CreateDir { path, source }),
            }
        }

        Ok(())
    }

    /// Find the icon file name (without extension) to use for a form.
    ///
    /// Falls back to the base form when the form has no icon of its own.
    /// Returns `None` only when the base form itself is missing.
    pub fn locate(&self, creature_id: u32, form_id: i64, shiny: bool) -> Option<String> {
        let name = icon_base_name(creature_id, form_id);
        let path = self
            .source_dir(PROBE_PACK, shiny)
            .join(format!("{}.{}", name, PROBE_PACK.extension));

        if path.is_file() {
            return Some(name);
        }

        if form_id == 0 {
            warn!("Form 00 file not found: {}", path.display());
            None
        } else {
            warn!(
                "did not find file {} - fallback to 00 form",
                path.display()
            );
            Some(icon_base_name(creature_id, 0))
        }
    }

    /// Copy the icon for (creature, form) from the chosen variant into
    /// every pack's output directory.
    ///
    /// Missing sources are logged and counted, never fatal.
    pub fn copy(&self, creature_id: u32, form_id: i64, shiny: bool) -> CopyOutcome {
        let mut outcome = CopyOutcome::default();

        let Some(file_name) = self.locate(creature_id, form_id, shiny) else {
            error!(
                "No icon for {} in any form, skipping",
                icon_base_name(creature_id, form_id)
            );
            outcome.missing += PACKS.len();
            return outcome;
        };

        let target_name = icon_base_name(creature_id, form_id);
        for pack in PACKS {
            let source = self
                .source_dir(pack, shiny)
                .join(format!("{}.{}", file_name, pack.extension));
            let target = self
                .output_dir(pack)
                .join(format!("{}.{}", target_name, pack.extension));

            if self.dry_run {
                if source.is_file() {
                    info!("would copy {} to {}", source.display(), target.display());
                    outcome.copied += 1;
                } else {
                    error!("File {} not found, skipping.", source.display());
                    outcome.missing += 1;
                }
                continue;
            }

            info!("copy {} to {}", source.display(), target.display());
            match fs::copy(&source, &target) {
                Ok(_) => outcome.copied += 1,
                Err(e) if e.kind() == ErrorKind::NotFound && !source.exists() => {
                    error!("File {} not found, skipping.", source.display());
                    outcome.missing += 1;
                }
                Err(e) => {
                    error!(
                        "Failed copying {} to {}: {}",
                        source.display(),
                        target.display(),
                        e
                    );
                    outcome.missing += 1;
                }
            }
        }

        outcome
    }
}
