//! Hand-curated enum entries merged over the extracted proto enums.
//!
//! The upstream proto lags behind the game, so new forms can be added
//! locally before they are published. The file holds one table per enum
//! block:
//!
//! ```toml
//! [Form]
//! pikachu_flying_5th_anniv = 2799
//! MEOWTH_GALARIAN = "2335"
//! ```
//!
//! Names are upper-cased when applied; values may be integers or numeric
//! strings.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use toml::Value;
use tracing::debug;

use crate::error::{IconError, Result};
use crate::proto::ProtoEnum;

/// Default file name looked up in the working directory
pub const DEFAULT_OVERRIDES_FILE: &str = "enum-overrides.toml";

/// Validated override entries, keyed by enum block name.
///
/// Entries keep their file order, which decides the canonical name when
/// two entries share a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumOverrides {
    blocks: BTreeMap<String, Vec<(String, i64)>>,
}

impl EnumOverrides {
    /// Load overrides from a TOML file.
    ///
    /// A missing file yields no overrides; an unreadable or malformed file
    /// is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No overrides file at {}", path.display());
            return Ok(EnumOverrides::default());
        }

        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let raw: toml::Table = toml::from_str(contents)?;

        let mut blocks = BTreeMap::new();
        for (block, entries) in raw {
            let entries = match entries {
                Value::Table(entries) => entries,
                other => {
                    return Err(IconError::InvalidOverride {
                        block,
                        name: String::new(),
                        value: other.to_string(),
                    })
                }
            };

            let mut values = Vec::with_capacity(entries.len());
            for (name, value) in entries {
                let parsed = match &value {
                    Value::Integer(v) => Some(*v),
                    Value::String(text) => text.trim().parse().ok(),
                    _ => None,
                };
                let Some(parsed) = parsed else {
                    return Err(IconError::InvalidOverride {
                        block: block.clone(),
                        name,
                        value: value.to_string(),
                    });
                };
                values.push((name, parsed));
            }
            blocks.insert(block, values);
        }

        Ok(EnumOverrides { blocks })
    }

    /// Number of entries configured for a block
    pub fn count(&self, block: &str) -> usize {
        self.blocks.get(block).map_or(0, Vec::len)
    }

    /// Merge this block's entries into `target` in file order, overriding
    /// existing names
    pub fn apply(&self, block: &str, target: &mut ProtoEnum) {
        let Some(entries) = self.blocks.get(block) else {
            return;
        };

        for (name, value) in entries {
            target.insert(name.to_uppercase(), *value);
        }
    }
}
