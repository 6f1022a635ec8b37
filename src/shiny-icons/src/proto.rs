//! Enumeration extraction from protobuf schema text
//!
//! The game's protocol definitions are published as a single `.proto`
//! file. Only two of its enums matter here (`HoloPokemonId` and `Form`),
//! so instead of a real protobuf parser this module does a line scan:
//!
//! 1. Skip lines until one contains `enum <Name>`
//! 2. Record every `NAME = value;` line inside the block
//! 3. Stop at the first line containing `}`
//!
//! The block marker is matched by substring, so a block name that is a
//! prefix of a later enum's name can select the wrong block. Callers
//! always ask for the full name of an enum that appears first in the file.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::overrides::EnumOverrides;

/// An ordered name → value mapping extracted from one proto enum block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtoEnum {
    name: String,
    entries: Vec<(String, i64)>,
    index: HashMap<String, usize>,
}

impl ProtoEnum {
    pub fn new(name: impl Into<String>) -> Self {
        ProtoEnum {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Name of the proto block this enum was extracted from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert or replace an entry.
    ///
    /// Replacing keeps the entry at its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: i64) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }

    /// Look up a value by symbolic name (aliases included)
    pub fn get(&self, name: &str) -> Option<i64> {
        self.index.get(name).map(|&pos| self.entries[pos].1)
    }

    pub fn contains_value(&self, value: i64) -> bool {
        self.entries.iter().any(|(_, v)| *v == value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order, aliases included
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Canonical members in insertion order.
    ///
    /// A name whose value was already taken by an earlier name is an alias
    /// and is left out, so each value is yielded once.
    pub fn members(&self) -> Vec<(&str, i64)> {
        let mut seen = HashSet::new();
        self.iter().filter(|(_, v)| seen.insert(*v)).collect()
    }
}

/// Extract the `enum <block>` body from proto source text.
///
/// Never fails: a missing block is logged and yields an empty enum, and
/// lines whose value is not an integer (such as `option allow_alias = true;`)
/// are skipped.
pub fn extract_enum(source: &str, block: &str) -> ProtoEnum {
    let marker = format!("enum {}", block);
    let mut result = ProtoEnum::new(block);
    let mut found = false;

    for line in source.lines() {
        if !found {
            if line.contains(&marker) {
                found = true;
            }
            continue;
        }

        if !line.starts_with("syntax") && !line.starts_with("package") {
            if let Some((name, rest)) = line.split_once('=') {
                let name = name.trim();
                let value = rest.split(';').next().unwrap_or_default().trim();
                match value.parse::<i64>() {
                    Ok(value) if !name.is_empty() => result.insert(name, value),
                    _ => debug!("Skipping non-numeric line in enum {}: {}", block, line.trim()),
                }
            }
        }

        if line.contains('}') {
            break;
        }
    }

    if !found {
        warn!("enum {} not found in proto source", block);
    }

    result
}

/// Extract an enum block and merge any overrides configured for it.
pub fn parse_enum_proto(source: &str, block: &str, overrides: &EnumOverrides) -> ProtoEnum {
    let mut result = extract_enum(source, block);
    let before = result.len();
    overrides.apply(block, &mut result);

    debug!(
        "enum {}: {} extracted, {} after overrides",
        block,
        before,
        result.len()
    );

    result
}
