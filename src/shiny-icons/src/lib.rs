//! # shiny-icons
//!
//! Builds shiny-aware Pokemon GO icon folders from two existing icon packs.
//!
//! Each pack ships a shiny and a non-shiny set of icons. This library picks,
//! per creature and form, the variant that can actually be encountered in the
//! wild and copies it into a combined `withShiny` folder per pack.
//!
//! Inputs:
//! - the `HoloPokemonId` and `Form` enums from the game's proto definitions
//! - `released_pokemon.json` and `shiny_pokemon.json` from pogoapi.net
//! - optional local enum overrides
//!
//! ## Example
//!
//! ```no_run
//! use shiny_icons::{Catalog, EnumOverrides, IconLayout};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let proto = std::fs::read_to_string("base.proto")?;
//! let shiny = std::fs::read_to_string("shiny_pokemon.json")?;
//! let released = std::fs::read_to_string("released_pokemon.json")?;
//!
//! let overrides = EnumOverrides::load(std::path::Path::new("enum-overrides.toml"))?;
//! let catalog = Catalog::from_sources(&proto, &shiny, &released, &overrides)?;
//!
//! let summary = shiny_icons::run(&catalog, &IconLayout::new("."))?;
//! println!("{} files copied", summary.files.copied);
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod dataset;
pub mod error;
pub mod icons;
pub mod overrides;
pub mod pipeline;
pub mod proto;

#[doc(inline)]
pub use classify::{clean_name, plan_creature, CreaturePlan, FormDecision, ShinyPolicy};
#[doc(inline)]
pub use dataset::{ReleasedCreature, ShinyRecord};
#[doc(inline)]
pub use error::IconError;
#[doc(inline)]
pub use icons::{CopyOutcome, IconLayout, IconPack};
#[doc(inline)]
pub use overrides::{EnumOverrides, DEFAULT_OVERRIDES_FILE};
#[doc(inline)]
pub use pipeline::{run, Catalog, RunSummary, FORM_ENUM, SPECIES_ENUM};
#[doc(inline)]
pub use proto::{extract_enum, ProtoEnum};
