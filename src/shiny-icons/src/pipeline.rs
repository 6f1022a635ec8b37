//! End-to-end run: join the datasets, plan every creature, copy icons.

use tracing::{debug, info, warn};

use crate::classify::{plan_creature, CreaturePlan, FormDecision};
use crate::dataset::{self, ReleasedPokemon, ShinyPokemon};
use crate::error::Result;
use crate::icons::{icon_base_name, CopyOutcome, IconLayout};
use crate::overrides::EnumOverrides;
use crate::proto::{self, ProtoEnum};

/// Proto enum holding species ids
pub const SPECIES_ENUM: &str = "HoloPokemonId";

/// Proto enum holding form ids
pub const FORM_ENUM: &str = "Form";

/// Everything fetched at startup, read-only for the rest of the run
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub species: ProtoEnum,
    pub forms: ProtoEnum,
    pub released: ReleasedPokemon,
    pub shiny: ShinyPokemon,
}

impl Catalog {
    /// Build a catalog from the raw proto text and the two JSON documents
    pub fn from_sources(
        proto_text: &str,
        shiny_json: &str,
        released_json: &str,
        overrides: &EnumOverrides,
    ) -> Result<Self> {
        Ok(Catalog {
            species: proto::parse_enum_proto(proto_text, SPECIES_ENUM, overrides),
            forms: proto::parse_enum_proto(proto_text, FORM_ENUM, overrides),
            released: dataset::parse_released(released_json)?,
            shiny: dataset::parse_shiny(shiny_json)?,
        })
    }

    /// Plan for one released creature
    pub fn plan(&self, creature_id: u32) -> Option<CreaturePlan> {
        let creature = self.released.get(&creature_id)?;
        Some(plan_creature(
            creature_id,
            &creature.name,
            self.shiny.get(&creature_id),
            &self.forms,
        ))
    }

    /// Plans for all released creatures in id order
    pub fn plans(&self) -> impl Iterator<Item = CreaturePlan> + '_ {
        self.released.iter().map(|(&id, creature)| {
            plan_creature(id, &creature.name, self.shiny.get(&id), &self.forms)
        })
    }

    /// Find a released creature by display name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<u32> {
        self.released
            .iter()
            .find(|(_, c)| c.name.eq_ignore_ascii_case(name))
            .map(|(&id, _)| id)
    }
}

/// Totals over a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub creatures: usize,
    pub without_forms: usize,
    pub skipped_forms: usize,
    pub files: CopyOutcome,
}

/// Copy every icon one plan asks for
pub fn execute_plan(plan: &CreaturePlan, layout: &IconLayout) -> CopyOutcome {
    let variant = |shiny: bool| if shiny { "shiny" } else { "non-shiny" };
    let mut outcome = layout.copy(plan.creature_id, 0, plan.policy.normal);

    for form in &plan.forms {
        let shiny = match form.decision {
            FormDecision::Copy { shiny } => shiny,
            FormDecision::Skip => {
                debug!("skip {} (never wild)", form.name);
                continue;
            }
        };

        debug!(
            "create {} ({}) as {}",
            icon_base_name(plan.creature_id, form.form_id),
            form.name,
            variant(shiny)
        );
        outcome += layout.copy(plan.creature_id, form.form_id, shiny);
    }

    outcome
}

/// Run the whole selection.
///
/// Creating the output directories is the only fatal step and happens
/// before anything is copied. Everything after that only logs.
pub fn run(catalog: &Catalog, layout: &IconLayout) -> Result<RunSummary> {
    if !layout.is_dry_run() {
        layout.create_output_dirs()?;
    }

    let mut summary = RunSummary::default();
    for plan in catalog.plans() {
        info!("clean name: {}", plan.token);

        if !catalog.species.is_empty() && !catalog.species.contains_value(i64::from(plan.creature_id)) {
            debug!(
                "mon {} {} is not in {}",
                plan.creature_id, plan.name, SPECIES_ENUM
            );
        }

        if plan.forms.is_empty() {
            warn!(
                "mon {} {} has no forms({})",
                plan.creature_id, plan.name, plan.token
            );
            summary.without_forms += 1;
        }
        debug!(
            "forms for mon {} / {} : {:?}",
            plan.creature_id,
            plan.name,
            plan.forms.iter().map(|f| f.name.as_str()).collect::<Vec<_>>()
        );

        summary.files += execute_plan(&plan, layout);
        summary.skipped_forms += plan.skipped();
        summary.creatures += 1;
    }

    info!(
        "{} creatures, {} files copied, {} missing, {} forms skipped",
        summary.creatures, summary.files.copied, summary.files.missing, summary.skipped_forms
    );

    Ok(summary)
}
