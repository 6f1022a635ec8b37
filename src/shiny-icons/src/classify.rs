//! Shiny variant selection per creature and form
//!
//! Decides for every released creature which of its forms get an icon
//! and whether that icon comes from the shiny or the non-shiny set:
//!
//! - the base form (00) is always copied, shiny iff the creature can be
//!   found shiny in the wild
//! - Alolan forms are shiny only when their own `alolan_shiny` flag says so
//! - shadow and purified forms never appear in the wild and are skipped
//! - every other form follows the base form

use crate::dataset::ShinyRecord;
use crate::proto::ProtoEnum;

/// Marks regional forms with their own shiny availability
pub const REGIONAL_MARKER: &str = "ALOLA";

/// Forms that can't be encountered in the wild
pub const NEVER_WILD_MARKERS: [&str; 2] = ["SHADOW", "PURIFIED"];

/// Characters dropped from display names before matching form names
const STRIPPED_CHARS: [char; 5] = ['’', '\'', '♀', '♂', '.'];

/// Wild shiny availability for one creature
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShinyPolicy {
    /// Base and ordinary forms can be found shiny
    pub normal: bool,
    /// The Alolan form can be found shiny
    pub alolan: bool,
}

impl ShinyPolicy {
    pub fn from_record(record: Option<&ShinyRecord>) -> Self {
        match record {
            Some(record) if record.found_wild => ShinyPolicy {
                normal: true,
                alolan: record.alolan_shiny.unwrap_or(false),
            },
            _ => ShinyPolicy::default(),
        }
    }
}

/// What to do with one named form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormDecision {
    Copy { shiny: bool },
    Skip,
}

/// Turn a display name into the prefix used in `Form` enum names.
///
/// `"Mr. Mime"` becomes `"MR_MIME_"`, `"Nidoran♀"` becomes `"NIDORAN_"`.
pub fn clean_name(display_name: &str) -> String {
    let mut token: String = display_name
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect::<String>()
        .to_uppercase();
    token.push('_');
    token
}

pub fn decide_form(form_name: &str, policy: ShinyPolicy) -> FormDecision {
    if form_name.contains(REGIONAL_MARKER) {
        FormDecision::Copy {
            shiny: policy.alolan,
        }
    } else if NEVER_WILD_MARKERS.iter().any(|m| form_name.contains(m)) {
        FormDecision::Skip
    } else {
        FormDecision::Copy {
            shiny: policy.normal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedForm {
    pub name: String,
    pub form_id: i64,
    pub decision: FormDecision,
}

/// All icon decisions for one creature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreaturePlan {
    pub creature_id: u32,
    pub name: String,
    /// Cleaned name prefix used to match forms
    pub token: String,
    pub policy: ShinyPolicy,
    /// Matching forms in enum order; the base form is implicit
    pub forms: Vec<PlannedForm>,
}

impl CreaturePlan {
    /// `(form_id, shiny)` for every icon to copy, base form first
    pub fn copies(&self) -> Vec<(i64, bool)> {
        let mut copies = vec![(0, self.policy.normal)];
        copies.extend(self.forms.iter().filter_map(|f| match f.decision {
            FormDecision::Copy { shiny } => Some((f.form_id, shiny)),
            FormDecision::Skip => None,
        }));
        copies
    }

    pub fn skipped(&self) -> usize {
        self.forms
            .iter()
            .filter(|f| f.decision == FormDecision::Skip)
            .count()
    }
}

/// Build the plan for one creature from its display name, its shiny record
/// (if any) and the `Form` enum.
pub fn plan_creature(
    creature_id: u32,
    name: &str,
    record: Option<&ShinyRecord>,
    forms: &ProtoEnum,
) -> CreaturePlan {
    let policy = ShinyPolicy::from_record(record);
    let token = clean_name(name);

    let forms = forms
        .members()
        .into_iter()
        .filter(|(form_name, _)| form_name.contains(&token))
        .map(|(form_name, form_id)| PlannedForm {
            name: form_name.to_owned(),
            form_id,
            decision: decide_form(form_name, policy),
        })
        .collect();

    CreaturePlan {
        creature_id,
        name: name.to_owned(),
        token,
        policy,
        forms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(found_wild: bool, alolan_shiny: Option<bool>) -> ShinyRecord {
        ShinyRecord {
            found_wild,
            alolan_shiny,
        }
    }

    fn vulpix_forms() -> ProtoEnum {
        let mut forms = ProtoEnum::new("Form");
        forms.insert("FORM_UNSET", 0);
        forms.insert("VULPIX_NORMAL", 55);
        forms.insert("VULPIX_ALOLA", 56);
        forms.insert("VULPIX_SHADOW", 57);
        forms.insert("VULPIX_PURIFIED", 58);
        forms.insert("NINETALES_ALOLA", 60);
        forms
    }

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("Bulbasaur"), "BULBASAUR_");
        assert_eq!(clean_name("Mr. Mime"), "MR_MIME_");
        assert_eq!(clean_name("Farfetch’d"), "FARFETCHD_");
        assert_eq!(clean_name("Farfetch'd"), "FARFETCHD_");
        assert_eq!(clean_name("Nidoran♀"), "NIDORAN_");
        assert_eq!(clean_name("Nidoran♂"), "NIDORAN_");
        assert_eq!(clean_name("Ho-Oh"), "HO_OH_");
        assert_eq!(clean_name("Porygon-Z"), "PORYGON_Z_");
    }

    #[test]
    fn test_policy_from_record() {
        assert_eq!(ShinyPolicy::from_record(None), ShinyPolicy::default());
        assert_eq!(
            ShinyPolicy::from_record(Some(&record(false, Some(true)))),
            ShinyPolicy {
                normal: false,
                alolan: false
            }
        );
        assert_eq!(
            ShinyPolicy::from_record(Some(&record(true, None))),
            ShinyPolicy {
                normal: true,
                alolan: false
            }
        );
        assert_eq!(
            ShinyPolicy::from_record(Some(&record(true, Some(true)))),
            ShinyPolicy {
                normal: true,
                alolan: true
            }
        );
    }

    #[test]
    fn test_decide_form() {
        let both = ShinyPolicy {
            normal: true,
            alolan: true,
        };
        let base_only = ShinyPolicy {
            normal: true,
            alolan: false,
        };

        assert_eq!(decide_form("VULPIX_ALOLA", both), FormDecision::Copy { shiny: true });
        assert_eq!(
            decide_form("VULPIX_ALOLA", base_only),
            FormDecision::Copy { shiny: false }
        );
        assert_eq!(decide_form("VULPIX_SHADOW", both), FormDecision::Skip);
        assert_eq!(decide_form("VULPIX_PURIFIED", both), FormDecision::Skip);
        assert_eq!(
            decide_form("VULPIX_NORMAL", base_only),
            FormDecision::Copy { shiny: true }
        );
        // the regional check runs first
        assert_eq!(
            decide_form("RATTATA_ALOLA_SHADOW", both),
            FormDecision::Copy { shiny: true }
        );
    }

    #[test]
    fn test_plan_without_record_is_never_shiny() {
        let plan = plan_creature(37, "Vulpix", None, &vulpix_forms());
        assert_eq!(plan.policy, ShinyPolicy::default());
        assert_eq!(plan.copies(), vec![(0, false), (55, false), (56, false)]);
        assert_eq!(plan.skipped(), 2);
    }

    #[test]
    fn test_plan_not_wild_is_never_shiny() {
        let plan = plan_creature(37, "Vulpix", Some(&record(false, Some(true))), &vulpix_forms());
        assert!(plan.copies().iter().all(|(_, shiny)| !shiny));
    }

    #[test]
    fn test_plan_alolan_shiny() {
        let plan = plan_creature(37, "Vulpix", Some(&record(true, Some(true))), &vulpix_forms());
        assert_eq!(plan.copies(), vec![(0, true), (55, true), (56, true)]);
    }

    #[test]
    fn test_plan_base_shiny_alolan_not() {
        let plan = plan_creature(37, "Vulpix", Some(&record(true, Some(false))), &vulpix_forms());
        assert_eq!(plan.copies(), vec![(0, true), (55, true), (56, false)]);
    }

    #[test]
    fn test_plan_matches_only_own_forms() {
        let plan = plan_creature(37, "Vulpix", None, &vulpix_forms());
        assert_eq!(plan.token, "VULPIX_");
        assert!(plan.forms.iter().all(|f| f.name.starts_with("VULPIX_")));
        assert_eq!(plan.forms.len(), 4);
    }

    #[test]
    fn test_plan_without_forms_still_copies_base() {
        let plan = plan_creature(1, "Bulbasaur", None, &vulpix_forms());
        assert!(plan.forms.is_empty());
        assert_eq!(plan.copies(), vec![(0, false)]);
    }

    #[test]
    fn test_plan_shared_override_value_uses_first_name() {
        let overrides = crate::overrides::EnumOverrides::from_toml_str(
            "[Form]\nvulpix_zz_alola = 900\nvulpix_aa_costume = 900\n",
        )
        .unwrap();
        let mut forms = ProtoEnum::new("Form");
        overrides.apply("Form", &mut forms);

        let plan = plan_creature(37, "Vulpix", Some(&record(true, Some(false))), &forms);
        assert_eq!(plan.forms.len(), 1);
        assert_eq!(plan.forms[0].name, "VULPIX_ZZ_ALOLA");
        assert_eq!(plan.copies(), vec![(0, true), (900, false)]);
    }

    #[test]
    fn test_plan_ignores_aliases() {
        let mut forms = vulpix_forms();
        forms.insert("VULPIX_ALOLA_ALIAS", 56);
        let plan = plan_creature(37, "Vulpix", None, &forms);
        assert_eq!(plan.forms.len(), 4);
    }
}
