//! Forms command handler
//!
//! Shows how one creature's forms would be handled without copying.

use anyhow::{bail, Context, Result};
use shiny_icons::{CreaturePlan, EnumOverrides, FormDecision};
use std::fmt::Write;
use std::path::Path;

use crate::config::Config;
use crate::fetch;

/// Handle the forms command
pub fn handle(name: &str, overrides_path: &Path, json: bool) -> Result<()> {
    let config = Config::load()?;
    let overrides = EnumOverrides::load(overrides_path)
        .with_context(|| format!("Failed to load overrides from {}", overrides_path.display()))?;
    let catalog = fetch::load_catalog(&config, &overrides)?;

    let Some(plan) = catalog.find_by_name(name).and_then(|id| catalog.plan(id)) else {
        bail!("No released creature named {:?}", name);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&plan_json(&plan))?);
    } else {
        print!("{}", render_plan(&plan));
    }

    Ok(())
}

fn decision_label(decision: FormDecision) -> &'static str {
    match decision {
        FormDecision::Copy { shiny: true } => "shiny",
        FormDecision::Copy { shiny: false } => "non-shiny",
        FormDecision::Skip => "skipped",
    }
}

fn render_plan(plan: &CreaturePlan) -> String {
    let mut out = String::new();
    let base = FormDecision::Copy {
        shiny: plan.policy.normal,
    };

    let _ = writeln!(out, "#{} {} ({})", plan.creature_id, plan.name, plan.token);
    let _ = writeln!(
        out,
        "  wild shiny: {}, alolan shiny: {}",
        plan.policy.normal, plan.policy.alolan
    );
    let _ = writeln!(out, "  {:>5}  {:<32} {}", 0, "(base form)", decision_label(base));
    for form in &plan.forms {
        let _ = writeln!(
            out,
            "  {:>5}  {:<32} {}",
            form.form_id,
            form.name,
            decision_label(form.decision)
        );
    }

    out
}

fn plan_json(plan: &CreaturePlan) -> serde_json::Value {
    let forms: Vec<serde_json::Value> = plan
        .forms
        .iter()
        .map(|f| {
            serde_json::json!({
                "form": f.name,
                "id": f.form_id,
                "icon": decision_label(f.decision),
            })
        })
        .collect();

    serde_json::json!({
        "id": plan.creature_id,
        "name": plan.name,
        "token": plan.token,
        "wild_shiny": plan.policy.normal,
        "alolan_shiny": plan.policy.alolan,
        "base": decision_label(FormDecision::Copy { shiny: plan.policy.normal }),
        "forms": forms,
    })
}
