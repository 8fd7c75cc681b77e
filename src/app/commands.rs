//! One-shot subcommands. Each returns the text to print so the output can be
//! checked without a terminal.

use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use crate::catalog::{self, Section};
use crate::config::{load_rate_card, RateCard};
use crate::error::Result;
use crate::estimator::{ComplexityTier, ProjectCategory, TechnologySelection};
use crate::ui::screens::calculator::weeks_label;
use crate::ui::screens::catalog::section_lines;
use crate::utils::{format_amount, render_table};

/// Rate card in effect plus a short label describing where it came from.
#[derive(Debug, Clone)]
pub struct ActiveRates {
    pub card: RateCard,
    pub label: String,
}

pub fn resolve_rates(path: Option<&Path>) -> Result<ActiveRates> {
    match path {
        Some(path) => {
            let card = load_rate_card(path)?;
            Ok(ActiveRates {
                card,
                label: path.display().to_string(),
            })
        }
        None => {
            info!("Using built-in rate card");
            Ok(ActiveRates {
                card: RateCard::builtin(),
                label: "built-in".to_string(),
            })
        }
    }
}

#[derive(Debug, Serialize)]
struct EstimateReport<'a> {
    category: Option<ProjectCategory>,
    complexity: ComplexityTier,
    technologies: &'a TechnologySelection,
    budget: u64,
    duration_weeks: u64,
    currency: &'a str,
}

/// Parse the user's keys leniently and print the estimate.
///
/// Unknown categories and complexities fall back the same way the estimator
/// does, with a warning. Catalog technologies are normalised to their catalog
/// spelling; other tags still count towards the bonus.
pub fn estimate_report(
    card: &RateCard,
    category: Option<&str>,
    complexity: &str,
    technologies: &[String],
    json: bool,
) -> Result<String> {
    let parsed_category = match category.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => {
            let parsed = ProjectCategory::from_key(raw);
            if parsed.is_none() {
                warn!("Unknown project category `{raw}`; no category adjustment applied");
            }
            parsed
        }
        None => None,
    };

    let tier = ComplexityTier::from_key(complexity).unwrap_or_else(|| {
        warn!("Unknown complexity `{complexity}`; using medium");
        ComplexityTier::Medium
    });

    let mut selection = TechnologySelection::new();
    for raw in technologies {
        match catalog::technology(raw) {
            Some(known) => {
                selection.insert(known);
            }
            None if raw.trim().is_empty() => {}
            None => {
                warn!("Technology `{}` is not in the catalog; counting it anyway", raw.trim());
                selection.insert(raw);
            }
        }
    }

    let result = card.estimate(parsed_category, tier, &selection);

    if json {
        let report = EstimateReport {
            category: parsed_category,
            complexity: tier,
            technologies: &selection,
            budget: result.budget,
            duration_weeks: result.duration_weeks,
            currency: &card.currency,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let category_cell = match parsed_category {
        Some(category) => format!(
            "{} (×{})",
            category.label(),
            card.category_multiplier(Some(category))
        ),
        None => "Not specified (×1)".to_string(),
    };
    let technologies_cell = if selection.is_empty() {
        "none".to_string()
    } else {
        let bonus = card.technology_bonus * selection.len() as f64;
        format!(
            "{} (+{} {})",
            selection.iter().collect::<Vec<_>>().join(", "),
            format_amount(bonus.round() as u64),
            card.currency
        )
    };

    let rows = vec![
        vec!["Project type".to_string(), category_cell],
        vec![
            "Complexity".to_string(),
            format!("{} (×{})", tier.label(), card.complexity_multiplier(tier)),
        ],
        vec!["Technologies".to_string(), technologies_cell],
        vec![
            "Budget".to_string(),
            format!("{} {}", format_amount(result.budget), card.currency),
        ],
        vec!["Duration".to_string(), weeks_label(result.duration_weeks)],
    ];
    Ok(render_table(&["Input", "Value"], &rows))
}

/// Plain-text rendering of one catalog section, or all of them.
pub fn catalog_report(section: Option<Section>) -> String {
    let sections: Vec<Section> = match section {
        Some(section) => vec![section],
        None => Section::ALL.to_vec(),
    };

    let mut out = String::new();
    for section in sections {
        out.push_str(&format!("== {} ==\n", section.title()));
        for line in section_lines(section) {
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            out.push_str(text.trim_end());
            out.push('\n');
        }
        if !out.ends_with("\n\n") {
            out.push('\n');
        }
    }
    out
}

/// Tables (or JSON) describing the active rate card.
pub fn rates_report(rates: &ActiveRates, json: bool) -> Result<String> {
    let card = &rates.card;
    if json {
        return Ok(serde_json::to_string_pretty(card)?);
    }

    let mut out = format!("Rate card: {}\n\n", rates.label);

    let base_rows = vec![
        vec![
            "Base price".to_string(),
            format!("{} {}", format_amount(card.base_price.round() as u64), card.currency),
        ],
        vec![
            "Base duration".to_string(),
            format!("{} weeks", card.base_duration_weeks),
        ],
        vec![
            "Per technology".to_string(),
            format!(
                "+{} {} (budget only)",
                format_amount(card.technology_bonus.round() as u64),
                card.currency
            ),
        ],
    ];
    out.push_str(&render_table(&["Constant", "Value"], &base_rows));
    out.push('\n');

    let category_rows: Vec<Vec<String>> = card
        .categories
        .iter()
        .map(|(category, factor)| {
            vec![
                category.key().to_string(),
                category.label().to_string(),
                format!("×{factor}"),
            ]
        })
        .collect();
    out.push_str(&render_table(&["Category", "Label", "Multiplier"], &category_rows));
    out.push('\n');

    let tier_rows: Vec<Vec<String>> = card
        .complexities
        .iter()
        .map(|(tier, factor)| {
            vec![
                tier.key().to_string(),
                tier.label().to_string(),
                format!("×{factor}"),
            ]
        })
        .collect();
    out.push_str(&render_table(&["Complexity", "Label", "Multiplier"], &tier_rows));

    Ok(out)
}
