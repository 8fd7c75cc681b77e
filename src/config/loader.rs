use std::{collections::BTreeMap, fs, path::Path};

use log::{debug, info};
use serde::Deserialize;

use crate::error::{Context, Result};
use crate::estimator::{ComplexityTier, ProjectCategory};

use super::{validator, RateCard};

/// Rate card as it appears on disk. Every field is optional and falls back to
/// the built-in value; tables are merged key by key over the built-in tables.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRateCard {
    currency: Option<String>,
    base_price: Option<f64>,
    base_duration_weeks: Option<f64>,
    technology_bonus: Option<f64>,
    #[serde(default)]
    categories: BTreeMap<String, f64>,
    #[serde(default)]
    complexities: BTreeMap<String, f64>,
}

/// Result of merging a raw card over the built-in one, before validation.
#[derive(Debug, Clone)]
pub struct LoadedRateCard {
    pub origin: String,
    pub card: RateCard,
    pub unrecognized: Vec<String>,
    /// Entries named by more than one key, e.g. `Mobile` and `mobile`.
    pub duplicates: Vec<String>,
}

/// Read and validate a JSON rate card.
pub fn load_rate_card(path: &Path) -> Result<RateCard> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read rate card at {}", path.display()))?;

    let card = parse_rate_card(&json, &path.display().to_string())?;
    info!("Loaded rate card from {}", path.display());
    Ok(card)
}

/// Parse and validate a JSON rate card. `origin` names the source in errors.
pub fn parse_rate_card(json: &str, origin: &str) -> Result<RateCard> {
    let raw: RawRateCard = serde_json::from_str(json)
        .with_context(|| format!("failed to parse rate card {origin}"))?;

    let loaded = merge_over_builtin(raw, origin);
    validator::validate_loaded_rate_card(&loaded)?;
    Ok(loaded.card)
}

fn merge_over_builtin(raw: RawRateCard, origin: &str) -> LoadedRateCard {
    let mut card = RateCard::builtin();
    let mut unrecognized = Vec::new();
    let mut duplicates = Vec::new();

    if let Some(currency) = raw.currency {
        card.currency = currency.trim().to_string();
    }
    if let Some(base_price) = raw.base_price {
        card.base_price = base_price;
    }
    if let Some(weeks) = raw.base_duration_weeks {
        card.base_duration_weeks = weeks;
    }
    if let Some(bonus) = raw.technology_bonus {
        card.technology_bonus = bonus;
    }

    let mut seen_categories: BTreeMap<ProjectCategory, String> = BTreeMap::new();
    for (key, multiplier) in raw.categories {
        match ProjectCategory::from_key(&key) {
            Some(category) => {
                debug!("{origin}: category `{category}` multiplier {multiplier}");
                if let Some(previous) = seen_categories.insert(category, key.clone()) {
                    duplicates.push(format!("`categories.{category}` (`{previous}` and `{key}`)"));
                }
                card.categories.insert(category, multiplier);
            }
            None => unrecognized.push(format!("categories.{key}")),
        }
    }

    let mut seen_tiers: BTreeMap<ComplexityTier, String> = BTreeMap::new();
    for (key, multiplier) in raw.complexities {
        match ComplexityTier::from_key(&key) {
            Some(tier) => {
                debug!("{origin}: complexity `{tier}` multiplier {multiplier}");
                if let Some(previous) = seen_tiers.insert(tier, key.clone()) {
                    duplicates.push(format!("`complexities.{tier}` (`{previous}` and `{key}`)"));
                }
                card.complexities.insert(tier, multiplier);
            }
            None => unrecognized.push(format!("complexities.{key}")),
        }
    }

    LoadedRateCard {
        origin: origin.to_string(),
        card,
        unrecognized,
        duplicates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn asset(name: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("assets")
            .join("rates")
            .join(name)
    }

    #[test]
    fn default_asset_matches_builtin() {
        let card = load_rate_card(&asset("default.json")).expect("load default rates");
        assert_eq!(card, RateCard::builtin());
    }

    #[test]
    fn partial_card_merges_over_builtin() {
        let card = load_rate_card(&asset("agency.json")).expect("load agency rates");
        assert_eq!(card.currency, "USD");
        assert_eq!(card.base_price, 6500.0);
        assert_eq!(card.categories[&ProjectCategory::Mobile], 1.5);
        assert_eq!(card.categories[&ProjectCategory::Web], 1.0);
        assert_eq!(card.complexities[&ComplexityTier::Complex], 1.6);
    }

    #[test]
    fn empty_object_is_builtin() {
        let card = parse_rate_card("{}", "inline").expect("parse empty card");
        assert_eq!(card, RateCard::builtin());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = parse_rate_card(r#"{ "base_prize": 10 }"#, "inline")
            .expect_err("typo should fail");
        let crate::error::AppError::Other(inner) = err else {
            panic!("expected a parse error, got {err:?}");
        };
        let message = format!("{inner:#}");
        assert!(message.contains("base_prize"), "unexpected error: {message}");
    }

    #[test]
    fn keys_differing_only_by_case_are_rejected() {
        let err = parse_rate_card(
            r#"{ "categories": { "Mobile": 9.0, "mobile": 1.1 }, "complexities": { "simple": 0.5, " SIMPLE ": 0.6 } }"#,
            "inline",
        )
        .expect_err("duplicate keys should fail");
        let message = err.to_string();
        assert!(
            message.contains("duplicate key `categories.mobile` (`Mobile` and `mobile`)"),
            "unexpected error: {message}"
        );
        assert!(
            message.contains("duplicate key `complexities.simple`"),
            "unexpected error: {message}"
        );
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = load_rate_card(&asset("does-not-exist.json")).expect_err("missing file");
        assert!(
            err.to_string().contains("does-not-exist.json"),
            "unexpected error: {err}"
        );
    }
}
