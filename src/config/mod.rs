pub mod loader;
pub mod validator;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::estimator::{
    self, ComplexityTier, EstimateResult, ProjectCategory, TechnologySelection,
    CATEGORY_MULTIPLIERS, COMPLEXITY_MULTIPLIERS, NEUTRAL_MULTIPLIER,
};

pub use loader::{load_rate_card, parse_rate_card};
pub use validator::validate_rate_card;

pub const DEFAULT_CURRENCY: &str = "EUR";

/// Pricing constants consumed by the estimator. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateCard {
    pub currency: String,
    pub base_price: f64,
    pub base_duration_weeks: f64,
    pub technology_bonus: f64,
    pub categories: BTreeMap<ProjectCategory, f64>,
    pub complexities: BTreeMap<ComplexityTier, f64>,
}

impl RateCard {
    pub fn builtin() -> Self {
        RateCard {
            currency: DEFAULT_CURRENCY.to_string(),
            base_price: estimator::BASE_PRICE,
            base_duration_weeks: estimator::BASE_DURATION_WEEKS,
            technology_bonus: estimator::TECHNOLOGY_BONUS,
            categories: CATEGORY_MULTIPLIERS.into_iter().collect(),
            complexities: COMPLEXITY_MULTIPLIERS.into_iter().collect(),
        }
    }

    /// Shared instance of [`RateCard::builtin`].
    pub fn builtin_ref() -> &'static RateCard {
        static BUILTIN: OnceLock<RateCard> = OnceLock::new();
        BUILTIN.get_or_init(RateCard::builtin)
    }

    pub fn category_multiplier(&self, category: Option<ProjectCategory>) -> f64 {
        category
            .and_then(|category| self.categories.get(&category).copied())
            .unwrap_or(NEUTRAL_MULTIPLIER)
    }

    pub fn complexity_multiplier(&self, tier: ComplexityTier) -> f64 {
        self.complexities
            .get(&tier)
            .or_else(|| self.complexities.get(&ComplexityTier::Medium))
            .copied()
            .unwrap_or(NEUTRAL_MULTIPLIER)
    }

    pub fn estimate(
        &self,
        category: Option<ProjectCategory>,
        complexity: ComplexityTier,
        technologies: &TechnologySelection,
    ) -> EstimateResult {
        estimator::compute(self, category, complexity, technologies)
    }
}

impl Default for RateCard {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_key() {
        let card = RateCard::builtin();
        for category in ProjectCategory::ALL {
            assert!(card.categories.contains_key(&category), "{category} missing");
        }
        for tier in ComplexityTier::ALL {
            assert!(card.complexities.contains_key(&tier), "{tier} missing");
        }
    }

    #[test]
    fn absent_category_is_neutral() {
        let card = RateCard::builtin();
        assert_eq!(card.category_multiplier(None), 1.0);
        assert_eq!(card.category_multiplier(Some(ProjectCategory::Enterprise)), 2.5);
    }

    #[test]
    fn missing_tier_entry_uses_medium() {
        let mut card = RateCard::builtin();
        card.complexities.remove(&ComplexityTier::Complex);
        card.complexities.insert(ComplexityTier::Medium, 1.2);
        assert_eq!(card.complexity_multiplier(ComplexityTier::Complex), 1.2);
    }

    #[test]
    fn custom_card_drives_estimate() {
        let mut card = RateCard::builtin();
        card.base_price = 8000.0;
        card.technology_bonus = 500.0;
        let techs: TechnologySelection = ["Git", "Docker"].into_iter().collect();
        let result = card.estimate(Some(ProjectCategory::Web), ComplexityTier::Simple, &techs);
        assert_eq!(result.budget, 6600);
        assert_eq!(result.duration_weeks, 3);
    }
}
