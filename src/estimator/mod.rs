//! Project budget and duration estimation.
//!
//! The estimate starts from a base price and a base duration, scales both by
//! the project category and complexity multipliers, then adds a flat bonus to
//! the price for every selected technology. Results are rounded to whole
//! currency units and whole weeks.

mod selection;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::RateCard;

pub use selection::TechnologySelection;

pub const BASE_PRICE: f64 = 5000.0;
pub const BASE_DURATION_WEEKS: f64 = 4.0;
pub const TECHNOLOGY_BONUS: f64 = 1000.0;

/// Multiplier applied when no category (or an unknown one) is selected.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

pub const CATEGORY_MULTIPLIERS: [(ProjectCategory, f64); 5] = [
    (ProjectCategory::Web, 1.0),
    (ProjectCategory::Mobile, 1.3),
    (ProjectCategory::Ecommerce, 1.8),
    (ProjectCategory::Enterprise, 2.5),
    (ProjectCategory::Startup, 0.8),
];

pub const COMPLEXITY_MULTIPLIERS: [(ComplexityTier, f64); 4] = [
    (ComplexityTier::Simple, 0.7),
    (ComplexityTier::Medium, 1.0),
    (ComplexityTier::Complex, 1.6),
    (ComplexityTier::Enterprise, 2.2),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Ecommerce,
    Enterprise,
    Startup,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::Ecommerce,
        ProjectCategory::Enterprise,
        ProjectCategory::Startup,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Ecommerce => "ecommerce",
            ProjectCategory::Enterprise => "enterprise",
            ProjectCategory::Startup => "startup",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web application",
            ProjectCategory::Mobile => "Mobile application",
            ProjectCategory::Ecommerce => "E-commerce",
            ProjectCategory::Enterprise => "Enterprise software",
            ProjectCategory::Startup => "Startup MVP",
        }
    }

    /// Parse a category key, ignoring case and surrounding whitespace.
    pub fn from_key(raw: &str) -> Option<Self> {
        let key = raw.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    Simple,
    #[default]
    Medium,
    Complex,
    Enterprise,
}

impl ComplexityTier {
    pub const ALL: [ComplexityTier; 4] = [
        ComplexityTier::Simple,
        ComplexityTier::Medium,
        ComplexityTier::Complex,
        ComplexityTier::Enterprise,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ComplexityTier::Simple => "simple",
            ComplexityTier::Medium => "medium",
            ComplexityTier::Complex => "complex",
            ComplexityTier::Enterprise => "enterprise",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComplexityTier::Simple => "Simple",
            ComplexityTier::Medium => "Medium",
            ComplexityTier::Complex => "Complex",
            ComplexityTier::Enterprise => "Enterprise grade",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        let key = raw.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.key().eq_ignore_ascii_case(key))
    }

    /// Parse a tier key; anything outside the fixed set becomes `Medium`.
    pub fn from_key_or_default(raw: &str) -> Self {
        Self::from_key(raw).unwrap_or_default()
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Rounded budget (currency units) and duration (weeks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EstimateResult {
    pub budget: u64,
    pub duration_weeks: u64,
}

/// String-keyed estimate against the built-in rate card.
///
/// An absent or unknown category applies no adjustment; an unknown complexity
/// is treated as `medium`.
pub fn estimate(
    category: Option<&str>,
    complexity: &str,
    technologies: &TechnologySelection,
) -> EstimateResult {
    estimate_with(
        category.and_then(ProjectCategory::from_key),
        ComplexityTier::from_key_or_default(complexity),
        technologies,
    )
}

/// Typed estimate against the built-in rate card.
pub fn estimate_with(
    category: Option<ProjectCategory>,
    complexity: ComplexityTier,
    technologies: &TechnologySelection,
) -> EstimateResult {
    compute(RateCard::builtin_ref(), category, complexity, technologies)
}

/// Core arithmetic shared by every entry point. Multiplication order is
/// fixed so results stay bit-identical across callers.
pub fn compute(
    card: &RateCard,
    category: Option<ProjectCategory>,
    complexity: ComplexityTier,
    technologies: &TechnologySelection,
) -> EstimateResult {
    let category_factor = card.category_multiplier(category);
    let complexity_factor = card.complexity_multiplier(complexity);

    let mut price = card.base_price;
    price *= category_factor;
    price *= complexity_factor;
    price += card.technology_bonus * technologies.len() as f64;

    let mut duration = card.base_duration_weeks;
    duration *= category_factor;
    duration *= complexity_factor;

    EstimateResult {
        budget: round_to_unit(price),
        duration_weeks: round_to_unit(duration),
    }
}

// Negative and NaN inputs saturate to zero through the float-to-int cast.
fn round_to_unit(value: f64) -> u64 {
    value.round() as u64
}
