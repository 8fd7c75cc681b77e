use log::debug;

use crate::config::RateCard;
use crate::estimator::{ComplexityTier, EstimateResult, ProjectCategory, TechnologySelection};

/// Calculator inputs plus the estimate derived from them.
///
/// Every setter recomputes the estimate, so `result()` always reflects the
/// current inputs.
#[derive(Debug, Clone)]
pub struct CalculatorState {
    rate_card: RateCard,
    category: Option<ProjectCategory>,
    complexity: ComplexityTier,
    technologies: TechnologySelection,
    result: EstimateResult,
}

impl CalculatorState {
    pub fn new(rate_card: RateCard) -> Self {
        let category = None;
        let complexity = ComplexityTier::default();
        let technologies = TechnologySelection::new();
        let result = rate_card.estimate(category, complexity, &technologies);

        Self {
            rate_card,
            category,
            complexity,
            technologies,
            result,
        }
    }

    pub fn rate_card(&self) -> &RateCard {
        &self.rate_card
    }

    pub fn category(&self) -> Option<ProjectCategory> {
        self.category
    }

    pub fn complexity(&self) -> ComplexityTier {
        self.complexity
    }

    pub fn technologies(&self) -> &TechnologySelection {
        &self.technologies
    }

    pub fn result(&self) -> EstimateResult {
        self.result
    }

    pub fn set_category(&mut self, category: Option<ProjectCategory>) {
        self.category = category;
        self.recompute();
    }

    /// Step through "no category" followed by every category, wrapping around.
    pub fn cycle_category(&mut self, forward: bool) {
        let options: Vec<Option<ProjectCategory>> = std::iter::once(None)
            .chain(ProjectCategory::ALL.into_iter().map(Some))
            .collect();
        let current = options
            .iter()
            .position(|option| *option == self.category)
            .unwrap_or(0);
        let next = step(current, options.len(), forward);
        self.set_category(options[next]);
    }

    pub fn set_complexity(&mut self, complexity: ComplexityTier) {
        self.complexity = complexity;
        self.recompute();
    }

    pub fn cycle_complexity(&mut self, forward: bool) {
        let tiers = ComplexityTier::ALL;
        let current = tiers
            .iter()
            .position(|tier| *tier == self.complexity)
            .unwrap_or(0);
        self.set_complexity(tiers[step(current, tiers.len(), forward)]);
    }

    /// Returns whether the technology is selected after the toggle.
    pub fn toggle_technology(&mut self, tag: &str) -> bool {
        let selected = self.technologies.toggle(tag);
        self.recompute();
        selected
    }

    pub fn clear_technologies(&mut self) {
        self.technologies.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.result = self
            .rate_card
            .estimate(self.category, self.complexity, &self.technologies);
        debug!(
            "estimate recomputed: category={:?} complexity={} technologies={} -> {:?}",
            self.category,
            self.complexity,
            self.technologies.len(),
            self.result
        );
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(RateCard::builtin())
    }
}

fn step(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}
