use crate::error::{AppError, Result};

use super::{loader::LoadedRateCard, RateCard};

/// Validate a rate card and surface every problem in one error.
pub fn validate_rate_card(card: &RateCard) -> Result<()> {
    let issues = collect_issues(card);
    into_result("rate card", issues)
}

/// Validate a card read from disk, including keys the estimator does not know.
pub fn validate_loaded_rate_card(loaded: &LoadedRateCard) -> Result<()> {
    let mut issues: Vec<String> = loaded
        .unrecognized
        .iter()
        .map(|key| format!("unknown key `{key}`"))
        .collect();
    issues.extend(
        loaded
            .duplicates
            .iter()
            .map(|key| format!("duplicate key {key}")),
    );
    issues.extend(collect_issues(&loaded.card));
    into_result(&format!("rate card `{}`", loaded.origin), issues)
}

fn collect_issues(card: &RateCard) -> Vec<String> {
    let mut issues = Vec::new();

    validate_currency(card, &mut issues);
    validate_amount("base_price", card.base_price, &mut issues);
    validate_amount("base_duration_weeks", card.base_duration_weeks, &mut issues);
    validate_amount("technology_bonus", card.technology_bonus, &mut issues);

    for (category, multiplier) in &card.categories {
        validate_multiplier(&format!("categories.{category}"), *multiplier, &mut issues);
    }
    for (tier, multiplier) in &card.complexities {
        validate_multiplier(&format!("complexities.{tier}"), *multiplier, &mut issues);
    }

    issues
}

fn into_result(subject: &str, issues: Vec<String>) -> Result<()> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::message(format!(
            "{subject} invalid:\n  - {}",
            issues.join("\n  - ")
        )))
    }
}

fn validate_currency(card: &RateCard, issues: &mut Vec<String>) {
    if card.currency.trim().is_empty() {
        issues.push("currency must not be empty".to_string());
    }
}

fn validate_amount(field: &str, value: f64, issues: &mut Vec<String>) {
    if !value.is_finite() {
        issues.push(format!("{field} must be a finite number"));
    } else if value < 0.0 {
        issues.push(format!("{field} must not be negative (got {value})"));
    }
}

fn validate_multiplier(field: &str, value: f64, issues: &mut Vec<String>) {
    if !value.is_finite() || value <= 0.0 {
        issues.push(format!("{field} must be a positive finite multiplier (got {value})"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_rate_card;
    use crate::estimator::{ComplexityTier, ProjectCategory};

    #[test]
    fn builtin_card_is_valid() {
        validate_rate_card(&RateCard::builtin()).expect("builtin rates should be valid");
    }

    #[test]
    fn rejects_non_positive_multiplier() {
        let mut card = RateCard::builtin();
        card.categories.insert(ProjectCategory::Startup, 0.0);

        let err = validate_rate_card(&card).expect_err("validation should fail");
        assert!(
            err.to_string().contains("categories.startup"),
            "unexpected error message: {err}"
        );
    }

    #[test]
    fn rejects_non_finite_amounts() {
        let mut card = RateCard::builtin();
        card.base_price = f64::INFINITY;
        card.complexities.insert(ComplexityTier::Simple, f64::NAN);

        let message = validate_rate_card(&card)
            .expect_err("validation should fail")
            .to_string();
        assert!(message.contains("base_price"), "unexpected error message: {message}");
        assert!(
            message.contains("complexities.simple"),
            "unexpected error message: {message}"
        );
    }

    #[test]
    fn reports_every_issue_at_once() {
        let json = r#"{
            "currency": " ",
            "technology_bonus": -250,
            "categories": { "web": -1, "gaming": 3.0 },
            "complexities": { "epic": 4.0 }
        }"#;

        let message = parse_rate_card(json, "inline")
            .expect_err("validation should fail")
            .to_string();
        for needle in [
            "rate card `inline` invalid",
            "currency must not be empty",
            "technology_bonus must not be negative",
            "categories.web",
            "unknown key `categories.gaming`",
            "unknown key `complexities.epic`",
        ] {
            assert!(message.contains(needle), "missing `{needle}` in: {message}");
        }
    }
}
