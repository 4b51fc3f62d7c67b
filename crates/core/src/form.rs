//! Onboarding form records: the raw draft as entered, and the accepted,
//! normalized record that is serialized for submission.

use chrono::NaiveDate;
use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::services::Service;

/// Smallest accepted budget, in USD.
pub const BUDGET_MIN_USD: i64 = 100;
/// Largest accepted budget, in USD.
pub const BUDGET_MAX_USD: i64 = 1_000_000;

/// Candidate field values for one form session, as the input widgets hold
/// them.
///
/// `budget_usd` and `project_start_date` stay raw text so that unparseable
/// input is representable here and rejected by validation, instead of being
/// lost (or coerced) at an earlier boundary. Empty budget text means the
/// optional budget was not provided; an empty start date is a parse failure
/// because the field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct OnboardingDraft {
    #[validate(
        length(
            min = 2,
            max = 80,
            message = "Full name must be between 2 and 80 characters"
        ),
        custom(function = validate_name_characters)
    )]
    pub full_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(
        min = 2,
        max = 100,
        message = "Company name must be between 2 and 100 characters"
    ))]
    pub company_name: String,

    #[validate(length(min = 1, message = "Select at least one service"))]
    pub services: Vec<Service>,

    /// Raw budget text; empty means "not provided".
    #[validate(custom(function = validate_budget_text))]
    pub budget_usd: String,

    /// Raw `YYYY-MM-DD` text. Parse success and the today-or-later bound
    /// are checked in [`crate::validation::validate`], which owns the
    /// injected clock value.
    pub project_start_date: String,

    #[validate(custom(function = validate_terms_accepted))]
    pub accept_terms: bool,
}

/// An accepted onboarding submission.
///
/// Field names and value shapes here are exactly the wire payload:
/// `budgetUsd` disappears entirely when absent, and the start date
/// serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub services: Vec<Service>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_usd: Option<i64>,
    pub project_start_date: NaiveDate,
    pub accept_terms: bool,
}

/// Why a raw budget string failed to parse into an accepted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BudgetViolation {
    NotAnInteger,
    OutOfRange,
}

/// Parse raw budget text. Empty (or whitespace-only) text is a valid
/// absent budget, distinct from zero.
pub(crate) fn parse_budget(text: &str) -> Result<Option<i64>, BudgetViolation> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| BudgetViolation::NotAnInteger)?;
    if (BUDGET_MIN_USD..=BUDGET_MAX_USD).contains(&value) {
        Ok(Some(value))
    } else {
        Err(BudgetViolation::OutOfRange)
    }
}

/// Characters permitted in a full name: letters, whitespace, apostrophe
/// (straight or typographic), hyphen.
fn is_name_char(c: char) -> bool {
    c.is_alphabetic() || c.is_whitespace() || matches!(c, '\'' | '\u{2019}' | '-')
}

fn validate_name_characters(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(is_name_char) {
        return Ok(());
    }
    let mut err = ValidationError::new("name_characters");
    err.message = Some("Full name can only contain letters, spaces, ' and -".into());
    Err(err)
}

fn validate_budget_text(value: &str) -> Result<(), ValidationError> {
    match parse_budget(value) {
        Ok(_) => Ok(()),
        Err(BudgetViolation::NotAnInteger) => {
            let mut err = ValidationError::new("budget_integer");
            err.message = Some("Budget must be an integer".into());
            Err(err)
        }
        Err(BudgetViolation::OutOfRange) => {
            let mut err = ValidationError::new("budget_range");
            err.message = Some("Budget must be between 100 and 1,000,000".into());
            Err(err)
        }
    }
}

fn validate_terms_accepted(value: &bool) -> Result<(), ValidationError> {
    if *value {
        return Ok(());
    }
    let mut err = ValidationError::new("terms_accepted");
    err.message = Some("You must accept the terms".into());
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_budget_text_is_absent() {
        assert_eq!(parse_budget(""), Ok(None));
        assert_eq!(parse_budget("   "), Ok(None));
    }

    #[test]
    fn budget_bounds_are_inclusive() {
        assert_eq!(parse_budget("100"), Ok(Some(100)));
        assert_eq!(parse_budget("1000000"), Ok(Some(1_000_000)));
        assert_eq!(parse_budget("99"), Err(BudgetViolation::OutOfRange));
        assert_eq!(parse_budget("1000001"), Err(BudgetViolation::OutOfRange));
    }

    #[test]
    fn non_integer_budget_is_rejected() {
        assert_eq!(parse_budget("12.5"), Err(BudgetViolation::NotAnInteger));
        assert_eq!(parse_budget("fifty"), Err(BudgetViolation::NotAnInteger));
    }

    #[test]
    fn name_characters_cover_real_names() {
        assert!("Ada Lovelace".chars().all(is_name_char));
        assert!("Miles O'Brien".chars().all(is_name_char));
        assert!("Jean-Luc Picard".chars().all(is_name_char));
        assert!("O\u{2019}Neill".chars().all(is_name_char));
        assert!(!is_name_char('3'));
        assert!(!is_name_char('@'));
    }
}
