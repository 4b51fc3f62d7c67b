//! Total validation of an onboarding draft.
//!
//! [`validate`] evaluates every rule and collects every violation, so a
//! caller can surface all problems at once instead of stopping at the first
//! failure. The date rule takes `today` as a parameter; nothing in this
//! module reads the clock.

use chrono::NaiveDate;
use validator::Validate;

use crate::form::{parse_budget, OnboardingDraft, OnboardingRecord};
use crate::services::Service;

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

// Wire names for the seven record fields. Violations are keyed by these so
// error attribution matches the serialized payload.

pub const FIELD_FULL_NAME: &str = "fullName";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_COMPANY_NAME: &str = "companyName";
pub const FIELD_SERVICES: &str = "services";
pub const FIELD_BUDGET_USD: &str = "budgetUsd";
pub const FIELD_PROJECT_START_DATE: &str = "projectStartDate";
pub const FIELD_ACCEPT_TERMS: &str = "acceptTerms";

/// Format accepted for the project start date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Violations
// ---------------------------------------------------------------------------

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Wire name of the offending field.
    pub field: String,
    /// Stable identifier for the violated rule.
    pub code: String,
    /// Human-readable, field-specific message.
    pub message: String,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a draft against the full schema.
///
/// Every rule is evaluated; on rejection the returned violations are sorted
/// in field declaration order, one or more per offending field. On success
/// the normalized record is built: budget and start date parsed from their
/// raw text, duplicate services collapsed (first occurrence wins).
///
/// `today` is the day-granularity floor for the start date, computed by the
/// caller in whatever timezone governs the session.
pub fn validate(
    draft: &OnboardingDraft,
    today: NaiveDate,
) -> Result<OnboardingRecord, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if let Err(errors) = draft.validate() {
        for (field, field_errors) in errors.field_errors() {
            for err in field_errors.iter() {
                violations.push(FieldViolation {
                    field: wire_field_name(field).to_string(),
                    code: err.code.to_string(),
                    message: err
                        .message
                        .as_deref()
                        .unwrap_or(&err.code)
                        .to_string(),
                });
            }
        }
    }

    let start_date = match check_start_date(&draft.project_start_date, today) {
        Ok(date) => Some(date),
        Err(violation) => {
            violations.push(violation);
            None
        }
    };

    violations.sort_by_key(|v| field_order(&v.field));

    if let Some(project_start_date) = start_date {
        if violations.is_empty() {
            return Ok(OnboardingRecord {
                full_name: draft.full_name.clone(),
                email: draft.email.clone(),
                company_name: draft.company_name.clone(),
                services: dedup_services(&draft.services),
                budget_usd: parse_budget(&draft.budget_usd).ok().flatten(),
                project_start_date,
                accept_terms: draft.accept_terms,
            });
        }
    }
    Err(violations)
}

/// Check the start date rule: the raw text must parse as a calendar date
/// (explicit guard, never a coerced comparison), and the parsed date must
/// not fall before `today`.
fn check_start_date(text: &str, today: NaiveDate) -> Result<NaiveDate, FieldViolation> {
    let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) else {
        return Err(FieldViolation {
            field: FIELD_PROJECT_START_DATE.to_string(),
            code: "start_date_parse".to_string(),
            message: "Project start date must be a valid date".to_string(),
        });
    };
    if date < today {
        return Err(FieldViolation {
            field: FIELD_PROJECT_START_DATE.to_string(),
            code: "start_date_past".to_string(),
            message: "Project start date must be today or later".to_string(),
        });
    }
    Ok(date)
}

/// Map the `Validate` derive's Rust-side field names to wire names.
fn wire_field_name(rust_name: &str) -> &str {
    match rust_name {
        "full_name" => FIELD_FULL_NAME,
        "email" => FIELD_EMAIL,
        "company_name" => FIELD_COMPANY_NAME,
        "services" => FIELD_SERVICES,
        "budget_usd" => FIELD_BUDGET_USD,
        "project_start_date" => FIELD_PROJECT_START_DATE,
        "accept_terms" => FIELD_ACCEPT_TERMS,
        other => other,
    }
}

/// Field declaration order, for deterministic violation lists.
fn field_order(field: &str) -> usize {
    const ORDER: [&str; 7] = [
        FIELD_FULL_NAME,
        FIELD_EMAIL,
        FIELD_COMPANY_NAME,
        FIELD_SERVICES,
        FIELD_BUDGET_USD,
        FIELD_PROJECT_START_DATE,
        FIELD_ACCEPT_TERMS,
    ];
    ORDER
        .iter()
        .position(|f| *f == field)
        .unwrap_or(ORDER.len())
}

/// Collapse duplicate selections, preserving first occurrence.
fn dedup_services(services: &[Service]) -> Vec<Service> {
    let mut unique = Vec::with_capacity(services.len());
    for service in services {
        if !unique.contains(service) {
            unique.push(*service);
        }
    }
    unique
}
