//! Interactive state for one onboarding form session.
//!
//! [`FormController`] owns the draft, the per-field error map, the
//! minimum-date floor, and the submit lifecycle. A UI layer drives it with
//! discrete "field changed" and "field blurred" events and renders from its
//! accessors; nothing here depends on a particular widget toolkit.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use url::Url;

use onboard_core::validation::{self, DATE_FORMAT};
use onboard_core::{OnboardingDraft, Service};

use crate::config::FormConfig;
use crate::submit::{SubmitClient, SubmitError};

/// Query parameter used to pre-seed the service selection.
const SERVICE_PARAM: &str = "service";

/// The seven editable fields, for blur events and error lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FullName,
    Email,
    CompanyName,
    Services,
    BudgetUsd,
    ProjectStartDate,
    AcceptTerms,
}

impl FormField {
    /// Wire name of the field, matching the validation violation keys.
    pub fn wire_name(self) -> &'static str {
        match self {
            FormField::FullName => validation::FIELD_FULL_NAME,
            FormField::Email => validation::FIELD_EMAIL,
            FormField::CompanyName => validation::FIELD_COMPANY_NAME,
            FormField::Services => validation::FIELD_SERVICES,
            FormField::BudgetUsd => validation::FIELD_BUDGET_USD,
            FormField::ProjectStartDate => validation::FIELD_PROJECT_START_DATE,
            FormField::AcceptTerms => validation::FIELD_ACCEPT_TERMS,
        }
    }
}

/// Terminal state of the last submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// The endpoint accepted the submission; `message` echoes the
    /// pretty-printed payload.
    Success { message: String },
    /// The submission failed; the draft is retained for correction.
    Failure { message: String },
}

impl SubmitStatus {
    /// The user-facing message for this outcome.
    pub fn message(&self) -> &str {
        match self {
            SubmitStatus::Success { message } | SubmitStatus::Failure { message } => message,
        }
    }
}

/// State container for one onboarding form session.
pub struct FormController {
    client: SubmitClient,
    draft: OnboardingDraft,
    errors: BTreeMap<String, String>,
    min_start_date: NaiveDate,
    submitting: bool,
    status: Option<SubmitStatus>,
}

impl FormController {
    /// Create a controller for a fresh form session.
    ///
    /// The minimum start date is fixed to today's local date at
    /// construction and does not change for the lifetime of the session.
    pub fn new(config: FormConfig) -> Self {
        Self {
            client: SubmitClient::new(config.endpoint_url),
            draft: OnboardingDraft::default(),
            errors: BTreeMap::new(),
            min_start_date: Local::now().date_naive(),
            submitting: false,
            status: None,
        }
    }

    // -----------------------------------------------------------------------
    // URL seeding
    // -----------------------------------------------------------------------

    /// Replace the service selection with the repeated `service` query
    /// parameters of `url`, silently dropping unknown values and collapsing
    /// duplicates.
    ///
    /// Calling this again re-derives the selection from scratch; the later
    /// URL wins. Nothing else in the draft is touched.
    pub fn seed_services_from_url(&mut self, url: &Url) {
        self.draft.services = services_from_url(url);
        tracing::debug!(
            count = self.draft.services.len(),
            "Seeded service selection from URL"
        );
    }

    // -----------------------------------------------------------------------
    // Field events
    // -----------------------------------------------------------------------

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.draft.full_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.draft.email = value.into();
    }

    pub fn set_company_name(&mut self, value: impl Into<String>) {
        self.draft.company_name = value.into();
    }

    /// Replace the whole service selection.
    pub fn set_services(&mut self, services: Vec<Service>) {
        self.draft.services = services;
    }

    /// Checkbox event: add the service if absent, remove it if present.
    pub fn toggle_service(&mut self, service: Service) {
        if let Some(pos) = self.draft.services.iter().position(|s| *s == service) {
            self.draft.services.remove(pos);
        } else {
            self.draft.services.push(service);
        }
    }

    /// Raw budget text as typed; empty means "not provided".
    pub fn set_budget_text(&mut self, value: impl Into<String>) {
        self.draft.budget_usd = value.into();
    }

    /// Raw `YYYY-MM-DD` text from a date widget.
    pub fn set_start_date_text(&mut self, value: impl Into<String>) {
        self.draft.project_start_date = value.into();
    }

    pub fn set_accept_terms(&mut self, accepted: bool) {
        self.draft.accept_terms = accepted;
    }

    /// Field blurred: validate the current snapshot and update the error
    /// entry for that field only. Entries for fields the user has not
    /// finished editing are left untouched, so errors never appear ahead of
    /// the user.
    pub fn blur(&mut self, field: FormField) {
        let wire = field.wire_name();
        let found = match validation::validate(&self.draft, Local::now().date_naive()) {
            Ok(_) => None,
            Err(violations) => violations.into_iter().find(|v| v.field == wire),
        };
        match found {
            Some(violation) => {
                self.errors.insert(violation.field, violation.message);
            }
            None => {
                self.errors.remove(wire);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------------

    /// Validate the full draft and, if it passes, POST it exactly once.
    ///
    /// While the request is in flight `is_submitting` reports `true` so a
    /// UI can disable its trigger; the exclusive borrow across the await
    /// also limits a session to one request at a time. On acceptance the
    /// draft and errors reset for a fresh session; on any failure the draft
    /// is retained so the user can correct and resubmit.
    pub async fn submit(&mut self) {
        self.status = None;

        let record = match validation::validate(&self.draft, Local::now().date_naive()) {
            Ok(record) => record,
            Err(violations) => {
                tracing::debug!(count = violations.len(), "Draft rejected by validation");
                self.errors.clear();
                for violation in violations {
                    // First violation per field wins the inline slot.
                    self.errors.entry(violation.field).or_insert(violation.message);
                }
                return;
            }
        };

        self.errors.clear();
        self.submitting = true;
        let result = self.client.submit(&record).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                let payload = serde_json::to_string_pretty(&record)
                    .unwrap_or_else(|_| "<unserializable payload>".to_string());
                tracing::info!("Onboarding submission accepted");
                self.status = Some(SubmitStatus::Success {
                    message: format!("Successfully submitted:\n{payload}"),
                });
                self.draft = OnboardingDraft::default();
            }
            Err(SubmitError::Rejected { status }) => {
                tracing::warn!(status, "Onboarding submission rejected");
                self.status = Some(SubmitStatus::Failure {
                    message: "Failed to submit form.".to_string(),
                });
            }
            Err(SubmitError::Request(error)) => {
                tracing::warn!(error = %error, "Onboarding submission never reached the endpoint");
                self.status = Some(SubmitStatus::Failure {
                    message: "Network or server error.".to_string(),
                });
            }
        }
    }

    /// Return the session to its initial empty state.
    pub fn reset(&mut self) {
        self.draft = OnboardingDraft::default();
        self.errors.clear();
        self.status = None;
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Current draft values, for rendering the inputs.
    pub fn draft(&self) -> &OnboardingDraft {
        &self.draft
    }

    /// Inline error for a field, if its last validation failed.
    pub fn field_error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field.wire_name()).map(String::as_str)
    }

    /// All current inline errors, keyed by wire field name.
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Day-granularity floor for the start date, fixed at construction.
    pub fn min_start_date(&self) -> NaiveDate {
        self.min_start_date
    }

    /// The floor in `YYYY-MM-DD` form, for a date widget's `min` attribute.
    pub fn min_start_date_text(&self) -> String {
        self.min_start_date.format(DATE_FORMAT).to_string()
    }

    /// Whether a POST is currently in flight (disable the trigger).
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Outcome of the last submit attempt, if any.
    pub fn status(&self) -> Option<&SubmitStatus> {
        self.status.as_ref()
    }
}

/// Collect the known services named by repeated `service` query
/// parameters, in order of first appearance.
fn services_from_url(url: &Url) -> Vec<Service> {
    let mut services = Vec::new();
    for (key, value) in url.query_pairs() {
        if key != SERVICE_PARAM {
            continue;
        }
        if let Some(service) = Service::from_label(&value) {
            if !services.contains(&service) {
                services.push(service);
            }
        }
    }
    services
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> FormController {
        FormController::new(FormConfig::new("https://intake.example.com/onboard"))
    }

    fn parse(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn seeding_filters_unknown_services() {
        let mut form = controller();
        form.seed_services_from_url(&parse(
            "https://example.com/onboard?service=UI/UX&service=Nonsense",
        ));
        assert_eq!(form.draft().services, vec![Service::UiUx]);
    }

    #[test]
    fn seeding_collapses_duplicates() {
        let mut form = controller();
        form.seed_services_from_url(&parse(
            "https://example.com/onboard?service=Branding&service=Branding&service=Web%20Dev",
        ));
        assert_eq!(
            form.draft().services,
            vec![Service::Branding, Service::WebDev]
        );
    }

    #[test]
    fn later_url_seeding_wins() {
        let mut form = controller();
        form.seed_services_from_url(&parse("https://example.com/?service=UI/UX"));
        form.seed_services_from_url(&parse("https://example.com/?service=Mobile%20App"));
        assert_eq!(form.draft().services, vec![Service::MobileApp]);
    }

    #[test]
    fn seeding_with_no_parameters_clears_the_selection() {
        let mut form = controller();
        form.set_services(vec![Service::UiUx]);
        form.seed_services_from_url(&parse("https://example.com/onboard"));
        assert!(form.draft().services.is_empty());
    }

    #[test]
    fn blur_reports_only_the_blurred_field() {
        let mut form = controller();
        form.set_email("bademail");
        form.blur(FormField::Email);

        assert_eq!(form.field_error(FormField::Email), Some("Invalid email address"));
        // The rest of the draft is empty and invalid, but unblurred fields
        // stay silent.
        assert_eq!(form.field_error(FormField::FullName), None);
        assert_eq!(form.field_error(FormField::Services), None);
    }

    #[test]
    fn blur_clears_the_error_once_the_field_is_fixed() {
        let mut form = controller();
        form.set_email("bademail");
        form.blur(FormField::Email);
        assert!(form.field_error(FormField::Email).is_some());

        form.set_email("ada@example.com");
        form.blur(FormField::Email);
        assert_eq!(form.field_error(FormField::Email), None);
    }

    #[test]
    fn toggle_service_adds_then_removes() {
        let mut form = controller();
        form.toggle_service(Service::Branding);
        assert_eq!(form.draft().services, vec![Service::Branding]);
        form.toggle_service(Service::Branding);
        assert!(form.draft().services.is_empty());
    }

    #[test]
    fn min_start_date_is_today_in_wire_form() {
        let form = controller();
        let today = Local::now().date_naive();
        assert_eq!(form.min_start_date(), today);
        assert_eq!(
            form.min_start_date_text(),
            today.format("%Y-%m-%d").to_string()
        );
    }

    #[test]
    fn reset_returns_to_the_initial_state() {
        let mut form = controller();
        form.set_full_name("Ada Lovelace");
        form.set_email("bademail");
        form.blur(FormField::Email);

        form.reset();
        assert_eq!(form.draft(), &OnboardingDraft::default());
        assert!(form.errors().is_empty());
        assert!(form.status().is_none());
    }
}
