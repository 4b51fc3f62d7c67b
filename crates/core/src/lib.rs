//! Onboarding intake domain: form records and the validation schema.
//!
//! Everything here is pure data and rules. Nothing reads the clock or does
//! I/O; the interactive form controller and the submission HTTP client live
//! in `onboard-client`.

pub mod form;
pub mod services;
pub mod validation;

pub use form::{OnboardingDraft, OnboardingRecord};
pub use services::Service;
pub use validation::{validate, FieldViolation};
