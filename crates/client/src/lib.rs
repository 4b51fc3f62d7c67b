//! Interactive onboarding form client.
//!
//! Owns the form state for one session ([`controller::FormController`]),
//! wires it to the validation schema in `onboard-core`, and performs the
//! terminal JSON POST ([`submit::SubmitClient`]).

pub mod config;
pub mod controller;
pub mod submit;

pub use config::{ConfigError, FormConfig};
pub use controller::{FormController, FormField, SubmitStatus};
pub use submit::{SubmitClient, SubmitError};
