//! Client configuration for the onboarding form.

/// Environment variable naming the submission endpoint.
pub const ENDPOINT_URL_VAR: &str = "ONBOARD_URL";

/// Where a completed onboarding form is submitted.
///
/// Construct directly when the endpoint is known (the controller takes the
/// value as a parameter, never reads ambient globals), or load it from the
/// environment at the composition root with [`FormConfig::from_env`].
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Absolute URL receiving the JSON POST.
    pub endpoint_url: String,
}

/// Errors raised while loading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `ONBOARD_URL` is unset or empty. Submission cannot succeed without
    /// it.
    #[error("ONBOARD_URL must be set to the submission endpoint URL")]
    MissingEndpoint,
}

impl FormConfig {
    /// Create a configuration with an explicit endpoint URL.
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
        }
    }

    /// Load configuration from the environment, reading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let endpoint_url = std::env::var(ENDPOINT_URL_VAR).unwrap_or_default();
        if endpoint_url.trim().is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        Ok(Self { endpoint_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test owns the env var to avoid cross-test races.
    #[test]
    fn from_env_requires_the_endpoint_variable() {
        std::env::remove_var(ENDPOINT_URL_VAR);
        assert!(FormConfig::from_env().is_err());

        std::env::set_var(ENDPOINT_URL_VAR, "https://intake.example.com/onboard");
        let config = FormConfig::from_env().unwrap();
        assert_eq!(config.endpoint_url, "https://intake.example.com/onboard");

        std::env::remove_var(ENDPOINT_URL_VAR);
    }
}
