//! HTTP submission client for completed onboarding forms.
//!
//! Wraps [`reqwest`]: hold a pooled client plus the endpoint URL, send one
//! `POST` per accepted record, inspect only the response status. There is
//! no retry, no timeout beyond the transport default, and no cancellation.

use onboard_core::OnboardingRecord;

/// Sends accepted onboarding records to the configured intake endpoint.
pub struct SubmitClient {
    client: reqwest::Client,
    endpoint_url: String,
}

/// Errors from one submission attempt.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("Submission rejected ({status})")]
    Rejected {
        /// HTTP status code.
        status: u16,
    },
}

impl SubmitClient {
    /// Create a client targeting the given endpoint URL.
    pub fn new(endpoint_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling across components).
    pub fn with_client(client: reqwest::Client, endpoint_url: String) -> Self {
        Self {
            client,
            endpoint_url,
        }
    }

    /// Endpoint URL this client submits to.
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// POST one record as JSON with `Content-Type: application/json`.
    ///
    /// Returns `Ok(())` for any 2xx status. The response body is never
    /// inspected.
    pub async fn submit(&self, record: &OnboardingRecord) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint_url)
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::debug!(status = status.as_u16(), "Onboarding endpoint accepted POST");
        Ok(())
    }
}
