//! HTTP client for the crop recommendation service
//!
//! The service takes every input as a query parameter on a POST with an
//! empty body, and answers with either a result or `{ "error": ... }`.

use reqwest::Client;
use shared::{FormInput, RecommendationClient, ServiceResponse, SubmitError, SubmitResult};

/// Recommendation API client
#[derive(Clone)]
pub struct RecommendationApiClient {
    client: Client,
    endpoint: String,
}

impl RecommendationApiClient {
    /// Create a new client for `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl RecommendationClient for RecommendationApiClient {
    async fn recommend(&self, input: &FormInput) -> SubmitResult<ServiceResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&input.query_pairs())
            .send()
            .await
            .map_err(|e| SubmitError::Transport(format!("Recommendation request failed: {}", e)))?;

        // The body decides the outcome; the status is only logged
        tracing::debug!(status = %response.status(), "Recommendation response received");

        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(format!("Failed to read response: {}", e)))?;

        ServiceResponse::from_json(&body).map_err(|e| {
            SubmitError::Transport(format!("Failed to parse recommendation response: {}", e))
        })
    }
}
