//! `fetch`-based client for the recommendation endpoint

use shared::{FormInput, RecommendationClient, ServiceResponse, SubmitError, SubmitResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{RequestInit, Response, UrlSearchParams};

use crate::dom::{js_error_message, log, window};

/// Recommendation client using the browser `fetch` API
#[derive(Debug, Clone)]
pub struct FetchClient {
    endpoint: String,
}

impl FetchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Full request URL, every parameter in the query string
    pub fn request_url(&self, input: &FormInput) -> Result<String, JsValue> {
        let params = UrlSearchParams::new()?;
        for (key, value) in input.query_pairs() {
            params.append(key, &value);
        }
        Ok(format!("{}?{}", self.endpoint, String::from(params.to_string())))
    }

    async fn fetch_body(&self, input: &FormInput) -> Result<String, JsValue> {
        let url = self.request_url(input)?;
        log(&format!("POST {}", url));

        let init = RequestInit::new();
        init.set_method("POST");

        let response = JsFuture::from(window()?.fetch_with_str_and_init(&url, &init)).await?;
        let response: Response = response.dyn_into()?;

        let text = JsFuture::from(response.text()?).await?;
        text.as_string()
            .ok_or_else(|| JsValue::from_str("response body is not text"))
    }
}

impl RecommendationClient for FetchClient {
    async fn recommend(&self, input: &FormInput) -> SubmitResult<ServiceResponse> {
        let body = self
            .fetch_body(input)
            .await
            .map_err(|e| SubmitError::Transport(js_error_message(&e)))?;

        ServiceResponse::from_json(&body).map_err(|e| SubmitError::Transport(e.to_string()))
    }
}
