//! HTTP client module for the Medium API.
//!
//! Wraps a `reqwest` client that sends the integration token as a bearer credential on
//! every request. Requests are made once; a failed call surfaces as an error right away.

use crate::config::Config;
use crate::error::{MediumError, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// HTTP client wrapper for Medium API calls.
#[derive(Debug, Clone)]
pub struct MediumHttpClient {
    client: Client,
    base_url: String,
}

impl MediumHttpClient {
    /// Creates a new client from configuration.
    ///
    /// Fails with [`MediumError::MissingToken`] when no token is configured.
    pub fn with_config(config: &Config) -> Result<Self> {
        let token = config.token.as_ref().ok_or(MediumError::MissingToken)?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
            .map_err(|_| MediumError::config_error("MEDIUM_TOKEN contains invalid characters"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .connect_timeout(config.connect_timeout())
            .user_agent(&config.http.user_agent);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.http.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL for an endpoint path.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Makes a GET request.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = self.url(endpoint);
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        Self::check_status(response).await
    }

    /// Makes a POST request with a JSON body.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response> {
        let url = self.url(endpoint);
        debug!("POST {url}");
        let response = self.client.post(&url).json(body).send().await?;
        Self::check_status(response).await
    }

    /// Decodes a JSON response body.
    pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Turns non-success responses into errors.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = error_message(&body);

        debug!("Medium responded with HTTP {status}: {message}");
        Err(MediumError::from_api_response(status.as_u16(), message))
    }
}

/// Pulls the joined error messages out of an error body, or falls back to the raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<MediumResponse<serde_json::Value>>(body) {
        Ok(envelope) if !envelope.errors.is_empty() => envelope
            .errors
            .iter()
            .map(|e| match e.code {
                Some(code) => format!("{} (code {code})", e.message),
                None => e.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("; "),
        _ => body.trim().to_string(),
    }
}

/// Standard Medium API response envelope.
#[derive(Debug, Deserialize)]
pub struct MediumResponse<T> {
    /// Response data
    pub data: Option<T>,
    /// Errors reported by the API
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

/// One entry of the `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(default)]
    pub code: Option<i64>,
}

impl<T> MediumResponse<T> {
    /// Converts the envelope to a Result, requiring `data`.
    pub fn into_result(self) -> Result<T> {
        self.data.ok_or_else(|| {
            let detail = self
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MediumError::Internal(anyhow::anyhow!(
                "Missing response data. errors: [{detail}]"
            ))
        })
    }
}
