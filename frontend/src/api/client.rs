use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, RequestBuilder, Response, StatusCode,
};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

/// Header the backend reads the admin session token from (`aToken`, sent in
/// its normalized lowercase form).
pub const SESSION_HEADER: &str = "atoken";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_backend_url().await
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) fn session_headers(token: &str) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(token)
            .map_err(|_| ApiError::validation("Invalid session token"))?;
        headers.insert(HeaderName::from_static(SESSION_HEADER), value);
        Ok(headers)
    }

    pub(super) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    /// Decodes a `{success, ...}` envelope. A non-2xx status with a readable
    /// envelope is reported with the server's message.
    pub(super) async fn read_envelope<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        match serde_json::from_str::<T>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => Err(status_error(status)),
            Err(e) => Err(ApiError::unknown(format!("Failed to parse response: {}", e))),
        }
    }
}

fn status_error(status: StatusCode) -> ApiError {
    ApiError::request_failed(format!(
        "Request failed with status code {}",
        status.as_u16()
    ))
}

pub(super) fn ensure_success(
    success: bool,
    message: Option<String>,
    fallback: &str,
) -> Result<Option<String>, ApiError> {
    if success {
        Ok(message)
    } else {
        Err(ApiError::rejected(
            message
                .filter(|msg| !msg.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string()),
        ))
    }
}
