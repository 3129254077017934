//! HTTP access to the records API.
//!
//! Listing and mutations live in [`RecordsClient`]; the shared request
//! helpers here are also used by the search source.

mod error;
mod records;

pub use error::ApiError;
pub use records::{BulkAction, Page, RecordsClient};

use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;

use crate::config::ApiConfig;

/// Build the HTTP client every request goes through.
pub fn build_client(config: &ApiConfig) -> Result<Client, ApiError> {
    Client::builder()
        .connect_timeout(config.connect_timeout())
        .timeout(config.timeout())
        .build()
        .map_err(ApiError::Client)
}

/// Parse `endpoint` and append query pairs.
pub fn url_with_params<I, K, V>(endpoint: &str, params: I) -> Result<Url, ApiError>
where
    I: IntoIterator,
    I::Item: std::borrow::Borrow<(K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    Url::parse_with_params(endpoint, params).map_err(|e| ApiError::InvalidUrl {
        url: endpoint.to_string(),
        message: e.to_string(),
    })
}

/// Send a request and decode its JSON body.
///
/// Non-2xx responses become [`ApiError::Status`] carrying the server's
/// `error` message when it sent one. An empty success body decodes to `null`.
pub async fn fetch_json(request: RequestBuilder, endpoint: &str) -> Result<Value, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Connection {
            endpoint: endpoint.to_string(),
            source: e,
        })?;

    let status = response.status();
    let text = response.text().await.map_err(|e| ApiError::Connection {
        endpoint: endpoint.to_string(),
        source: e,
    })?;

    if !status.is_success() {
        return Err(ApiError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            message: error_message(&text),
        });
    }

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&text).map_err(|e| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source: e,
    })
}

/// The `error` field of a JSON error body, or the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}
