use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::api::{fetch_json, url_with_params};

use super::error::SearchError;

/// Where a [`super::ServerSearch`] sends its settled terms.
///
/// The HTTP implementation is [`HttpSearchSource`]; tests plug in
/// in-memory sources with scripted latencies.
#[async_trait]
pub trait SearchSource: Send + Sync + 'static {
    /// Identifies the source in logs (usually the endpoint URL).
    fn name(&self) -> &str;

    /// Run one search and return the raw response body.
    async fn search(&self, term: &str) -> Result<Value, SearchError>;
}

/// Searches a records endpoint with `GET <endpoint>?search=<term>&all=true`.
#[derive(Clone)]
pub struct HttpSearchSource {
    client: Client,
    endpoint: String,
}

impl HttpSearchSource {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchSource for HttpSearchSource {
    fn name(&self) -> &str {
        &self.endpoint
    }

    async fn search(&self, term: &str) -> Result<Value, SearchError> {
        let url = url_with_params(&self.endpoint, [("search", term), ("all", "true")])?;
        let body = fetch_json(self.client.get(url), &self.endpoint).await?;
        Ok(body)
    }
}
