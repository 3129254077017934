use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::ApiConfig;
use crate::model::Entity;
use crate::search::{extract_results, DEFAULT_RESULT_KEY};
use crate::ui::list_view::ListQuery;

use super::error::ApiError;
use super::{build_client, fetch_json, url_with_params};

/// One page of a listing response.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matching records across all pages.
    pub total: u64,
}

impl<T: DeserializeOwned> Page<T> {
    /// Decode `{ <key>: [...], total }` or a bare array.
    ///
    /// A missing `total` counts the returned items.
    pub fn from_body(body: Value, result_key: &str) -> Result<Self, serde_json::Error> {
        let total = body.get("total").and_then(Value::as_u64);
        let items: Vec<T> = extract_results(body, result_key)?;
        let total = total.unwrap_or(items.len() as u64);
        Ok(Self { items, total })
    }
}

impl<T> Page<T> {
    /// Number of pages of `page_size` records needed for `total`.
    pub fn total_pages(&self, page_size: u32) -> u32 {
        if page_size == 0 {
            return 0;
        }
        let pages = self.total.div_ceil(u64::from(page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

/// CRUD client for the per-entity REST endpoints.
#[derive(Clone)]
pub struct RecordsClient {
    client: Client,
    api: ApiConfig,
    result_key: String,
}

impl RecordsClient {
    pub fn new(client: Client, api: ApiConfig) -> Self {
        Self {
            client,
            api,
            result_key: DEFAULT_RESULT_KEY.to_string(),
        }
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::new(build_client(api)?, api.clone()))
    }

    pub fn with_result_key(mut self, key: impl Into<String>) -> Self {
        self.result_key = key.into();
        self
    }

    pub fn http(&self) -> &Client {
        &self.client
    }

    /// Collection URL for `entity`.
    pub fn endpoint(&self, entity: Entity) -> String {
        self.api.endpoint(entity.path())
    }

    /// `GET /<entity>?page=..&pageSize=..` with the view's query.
    pub async fn list<T: DeserializeOwned>(
        &self,
        entity: Entity,
        query: &ListQuery,
    ) -> Result<Page<T>, ApiError> {
        let endpoint = self.endpoint(entity);
        let url = url_with_params(&endpoint, query.to_pairs())?;
        tracing::debug!(%url, "Listing records");
        let body = fetch_json(self.client.get(url), &endpoint).await?;
        Page::from_body(body, &self.result_key).map_err(|e| ApiError::Decode { endpoint, source: e })
    }

    pub async fn create<B, T>(&self, entity: Entity, record: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let endpoint = self.endpoint(entity);
        let body = fetch_json(self.client.post(&endpoint).json(record), &endpoint).await?;
        decode(body, endpoint)
    }

    /// `PUT /<entity>/<id>`.
    pub async fn update<B, T>(&self, entity: Entity, id: i64, record: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let endpoint = format!("{}/{}", self.endpoint(entity), id);
        let body = fetch_json(self.client.put(&endpoint).json(record), &endpoint).await?;
        decode(body, endpoint)
    }

    pub async fn delete(&self, entity: Entity, id: i64) -> Result<Value, ApiError> {
        let endpoint = format!("{}/{}", self.endpoint(entity), id);
        fetch_json(self.client.delete(&endpoint), &endpoint).await
    }

    /// `DELETE /<entity>/bulk-delete` with `{<id field>: [ids]}`.
    ///
    /// Only students and lecturers expose this route.
    pub async fn bulk_delete(&self, entity: Entity, ids: &[i64]) -> Result<Value, ApiError> {
        if !entity.supports_bulk_delete() {
            return Err(ApiError::Unsupported {
                operation: "bulk delete",
                entity: entity.path().to_string(),
            });
        }
        let endpoint = format!("{}/bulk-delete", self.endpoint(entity));
        let mut payload = serde_json::Map::new();
        payload.insert(entity.id_field().to_string(), json!(ids));
        fetch_json(self.client.delete(&endpoint).json(&payload), &endpoint).await
    }

    /// `POST /user_account/bulk` with `{ids, action}`.
    pub async fn bulk(&self, ids: &[i64], action: BulkAction) -> Result<Value, ApiError> {
        let endpoint = format!("{}/bulk", self.endpoint(Entity::UserAccounts));
        let payload = json!({ "ids": ids, "action": action.as_str() });
        fetch_json(self.client.post(&endpoint).json(&payload), &endpoint).await
    }
}

/// Batch operation on user accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Activate,
    Deactivate,
    Delete,
    /// Reset to the role's default password.
    ResetPassword,
}

impl BulkAction {
    pub fn as_str(self) -> &'static str {
        match self {
            BulkAction::Activate => "activate",
            BulkAction::Deactivate => "deactivate",
            BulkAction::Delete => "delete",
            BulkAction::ResetPassword => "reset-password",
        }
    }
}

fn decode<T: DeserializeOwned>(body: Value, endpoint: String) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::Decode { endpoint, source: e })
}
