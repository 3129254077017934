use thiserror::Error;

use crate::api::ApiError;

/// Failure of a single remote search.
///
/// Never surfaces to the owner of a [`super::ServerSearch`]; the binding
/// logs it and keeps its previous results.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Remote(#[from] ApiError),

    #[error("Search response is not a result list: {0}")]
    Decode(#[from] serde_json::Error),
}
