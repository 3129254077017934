//! Server-side search bindings.
//!
//! A [`ServerSearch`] keeps a result list in sync with a debounced search
//! term. Each settled term triggers one request through a [`SearchSource`];
//! responses for superseded terms are discarded and failures keep the last
//! good results.

mod binding;
mod error;
mod results;
mod source;

pub use binding::{SearchOptions, SearchState, ServerSearch, DEFAULT_DEBOUNCE};
pub use error::SearchError;
pub use results::{extract_results, DEFAULT_RESULT_KEY};
pub use source::{HttpSearchSource, SearchSource};
