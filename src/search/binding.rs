use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle, JoinSet};

use crate::config::SearchConfig;
use crate::debounce::Debouncer;

use super::error::SearchError;
use super::results::{extract_results, DEFAULT_RESULT_KEY};
use super::source::SearchSource;

/// Quiet period between the last keystroke and the request.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub debounce: Duration,
    /// Response field holding the results; a body without it is the list itself.
    pub result_key: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            result_key: DEFAULT_RESULT_KEY.to_string(),
        }
    }
}

impl From<&SearchConfig> for SearchOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            debounce: config.debounce(),
            result_key: config.result_key.clone(),
        }
    }
}

/// Snapshot published by a [`ServerSearch`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState<T> {
    pub results: Vec<T>,
    /// True while the request for the latest settled term is in flight.
    pub is_loading: bool,
    /// Number of latest-term requests handled so far (success or failure).
    pub revision: u64,
    /// Why the latest request failed; cleared by the next success.
    pub last_error: Option<String>,
}

impl<T> Default for SearchState<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            is_loading: false,
            revision: 0,
            last_error: None,
        }
    }
}

/// Result list kept in sync with a debounced search term.
///
/// Owned by one consumer. Dropping it cancels the pending debounce timer,
/// aborts in-flight requests and closes the state channel, so no update is
/// published after teardown.
pub struct ServerSearch<T> {
    term: Debouncer<String>,
    state: watch::Receiver<SearchState<T>>,
    driver: JoinHandle<()>,
}

impl<T> ServerSearch<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Start the binding on the current tokio runtime.
    ///
    /// Nothing is requested until the first term settles.
    pub fn new(source: Arc<dyn SearchSource>, options: SearchOptions) -> Self {
        let term = Debouncer::new(options.debounce);
        let (state_tx, state) = watch::channel(SearchState::default());
        let driver = tokio::spawn(drive(
            source,
            options.result_key,
            term.subscribe(),
            state_tx,
        ));
        Self {
            term,
            state,
            driver,
        }
    }

    /// Feed the raw (undebounced) search text.
    pub fn set_term(&self, term: impl Into<String>) {
        self.term.set(term.into());
    }

    /// The last settled term, `None` before the first one settles.
    pub fn settled_term(&self) -> Option<String> {
        self.term.current()
    }

    pub fn snapshot(&self) -> SearchState<T> {
        self.state.borrow().clone()
    }

    pub fn results(&self) -> Vec<T> {
        self.state.borrow().results.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState<T>> {
        self.state.clone()
    }
}

impl<T> Drop for ServerSearch<T> {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

type Completion = (u64, String, Result<Value, SearchError>);

/// Issues one request per settled term and commits only the newest one.
///
/// A newer term aborts the request it supersedes; a superseded request that
/// finishes anyway is discarded by its sequence number.
async fn drive<T>(
    source: Arc<dyn SearchSource>,
    result_key: String,
    mut settled: watch::Receiver<Option<String>>,
    state: watch::Sender<SearchState<T>>,
) where
    T: DeserializeOwned + Send + Sync + 'static,
{
    // Owned by this task: aborting the driver aborts every request.
    let mut in_flight: JoinSet<Completion> = JoinSet::new();
    let mut latest: u64 = 0;
    let mut current: Option<AbortHandle> = None;

    loop {
        tokio::select! {
            changed = settled.changed() => {
                if changed.is_err() {
                    break;
                }
                let Some(term) = settled.borrow_and_update().clone() else {
                    continue;
                };
                if let Some(previous) = current.take() {
                    previous.abort();
                }
                latest += 1;
                let seq = latest;
                tracing::debug!(source = source.name(), seq, term = %term, "Issuing search");
                state.send_modify(|s| s.is_loading = true);

                let source = Arc::clone(&source);
                current = Some(in_flight.spawn(async move {
                    let outcome = source.search(&term).await;
                    (seq, term, outcome)
                }));
            }

            Some(joined) = in_flight.join_next() => {
                let (seq, term, outcome) = match joined {
                    Ok(completion) => completion,
                    Err(e) if e.is_cancelled() => continue,
                    Err(e) => {
                        let is_latest = current.as_ref().is_some_and(|h| h.id() == e.id());
                        tracing::warn!(source = source.name(), error = %e, is_latest, "Search task failed");
                        if is_latest {
                            current = None;
                            state.send_modify(|s| {
                                s.is_loading = false;
                                s.revision += 1;
                                s.last_error = Some(e.to_string());
                            });
                        }
                        continue;
                    }
                };

                if seq != latest {
                    tracing::debug!(seq, latest, term = %term, "Discarding stale search response");
                    continue;
                }
                current = None;

                let parsed = outcome.and_then(|body| {
                    extract_results::<T>(body, &result_key).map_err(SearchError::from)
                });
                match parsed {
                    Ok(results) => {
                        tracing::debug!(seq, term = %term, count = results.len(), "Search settled");
                        state.send_modify(|s| {
                            s.results = results;
                            s.is_loading = false;
                            s.revision += 1;
                            s.last_error = None;
                        });
                    }
                    Err(e) => {
                        tracing::warn!(source = source.name(), term = %term, error = %e, "Server search failed");
                        state.send_modify(|s| {
                            s.is_loading = false;
                            s.revision += 1;
                            s.last_error = Some(e.to_string());
                        });
                    }
                }
            }
        }
    }
}
