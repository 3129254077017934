use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::watch;

use crate::search::{SearchOptions, SearchSource, SearchState, ServerSearch};

use super::option::SelectOption;

type Extract<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// Controlled single-choice dropdown.
///
/// Candidates come from a fixed list, or from a [`ServerSearch`] driven by
/// the control's own search text when a remote source is attached. The
/// selected value is never stored here: callers pass it to
/// [`SelectableSearch::options`] and receive changes through `on_change`.
pub struct SelectableSearch<T> {
    static_items: Vec<T>,
    remote: Option<ServerSearch<T>>,
    search_text: String,
    placeholder: String,
    label_of: Extract<T>,
    key_of: Extract<T>,
    on_change: Box<dyn FnMut(String) + Send>,
}

impl<T> SelectableSearch<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// `key_of` must be unique among the displayed candidates.
    pub fn new(
        label_of: impl Fn(&T) -> String + Send + Sync + 'static,
        key_of: impl Fn(&T) -> String + Send + Sync + 'static,
        on_change: impl FnMut(String) + Send + 'static,
    ) -> Self {
        Self {
            static_items: Vec::new(),
            remote: None,
            search_text: String::new(),
            placeholder: String::new(),
            label_of: Box::new(label_of),
            key_of: Box::new(key_of),
            on_change: Box::new(on_change),
        }
    }

    pub fn with_static_items(mut self, items: Vec<T>) -> Self {
        self.static_items = items;
        self
    }

    /// Serve candidates from `source` instead of the static list.
    ///
    /// The current search text (initially empty) is submitted right away so
    /// the list fills without the user typing.
    pub fn with_remote(mut self, source: Arc<dyn SearchSource>, options: SearchOptions) -> Self {
        let remote = ServerSearch::new(source, options);
        remote.set_term(self.search_text.clone());
        self.remote = Some(remote);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        if let Some(remote) = &self.remote {
            remote.set_term(self.search_text.clone());
        }
    }

    pub fn is_loading(&self) -> bool {
        self.remote.as_ref().is_some_and(ServerSearch::is_loading)
    }

    /// Change notifications of the remote candidates, if any.
    pub fn subscribe(&self) -> Option<watch::Receiver<SearchState<T>>> {
        self.remote.as_ref().map(ServerSearch::subscribe)
    }

    /// The candidates currently on display; empty while loading.
    pub fn candidates(&self) -> Vec<T> {
        match &self.remote {
            Some(remote) => {
                let state = remote.snapshot();
                if state.is_loading {
                    Vec::new()
                } else {
                    state.results
                }
            }
            None => self.static_items.clone(),
        }
    }

    /// Option list for the caller-owned `value`.
    ///
    /// While loading this is exactly one disabled placeholder entry, so
    /// "loading" never looks like "no results".
    pub fn options(&self, value: Option<&str>) -> Vec<SelectOption> {
        if self.is_loading() {
            return vec![SelectOption::loading()];
        }
        self.candidates()
            .iter()
            .map(|item| {
                let key = (self.key_of)(item);
                SelectOption {
                    selected: value == Some(key.as_str()),
                    label: (self.label_of)(item),
                    key,
                    disabled: false,
                }
            })
            .collect()
    }

    /// Label for the trigger: the selected candidate's label, else the placeholder.
    pub fn display_label(&self, value: Option<&str>) -> String {
        value
            .and_then(|v| {
                self.candidates()
                    .iter()
                    .find(|item| (self.key_of)(item) == v)
                    .map(|item| (self.label_of)(item))
            })
            .unwrap_or_else(|| self.placeholder.clone())
    }

    /// User picked the candidate with `key`.
    ///
    /// Calls `on_change` once and returns true if `key` is on display;
    /// the loading placeholder and unknown keys are ignored.
    pub fn select(&mut self, key: &str) -> bool {
        if self.is_loading() {
            return false;
        }
        let found = self
            .candidates()
            .iter()
            .any(|item| (self.key_of)(item) == key);
        if found {
            (self.on_change)(key.to_string());
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde::Deserialize;
    use serde_json::{json, Value};
    use std::time::Duration;
    use tokio::time::sleep;

    use crate::search::SearchError;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Department {
        department_id: i64,
        department_name: String,
    }

    fn dept(id: i64, name: &str) -> Department {
        Department {
            department_id: id,
            department_name: name.to_string(),
        }
    }

    struct DepartmentSource;

    #[async_trait]
    impl SearchSource for DepartmentSource {
        fn name(&self) -> &str {
            "departments"
        }

        async fn search(&self, term: &str) -> Result<Value, SearchError> {
            sleep(Duration::from_millis(100)).await;
            let all = [(1, "Physics"), (2, "Chemistry"), (3, "Philosophy")];
            let items: Vec<Value> = all
                .iter()
                .filter(|(_, name)| name.to_lowercase().starts_with(&term.to_lowercase()))
                .map(|(id, name)| json!({"department_id": id, "department_name": name}))
                .collect();
            Ok(json!({ "items": items }))
        }
    }

    fn control(changes: Arc<Mutex<Vec<String>>>) -> SelectableSearch<Department> {
        SelectableSearch::new(
            |d: &Department| d.department_name.clone(),
            |d: &Department| d.department_id.to_string(),
            move |key| changes.lock().push(key),
        )
        .with_placeholder("Choose a department")
    }

    #[test]
    fn static_items_are_listed_as_is() {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let select = control(changes).with_static_items(vec![dept(2, "Maths"), dept(1, "Art")]);

        let options = select.options(Some("1"));
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "Maths");
        assert!(!options[0].selected);
        assert_eq!(options[1].key, "1");
        assert!(options[1].selected);
        assert!(!select.is_remote());
    }

    #[test]
    fn selecting_calls_on_change_once_with_the_key() {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let mut select = control(changes.clone()).with_static_items(vec![dept(5, "Biology")]);

        assert!(select.select("5"));
        assert!(!select.select("42"));
        assert_eq!(*changes.lock(), vec!["5".to_string()]);
    }

    #[test]
    fn display_label_falls_back_to_placeholder() {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let select = control(changes).with_static_items(vec![dept(5, "Biology")]);

        assert_eq!(select.display_label(Some("5")), "Biology");
        assert_eq!(select.display_label(Some("6")), "Choose a department");
        assert_eq!(select.display_label(None), "Choose a department");
    }

    #[tokio::test(start_paused = true)]
    async fn remote_candidates_show_a_single_loading_entry() {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let mut select = control(changes.clone())
            .with_static_items(vec![dept(9, "Ignored")])
            .with_remote(Arc::new(DepartmentSource), SearchOptions::default());

        // Empty search settles at t=300 and resolves at t=400.
        sleep(Duration::from_millis(350)).await;
        assert!(select.is_loading());
        assert_eq!(select.options(None), vec![SelectOption::loading()]);
        assert!(!select.select(""));

        sleep(Duration::from_millis(100)).await;
        let labels: Vec<String> = select.options(None).into_iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["Physics", "Chemistry", "Philosophy"]);

        select.set_search_text("ph");
        sleep(Duration::from_millis(450)).await;
        let keys: Vec<String> = select.options(None).into_iter().map(|o| o.key).collect();
        assert_eq!(keys, vec!["1", "3"]);

        assert!(select.select("3"));
        assert_eq!(*changes.lock(), vec!["3".to_string()]);
    }
}
