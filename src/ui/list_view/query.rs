use std::collections::BTreeMap;

use super::state::{ListViewState, SortOrder};

/// Query parameters of a paginated listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    pub filters: BTreeMap<String, Vec<String>>,
}

impl ListQuery {
    /// Render as `(name, value)` pairs in a stable order.
    ///
    /// Empty search and sort field are left out; each filter value becomes
    /// its own repeated parameter.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy".to_string(), sort_by.clone()));
        }
        pairs.push(("sortOrder".to_string(), self.sort_order.to_string()));
        for (field, values) in &self.filters {
            for value in values {
                pairs.push((field.clone(), value.clone()));
            }
        }
        pairs
    }
}

impl<R> From<&ListViewState<R>> for ListQuery {
    fn from(state: &ListViewState<R>) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            page: state.page(),
            page_size: state.page_size(),
            search: non_empty(state.search()),
            sort_by: non_empty(state.sort_by()),
            sort_order: state.sort_order(),
            filters: state.filters().clone(),
        }
    }
}
