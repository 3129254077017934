use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::Entity;
use crate::ui::mvi::UiState;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("invalid sort order '{}', expected asc or desc", other)),
        }
    }
}

/// Pagination, sorting, search and modal state of one list view.
///
/// Fields are only written by [`super::ListViewReducer`]; consumers read
/// them through the accessors and change them through
/// [`super::ListViewStore`] setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListViewState<R> {
    pub(super) page: u32,
    pub(super) page_size: u32,
    pub(super) search: String,
    pub(super) sort_by: String,
    pub(super) sort_order: SortOrder,
    /// Field name to accepted values; absent means unfiltered.
    pub(super) filters: BTreeMap<String, Vec<String>>,
    pub(super) is_filter_open: bool,
    /// Known once a listing response has been seen.
    pub(super) total_pages: Option<u32>,
    pub(super) is_add_modal_open: bool,
    pub(super) editing_record: Option<R>,
    pub(super) selected_record: Option<R>,
}

impl<R> Default for ListViewState<R> {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            sort_by: String::new(),
            sort_order: SortOrder::Asc,
            filters: BTreeMap::new(),
            is_filter_open: false,
            total_pages: None,
            is_add_modal_open: false,
            editing_record: None,
            selected_record: None,
        }
    }
}

impl<R> UiState for ListViewState<R> where R: Clone + PartialEq + Send + 'static {}

impl<R> ListViewState<R> {
    /// Fresh state for one entity collection.
    ///
    /// A zero `page_size` falls back to [`DEFAULT_PAGE_SIZE`].
    pub fn for_entity(entity: Entity, page_size: u32) -> Self {
        Self {
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
            sort_by: entity.default_sort().to_string(),
            ..Self::default()
        }
    }

    /// Current page, always at least 1.
    ///
    /// The upper bound is only enforced when a listing response reports the
    /// page count (`TotalPagesKnown`); until then `page` may exceed
    /// `total_pages`.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn filters(&self) -> &BTreeMap<String, Vec<String>> {
        &self.filters
    }

    pub fn is_filter_open(&self) -> bool {
        self.is_filter_open
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn is_add_modal_open(&self) -> bool {
        self.is_add_modal_open
    }

    pub fn editing_record(&self) -> Option<&R> {
        self.editing_record.as_ref()
    }

    pub fn selected_record(&self) -> Option<&R> {
        self.selected_record.as_ref()
    }

    /// Offset of the first row on the current page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }
}
