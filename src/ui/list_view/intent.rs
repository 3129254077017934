use crate::ui::mvi::Intent;

use super::state::SortOrder;

/// Changes a list view can go through.
#[derive(Debug, Clone)]
pub enum ListViewIntent<R> {
    SetPage(u32),
    SetPageSize(u32),
    SetSearch(String),
    SetSortBy(String),
    SetSortOrder(SortOrder),

    /// Open or close the "add record" form. Opening it ends any edit.
    SetAddOpen(bool),
    /// Start editing a record (closes the add form) or stop editing.
    SetEditingRecord(Option<R>),
    /// Record shown in the details dialog; unrelated to editing.
    SetSelectedRecord(Option<R>),

    /// Replace the accepted values of one filter; empty removes it.
    SetFilter { field: String, values: Vec<String> },
    SetFilterOpen(bool),

    /// Page count reported by a listing response.
    TotalPagesKnown(u32),
}

impl<R: Send + 'static> Intent for ListViewIntent<R> {}
