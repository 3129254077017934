use crate::model::Entity;
use crate::ui::mvi::Reducer;

use super::intent::ListViewIntent;
use super::query::ListQuery;
use super::reducer::ListViewReducer;
use super::state::{ListViewState, SortOrder};

/// State container owned by one list view.
///
/// Create one per view; stores are never shared between views.
#[derive(Debug, Clone, Default)]
pub struct ListViewStore<R> {
    state: ListViewState<R>,
}

impl<R> ListViewStore<R>
where
    R: Clone + PartialEq + Send + 'static,
{
    pub fn new(state: ListViewState<R>) -> Self {
        Self { state }
    }

    pub fn for_entity(entity: Entity, page_size: u32) -> Self {
        Self::new(ListViewState::for_entity(entity, page_size))
    }

    pub fn state(&self) -> &ListViewState<R> {
        &self.state
    }

    pub fn dispatch(&mut self, intent: ListViewIntent<R>) {
        let state = std::mem::take(&mut self.state);
        self.state = ListViewReducer::reduce(state, intent);
    }

    pub fn set_page(&mut self, page: u32) {
        self.dispatch(ListViewIntent::SetPage(page));
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.dispatch(ListViewIntent::SetPageSize(page_size));
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.dispatch(ListViewIntent::SetSearch(search.into()));
    }

    pub fn set_sort_by(&mut self, field: impl Into<String>) {
        self.dispatch(ListViewIntent::SetSortBy(field.into()));
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.dispatch(ListViewIntent::SetSortOrder(order));
    }

    pub fn set_add_open(&mut self, open: bool) {
        self.dispatch(ListViewIntent::SetAddOpen(open));
    }

    pub fn set_editing_record(&mut self, record: Option<R>) {
        self.dispatch(ListViewIntent::SetEditingRecord(record));
    }

    pub fn set_selected_record(&mut self, record: Option<R>) {
        self.dispatch(ListViewIntent::SetSelectedRecord(record));
    }

    pub fn set_filter(&mut self, field: impl Into<String>, values: Vec<String>) {
        self.dispatch(ListViewIntent::SetFilter {
            field: field.into(),
            values,
        });
    }

    pub fn set_filter_open(&mut self, open: bool) {
        self.dispatch(ListViewIntent::SetFilterOpen(open));
    }

    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.dispatch(ListViewIntent::TotalPagesKnown(total_pages));
    }

    /// Query parameters for the listing request of the current state.
    pub fn query(&self) -> ListQuery {
        ListQuery::from(&self.state)
    }
}
