use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::ListViewIntent;
use super::state::ListViewState;

/// Reducer for list view state transitions.
///
/// Each intent touches only the field it names, with two exceptions: the
/// add form and the edit form are mutually exclusive, and a reported page
/// count clamps the current page.
pub struct ListViewReducer<R>(PhantomData<fn() -> R>);

impl<R> Reducer for ListViewReducer<R>
where
    R: Clone + PartialEq + Send + 'static,
{
    type State = ListViewState<R>;
    type Intent = ListViewIntent<R>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListViewIntent::SetPage(page) => {
                state.page = page.max(1);
            }
            ListViewIntent::SetPageSize(page_size) => {
                // A zero page size would make every page empty; keep the old one.
                if page_size > 0 {
                    state.page_size = page_size;
                }
            }
            ListViewIntent::SetSearch(search) => {
                state.search = search;
            }
            ListViewIntent::SetSortBy(field) => {
                state.sort_by = field;
            }
            ListViewIntent::SetSortOrder(order) => {
                state.sort_order = order;
            }
            ListViewIntent::SetAddOpen(open) => {
                state.is_add_modal_open = open;
                if open {
                    state.editing_record = None;
                }
            }
            ListViewIntent::SetEditingRecord(record) => {
                if record.is_some() {
                    state.is_add_modal_open = false;
                }
                state.editing_record = record;
            }
            ListViewIntent::SetSelectedRecord(record) => {
                state.selected_record = record;
            }
            ListViewIntent::SetFilter { field, values } => {
                if values.is_empty() {
                    state.filters.remove(&field);
                } else {
                    state.filters.insert(field, values);
                }
            }
            ListViewIntent::SetFilterOpen(open) => {
                state.is_filter_open = open;
            }
            ListViewIntent::TotalPagesKnown(total) => {
                state.total_pages = Some(total);
                state.page = state.page.clamp(1, total.max(1));
            }
        }
        state
    }
}
