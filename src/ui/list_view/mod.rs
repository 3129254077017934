//! List view state: pagination, sorting, search, filters and the
//! add/edit/details modals of one entity table.
//!
//! Uses MVI:
//! - `state.rs` - [`ListViewState`] and [`SortOrder`]
//! - `intent.rs` - one intent per setter
//! - `reducer.rs` - state transitions
//! - `store.rs` - the per-view container exposing the setters
//! - `query.rs` - listing request parameters
//! - `pagination.rs` - page button layout

mod intent;
mod pagination;
mod query;
mod reducer;
mod state;
mod store;

pub use intent::ListViewIntent;
pub use pagination::{page_window, render_window, PageSlot};
pub use query::ListQuery;
pub use reducer::ListViewReducer;
pub use state::{ListViewState, SortOrder, DEFAULT_PAGE_SIZE};
pub use store::ListViewStore;
