//! Dropdown that picks one record from a fixed list or a server search.

mod control;
mod option;

pub use control::SelectableSearch;
pub use option::{SelectOption, LOADING_LABEL};
