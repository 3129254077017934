//! Client core for the student records admin console.
//!
//! List views keep their pagination, sorting, search and modal state in a
//! [`ui::list_view::ListViewStore`]. Dropdown selectors resolve their
//! candidates through a debounced [`search::ServerSearch`] binding.

pub mod api;
pub mod cli;
pub mod config;
pub mod debounce;
pub mod logging;
pub mod model;
pub mod search;
pub mod ui;
