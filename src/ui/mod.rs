//! Presentation-agnostic view state for the admin list pages.

pub mod list_view;
pub mod mvi;
pub mod select;
