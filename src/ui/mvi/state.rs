//! Base trait for view state.

/// Marker trait for view state objects.
///
/// States should be:
/// - Clone (reducers return new values)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
