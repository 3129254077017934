//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (typing in a search box, clicking a column header)
/// - Data events (a listing response reporting the page count)
pub trait Intent: Send + 'static {}
