//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (form submits, button clicks, input changes)
/// - Derived actions (quantity edits, edit-mode transitions)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
