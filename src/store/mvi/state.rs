//! Base trait for collection state in MVI architecture.

/// Marker trait for state objects owned by the store.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render a snapshot)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}
