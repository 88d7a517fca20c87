//! Cart rule engine.
//!
//! Pure, stateless classification helpers. Safe to call any number of
//! times with identical results for identical input.

use super::state::{CartEntry, EntryKind, Product};

/// A product is a subscription when its service name contains the
/// case-insensitive substring "subscription".
pub fn is_subscription(product: &Product) -> bool {
    product.service.to_lowercase().contains("subscription")
}

/// Whether the cart already holds a subscription entry.
pub fn has_subscription(entries: &[CartEntry]) -> bool {
    entries.iter().any(|e| e.kind == EntryKind::Subscription)
}

/// Classify a product for insertion.
pub fn classify(product: &Product) -> EntryKind {
    if is_subscription(product) {
        EntryKind::Subscription
    } else {
        EntryKind::Accessory
    }
}
