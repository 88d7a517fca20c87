use crate::store::mvi::Intent;

use super::state::Product;

/// User actions against the cart.
#[derive(Debug, Clone)]
pub enum CartIntent {
    Add { product: Product },
    Remove { id: String },
    /// Requested quantity arrives as the raw numeric input; non-finite
    /// values are ignored, finite values are truncated and clamped.
    UpdateQty { id: String, qty: f64 },
    Clear,
}

impl Intent for CartIntent {}
