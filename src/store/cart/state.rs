use serde::{Deserialize, Serialize};

use crate::store::mvi::StoreState;

/// Cart entry classification.
///
/// At most one `Subscription` entry may exist in the cart; its quantity is
/// pinned to 1. `Accessory` quantities are user-adjustable within [1, 99].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Subscription,
    Accessory,
}

/// A catalog product, read-only, supplied by a static listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub service: String,
    pub service_info: String,
    pub price: f64,
    pub img: String,
}

/// A product the user intends to purchase, with quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub id: String,
    pub service: String,
    pub service_info: String,
    pub price: f64,
    pub img: String,
    pub qty: u32,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl CartEntry {
    /// Build a fresh entry for `product` with quantity 1.
    pub fn from_product(product: Product, kind: EntryKind) -> Self {
        Self {
            id: product.id,
            service: product.service,
            service_info: product.service_info,
            price: product.price,
            img: product.img,
            qty: 1,
            kind,
        }
    }
}

/// The cart collection, insertion-ordered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    pub entries: Vec<CartEntry>,
}

impl StoreState for CartState {}

impl CartState {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of price x qty over all entries.
    pub fn total(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.price * f64::from(e.qty))
            .sum()
    }

    /// Sum of quantities over all entries.
    pub fn count(&self) -> u32 {
        self.entries.iter().map(|e| e.qty).sum()
    }
}
