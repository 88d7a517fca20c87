//! Shopping-cart feature: product classification rules, cart state,
//! intents, and the reducer enforcing the one-subscription business rule.

mod intent;
mod reducer;
pub mod rules;
mod state;

pub use intent::CartIntent;
pub use reducer::{CartEvent, CartReducer};
pub use state::{CartEntry, CartState, EntryKind, Product};

/// Upper bound on any entry's quantity.
pub const MAX_QTY: u32 = 99;
