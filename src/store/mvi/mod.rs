//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the state store.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑           │
//!    │           └──→ Event (notices, logging)
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a collection
//! - **Intent**: User actions forwarded by the presentation layer
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Event**: Outcome a reducer surfaces without performing side effects

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
