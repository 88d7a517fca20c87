//! StreamList core: watch-list and cart state store, cart business rules,
//! key-value persistence, and the movie catalog search client.
//!
//! The presentation layer (the CLI binary) only observes snapshots and
//! forwards intents; all state lives here.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod products;
pub mod storage;
pub mod store;
