//! Movie catalog search.
//!
//! Thin client over the TMDB search endpoint plus the
//! idle/loading/success/error session state machine driving it.

mod client;
mod session;
mod types;

pub use client::{normalize_response, SearchClient, SearchError};
pub use session::{QueryToken, SearchSession, SearchState};
pub use types::{MovieRecord, SearchResult};
