//! Search session state machine.
//!
//! One cycle per submitted query: idle → loading → success | error. A new
//! submission supersedes any in-flight one; the outcome of a superseded
//! request is discarded by token comparison so stale responses can never
//! be applied out of order.

use crate::config::CredentialStatus;

use super::client::SearchError;
use super::types::SearchResult;

/// Identifies one submitted query. Only the latest token may resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryToken(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading {
        query: String,
    },
    Success {
        query: String,
        results: Vec<SearchResult>,
    },
    /// Persistent until the next submission; never auto-expires.
    Error {
        message: String,
    },
}

#[derive(Debug, Default)]
pub struct SearchSession {
    state: SearchState,
    seq: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Submit a query.
    ///
    /// - Empty trimmed query: silent no-op, returns `None`.
    /// - Missing credential: transitions to `Error` (clearing any previous
    ///   results) with the reason and `guidance` appended, returns `None`.
    /// - Otherwise transitions to `Loading` and returns the token the
    ///   eventual outcome must present to [`resolve`](Self::resolve).
    pub fn submit(
        &mut self,
        query: &str,
        credential: &CredentialStatus,
        guidance: &str,
    ) -> Option<QueryToken> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        match credential {
            CredentialStatus::Unconfigured { reason } => {
                self.state = SearchState::Error {
                    message: format!("API key is missing ({reason}). {guidance}"),
                };
                None
            }
            CredentialStatus::Configured(_) => {
                self.seq += 1;
                self.state = SearchState::Loading {
                    query: trimmed.to_string(),
                };
                Some(QueryToken(self.seq))
            }
        }
    }

    /// Apply the outcome of the query identified by `token`.
    ///
    /// Outcomes for superseded tokens are discarded.
    pub fn resolve(&mut self, token: QueryToken, outcome: Result<Vec<SearchResult>, SearchError>) {
        if token.0 != self.seq {
            tracing::debug!("discarding stale search response");
            return;
        }
        let query = match &self.state {
            SearchState::Loading { query } => query.clone(),
            _ => return,
        };
        self.state = match outcome {
            Ok(results) => SearchState::Success { query, results },
            Err(err) => SearchState::Error {
                message: err.to_string(),
            },
        };
    }
}
