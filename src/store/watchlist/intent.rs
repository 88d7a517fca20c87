use crate::store::mvi::Intent;

/// User actions against the watch list.
///
/// `Add` carries a pre-generated id so the reducer stays pure; the store
/// facade generates one per submission.
#[derive(Debug, Clone)]
pub enum WatchIntent {
    Add { id: String, text: String },
    Delete { id: String },
    ToggleComplete { id: String },
    BeginEdit { id: String },
    CancelEdit { id: String },
    /// Update the edit draft without committing it.
    UpdateDraft { id: String, text: String },
    /// Commit the draft: an empty trim reverts to the prior text.
    CommitEdit { id: String },
}

impl Intent for WatchIntent {}
