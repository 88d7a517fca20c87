use serde::{Deserialize, Serialize};

use crate::store::mvi::StoreState;

/// A user-authored item the user intends to watch.
///
/// `is_editing` and `edit_text` are transient UI flags; they persist with
/// the entry for parity with the stored browser format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchEntry {
    pub id: String,
    pub text: String,
    pub is_completed: bool,
    pub is_editing: bool,
    pub edit_text: String,
}

impl WatchEntry {
    /// Build a fresh entry from already-trimmed text.
    pub fn new(id: String, text: String) -> Self {
        Self {
            id,
            edit_text: text.clone(),
            text,
            is_completed: false,
            is_editing: false,
        }
    }
}

/// The watch-list collection, newest-first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WatchListState {
    pub entries: Vec<WatchEntry>,
}

impl StoreState for WatchListState {}

impl WatchListState {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
