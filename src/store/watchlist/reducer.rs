use crate::store::mvi::Reducer;
use crate::store::watchlist::intent::WatchIntent;
use crate::store::watchlist::state::{WatchEntry, WatchListState};

/// Outcome of a watch-list transition, used for logging only; the watch
/// list never posts notices.
#[derive(Debug, Clone, PartialEq)]
pub enum WatchEvent {
    Added { text: String },
}

pub struct WatchListReducer;

impl Reducer for WatchListReducer {
    type State = WatchListState;
    type Intent = WatchIntent;
    type Event = WatchEvent;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Event>) {
        let mut entries = state.entries;
        match intent {
            WatchIntent::Add { id, text } => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    // Whitespace-only submissions are silent no-ops
                    return (WatchListState { entries }, None);
                }
                entries.insert(0, WatchEntry::new(id, trimmed.to_string()));
                let text = trimmed.to_string();
                (WatchListState { entries }, Some(WatchEvent::Added { text }))
            }
            WatchIntent::Delete { id } => {
                entries.retain(|e| e.id != id);
                (WatchListState { entries }, None)
            }
            WatchIntent::ToggleComplete { id } => {
                if let Some(entry) = entries.iter_mut().find(|e| e.id == id) {
                    entry.is_completed = !entry.is_completed;
                }
                (WatchListState { entries }, None)
            }
            WatchIntent::BeginEdit { id } => {
                if let Some(entry) = entries.iter_mut().find(|e| e.id == id) {
                    entry.is_editing = true;
                    entry.edit_text = entry.text.clone();
                }
                (WatchListState { entries }, None)
            }
            WatchIntent::CancelEdit { id } => {
                if let Some(entry) = entries.iter_mut().find(|e| e.id == id) {
                    entry.is_editing = false;
                    entry.edit_text = entry.text.clone();
                }
                (WatchListState { entries }, None)
            }
            WatchIntent::UpdateDraft { id, text } => {
                if let Some(entry) = entries.iter_mut().find(|e| e.id == id) {
                    entry.edit_text = text;
                }
                (WatchListState { entries }, None)
            }
            WatchIntent::CommitEdit { id } => {
                if let Some(entry) = entries.iter_mut().find(|e| e.id == id) {
                    let trimmed = entry.edit_text.trim().to_string();
                    if trimmed.is_empty() {
                        // Discard the edit: revert to the prior text
                        entry.edit_text = entry.text.clone();
                    } else {
                        entry.text = trimmed.clone();
                        entry.edit_text = trimmed;
                    }
                    entry.is_editing = false;
                }
                (WatchListState { entries }, None)
            }
        }
    }
}
