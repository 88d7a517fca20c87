use streamlist::store::mvi::Reducer;
use streamlist::store::watchlist::{
    WatchEntry, WatchEvent, WatchIntent, WatchListReducer, WatchListState,
};

fn add(state: WatchListState, id: &str, text: &str) -> (WatchListState, Option<WatchEvent>) {
    WatchListReducer::reduce(
        state,
        WatchIntent::Add {
            id: id.to_string(),
            text: text.to_string(),
        },
    )
}

#[test]
fn add_prepends_trimmed_entry() {
    let (state, event) = add(WatchListState::default(), "a", "  The Wire  ");
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].text, "The Wire");
    assert_eq!(state.entries[0].edit_text, "The Wire");
    assert!(!state.entries[0].is_completed);
    assert!(!state.entries[0].is_editing);
    assert_eq!(
        event,
        Some(WatchEvent::Added {
            text: "The Wire".to_string()
        })
    );
}

#[test]
fn newest_entry_comes_first() {
    let (state, _) = add(WatchListState::default(), "a", "first");
    let (state, _) = add(state, "b", "second");
    assert_eq!(state.entries[0].text, "second");
    assert_eq!(state.entries[1].text, "first");
}

#[test]
fn whitespace_only_add_is_noop() {
    for text in ["", " ", "   ", "\t", "\n  \t"] {
        let (state, event) = add(WatchListState::default(), "a", text);
        assert!(state.entries.is_empty(), "{text:?} should be a no-op");
        assert_eq!(event, None);
    }
}

#[test]
fn delete_removes_matching_entry() {
    let (state, _) = add(WatchListState::default(), "a", "keep");
    let (state, _) = add(state, "b", "drop");
    let (state, _) = WatchListReducer::reduce(
        state,
        WatchIntent::Delete {
            id: "b".to_string(),
        },
    );
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].id, "a");
}

#[test]
fn delete_unknown_id_is_noop() {
    let (state, _) = add(WatchListState::default(), "a", "keep");
    let before = state.clone();
    let (state, _) = WatchListReducer::reduce(
        state,
        WatchIntent::Delete {
            id: "missing".to_string(),
        },
    );
    assert_eq!(state, before);
}

#[test]
fn toggle_flips_completion_both_ways() {
    let (state, _) = add(WatchListState::default(), "a", "show");
    let toggle = |s| {
        WatchListReducer::reduce(
            s,
            WatchIntent::ToggleComplete {
                id: "a".to_string(),
            },
        )
        .0
    };
    let state = toggle(state);
    assert!(state.entries[0].is_completed);
    let state = toggle(state);
    assert!(!state.entries[0].is_completed);
}

#[test]
fn edit_lifecycle_commits_trimmed_text() {
    let (state, _) = add(WatchListState::default(), "a", "old title");
    let (state, _) = WatchListReducer::reduce(state, WatchIntent::BeginEdit { id: "a".into() });
    assert!(state.entries[0].is_editing);

    let (state, _) = WatchListReducer::reduce(
        state,
        WatchIntent::UpdateDraft {
            id: "a".into(),
            text: "  new title ".into(),
        },
    );
    // Draft updates don't touch the committed text
    assert_eq!(state.entries[0].text, "old title");

    let (state, _) = WatchListReducer::reduce(state, WatchIntent::CommitEdit { id: "a".into() });
    assert_eq!(state.entries[0].text, "new title");
    assert_eq!(state.entries[0].edit_text, "new title");
    assert!(!state.entries[0].is_editing);
}

#[test]
fn empty_commit_reverts_to_prior_text() {
    let (state, _) = add(WatchListState::default(), "a", "keep me");
    let (state, _) = WatchListReducer::reduce(state, WatchIntent::BeginEdit { id: "a".into() });
    let (state, _) = WatchListReducer::reduce(
        state,
        WatchIntent::UpdateDraft {
            id: "a".into(),
            text: "   ".into(),
        },
    );
    let (state, _) = WatchListReducer::reduce(state, WatchIntent::CommitEdit { id: "a".into() });
    assert_eq!(state.entries[0].text, "keep me");
    assert_eq!(state.entries[0].edit_text, "keep me");
    assert!(!state.entries[0].is_editing);
}

#[test]
fn cancel_resets_draft_and_exits_edit_mode() {
    let (state, _) = add(WatchListState::default(), "a", "original");
    let (state, _) = WatchListReducer::reduce(state, WatchIntent::BeginEdit { id: "a".into() });
    let (state, _) = WatchListReducer::reduce(
        state,
        WatchIntent::UpdateDraft {
            id: "a".into(),
            text: "scratch".into(),
        },
    );
    let (state, _) = WatchListReducer::reduce(state, WatchIntent::CancelEdit { id: "a".into() });
    assert!(!state.entries[0].is_editing);
    assert_eq!(state.entries[0].edit_text, "original");
    assert_eq!(state.entries[0].text, "original");
}

#[test]
fn persisted_shape_uses_camel_case_fields() {
    let entry = WatchEntry::new("a".to_string(), "Dune".to_string());
    let json = serde_json::to_string(&entry).unwrap();
    assert!(json.contains("\"isCompleted\":false"));
    assert!(json.contains("\"isEditing\":false"));
    assert!(json.contains("\"editText\":\"Dune\""));
}
