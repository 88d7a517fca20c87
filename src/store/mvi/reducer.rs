//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::StoreState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Option<Event>).
/// The event reports what happened (an add, a rejection, a removal) so the
/// store can post notices and logs without the reducer doing side effects.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The outcome type surfaced alongside the new state.
    type Event;

    /// Process an intent and return the new state plus an optional event.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Event>);
}
