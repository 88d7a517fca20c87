//! Watch-list feature: state, intents, and reducer for the personal
//! "things to watch" collection.

mod intent;
mod reducer;
mod state;

pub use intent::WatchIntent;
pub use reducer::{WatchEvent, WatchListReducer};
pub use state::{WatchEntry, WatchListState};
