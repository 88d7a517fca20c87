//! List/Cart state store.
//!
//! In-memory authoritative owner of the watch-list and cart collections.
//! All mutations flow through intents and pure reducers; every change is
//! re-serialized to the key-value adapter, and the collections hydrate
//! from it on startup. Unreadable or non-array stored content degrades to
//! an empty collection, never an error.

pub mod cart;
pub mod mvi;
pub mod notices;
pub mod watchlist;

use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::storage::{KvStore, StorageError, CART_KEY, WATCH_LIST_KEY};

use cart::{CartEvent, CartIntent, CartReducer, CartState, Product};
use mvi::Reducer;
use notices::{ExpiryToken, NoticeBoard, NoticeSlot};
use watchlist::{WatchEvent, WatchIntent, WatchListReducer, WatchListState};

/// Authoritative state container, generic over the persistence adapter.
pub struct Store<K: KvStore> {
    kv: K,
    watch: WatchListState,
    cart: CartState,
    notices: NoticeBoard,
}

impl<K: KvStore> Store<K> {
    /// Hydrate both collections from the adapter.
    pub fn open(kv: K) -> Self {
        let watch = WatchListState {
            entries: hydrate(&kv, WATCH_LIST_KEY),
        };
        let cart = CartState {
            entries: hydrate(&kv, CART_KEY),
        };
        Self {
            kv,
            watch,
            cart,
            notices: NoticeBoard::new(),
        }
    }

    pub fn watch_list(&self) -> &WatchListState {
        &self.watch
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }

    pub fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    pub fn warning(&self, now: Instant) -> Option<&str> {
        self.notices.current(NoticeSlot::Warning, now)
    }

    pub fn confirmation(&self, now: Instant) -> Option<&str> {
        self.notices.current(NoticeSlot::Confirmation, now)
    }

    /// Clear a notice once its delay elapses. Superseded tokens are no-ops.
    pub fn expire_notice(&mut self, token: ExpiryToken) {
        self.notices.expire(token);
    }

    // --- watch list ---

    /// Add a new entry from submitted text. Whitespace-only input is a
    /// silent no-op. Ids are generated here so the reducer stays pure.
    pub fn add_watch_item(&mut self, text: &str) -> Result<(), StorageError> {
        self.dispatch_watch(WatchIntent::Add {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
        })
    }

    pub fn delete_watch_item(&mut self, id: &str) -> Result<(), StorageError> {
        self.dispatch_watch(WatchIntent::Delete { id: id.to_string() })
    }

    pub fn toggle_complete(&mut self, id: &str) -> Result<(), StorageError> {
        self.dispatch_watch(WatchIntent::ToggleComplete { id: id.to_string() })
    }

    pub fn begin_edit(&mut self, id: &str) -> Result<(), StorageError> {
        self.dispatch_watch(WatchIntent::BeginEdit { id: id.to_string() })
    }

    pub fn cancel_edit(&mut self, id: &str) -> Result<(), StorageError> {
        self.dispatch_watch(WatchIntent::CancelEdit { id: id.to_string() })
    }

    pub fn update_edit_draft(&mut self, id: &str, text: &str) -> Result<(), StorageError> {
        self.dispatch_watch(WatchIntent::UpdateDraft {
            id: id.to_string(),
            text: text.to_string(),
        })
    }

    pub fn commit_edit(&mut self, id: &str) -> Result<(), StorageError> {
        self.dispatch_watch(WatchIntent::CommitEdit { id: id.to_string() })
    }

    fn dispatch_watch(&mut self, intent: WatchIntent) -> Result<(), StorageError> {
        let before = self.watch.clone();
        let (next, event) = WatchListReducer::reduce(before.clone(), intent);
        if let Some(WatchEvent::Added { ref text }) = event {
            tracing::info!(text = %text, "watch list item added");
        }
        if next != before {
            self.watch = next;
            persist(&mut self.kv, WATCH_LIST_KEY, &self.watch.entries)?;
        }
        Ok(())
    }

    // --- cart ---

    /// Add a product, applying the cart rules first. Returns the expiry
    /// token of any posted notice so a runtime can schedule its removal.
    pub fn add_to_cart(
        &mut self,
        product: Product,
        now: Instant,
    ) -> Result<Option<ExpiryToken>, StorageError> {
        self.dispatch_cart(CartIntent::Add { product }, now)
    }

    pub fn remove_from_cart(
        &mut self,
        id: &str,
        now: Instant,
    ) -> Result<Option<ExpiryToken>, StorageError> {
        self.dispatch_cart(CartIntent::Remove { id: id.to_string() }, now)
    }

    pub fn update_qty(
        &mut self,
        id: &str,
        qty: f64,
        now: Instant,
    ) -> Result<Option<ExpiryToken>, StorageError> {
        self.dispatch_cart(
            CartIntent::UpdateQty {
                id: id.to_string(),
                qty,
            },
            now,
        )
    }

    pub fn clear_cart(&mut self, now: Instant) -> Result<Option<ExpiryToken>, StorageError> {
        self.dispatch_cart(CartIntent::Clear, now)
    }

    fn dispatch_cart(
        &mut self,
        intent: CartIntent,
        now: Instant,
    ) -> Result<Option<ExpiryToken>, StorageError> {
        let before = self.cart.clone();
        let (next, event) = CartReducer::reduce(before.clone(), intent);
        // Notices post only after the write lands; rejections never
        // change state, so their warnings are unaffected
        if next != before {
            self.cart = next;
            persist(&mut self.kv, CART_KEY, &self.cart.entries)?;
        }
        let token = event.map(|event| self.post_cart_notice(event, now));
        Ok(token)
    }

    fn post_cart_notice(&mut self, event: CartEvent, now: Instant) -> ExpiryToken {
        let (slot, message) = match event {
            CartEvent::Added { service } => (
                NoticeSlot::Confirmation,
                format!("Added {service} to cart."),
            ),
            CartEvent::AlreadyInCart { service } => {
                tracing::warn!(service = %service, "rejected add: already in cart");
                (
                    NoticeSlot::Warning,
                    format!("{service} is already in your cart."),
                )
            }
            CartEvent::SubscriptionConflict { service } => {
                tracing::warn!(service = %service, "rejected add: cart already holds a subscription");
                (
                    NoticeSlot::Warning,
                    "You can only add one subscription at a time.".to_string(),
                )
            }
            CartEvent::Removed { service } => (
                NoticeSlot::Confirmation,
                format!("Removed {service} from cart."),
            ),
            CartEvent::Cleared => (NoticeSlot::Confirmation, "Cart cleared.".to_string()),
        };
        self.notices.post(slot, message, now)
    }
}

/// Read and deserialize a collection; missing key, unparsable content, or
/// non-array content all hydrate as empty (fail-soft).
fn hydrate<K: KvStore, T: DeserializeOwned>(kv: &K, key: &str) -> Vec<T> {
    let Some(raw) = kv.get(key) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(key, error = %err, "recovered corrupt stored collection as empty");
            Vec::new()
        }
    }
}

fn persist<K: KvStore, T: Serialize>(kv: &mut K, key: &str, entries: &[T]) -> Result<(), StorageError> {
    let json = serde_json::to_string(entries).map_err(|e| StorageError::SerializeError {
        key: key.to_string(),
        source: e,
    })?;
    kv.set(key, &json)
}
