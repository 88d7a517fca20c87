use crate::store::mvi::Reducer;

use super::intent::CartIntent;
use super::rules;
use super::state::{CartEntry, CartState, EntryKind};
use super::MAX_QTY;

/// Outcome of a cart transition. Rejections become warning notices,
/// successful mutations become confirmation notices.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    Added { service: String },
    AlreadyInCart { service: String },
    SubscriptionConflict { service: String },
    Removed { service: String },
    Cleared,
}

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartIntent;
    type Event = CartEvent;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Event>) {
        let mut entries = state.entries;
        match intent {
            CartIntent::Add { product } => {
                let kind = rules::classify(&product);
                if kind == EntryKind::Subscription {
                    if entries.iter().any(|e| e.id == product.id) {
                        let event = CartEvent::AlreadyInCart {
                            service: product.service,
                        };
                        return (CartState { entries }, Some(event));
                    }
                    if rules::has_subscription(&entries) {
                        let event = CartEvent::SubscriptionConflict {
                            service: product.service,
                        };
                        return (CartState { entries }, Some(event));
                    }
                    let service = product.service.clone();
                    entries.push(CartEntry::from_product(product, kind));
                    return (CartState { entries }, Some(CartEvent::Added { service }));
                }

                let service = product.service.clone();
                if let Some(existing) = entries.iter_mut().find(|e| e.id == product.id) {
                    // Repeated adds clamp silently at the quantity ceiling
                    existing.qty = (existing.qty + 1).min(MAX_QTY);
                } else {
                    entries.push(CartEntry::from_product(product, kind));
                }
                (CartState { entries }, Some(CartEvent::Added { service }))
            }
            CartIntent::Remove { id } => {
                let removed = entries.iter().position(|e| e.id == id).map(|i| entries.remove(i));
                let event = removed.map(|e| CartEvent::Removed { service: e.service });
                (CartState { entries }, event)
            }
            CartIntent::UpdateQty { id, qty } => {
                if qty.is_finite() {
                    if let Some(entry) = entries.iter_mut().find(|e| e.id == id) {
                        entry.qty = match entry.kind {
                            // Subscriptions are not quantity-adjustable
                            EntryKind::Subscription => 1,
                            EntryKind::Accessory => {
                                (qty.trunc() as i64).clamp(1, i64::from(MAX_QTY)) as u32
                            }
                        };
                    }
                }
                (CartState { entries }, None)
            }
            CartIntent::Clear => (CartState::default(), Some(CartEvent::Cleared)),
        }
    }
}
