//! Static product listing rendered by the subscriptions page.
//!
//! Stand-in for an external catalog; entries are read-only. Subscription
//! products are recognized by name (see `store::cart::rules`), not by a
//! flag here.

use crate::store::cart::Product;

pub fn listing() -> Vec<Product> {
    vec![
        Product {
            id: "sub-basic".to_string(),
            service: "Basic Subscription".to_string(),
            service_info: "One screen, SD streaming.".to_string(),
            price: 5.99,
            img: "images/sub-basic.png".to_string(),
        },
        Product {
            id: "sub-standard".to_string(),
            service: "Standard Subscription".to_string(),
            service_info: "Two screens, HD streaming.".to_string(),
            price: 9.99,
            img: "images/sub-standard.png".to_string(),
        },
        Product {
            id: "sub-premium".to_string(),
            service: "Premium Subscription".to_string(),
            service_info: "Four screens, 4K streaming.".to_string(),
            price: 14.99,
            img: "images/sub-premium.png".to_string(),
        },
        Product {
            id: "acc-hdmi".to_string(),
            service: "HDMI Cable".to_string(),
            service_info: "Six-foot braided HDMI 2.1 cable.".to_string(),
            price: 5.00,
            img: "images/acc-hdmi.png".to_string(),
        },
        Product {
            id: "acc-remote".to_string(),
            service: "Streaming Remote".to_string(),
            service_info: "Replacement remote with voice search.".to_string(),
            price: 19.99,
            img: "images/acc-remote.png".to_string(),
        },
        Product {
            id: "acc-case".to_string(),
            service: "Travel Case".to_string(),
            service_info: "Hard-shell case for the streaming stick.".to_string(),
            price: 12.50,
            img: "images/acc-case.png".to_string(),
        },
    ]
}

/// Look up a product by id in the static listing.
pub fn find(id: &str) -> Option<Product> {
    listing().into_iter().find(|p| p.id == id)
}
