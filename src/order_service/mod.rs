//! Order-specific resource logic and record implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::RecordStore;
use crate::model::Order;

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "order-service";

/// Orders present at startup. They reference the seeded users and skip validation.
pub fn seed_orders() -> Vec<Order> {
    vec![
        Order::new("1", "1", "Laptop", 1, 999.99),
        Order::new("2", "2", "Mouse", 2, 51.0),
    ]
}

/// Creates the order store, seeded with [`seed_orders`].
pub fn new() -> RecordStore<Order> {
    let store = RecordStore::new();
    store.seed(seed_orders());
    store
}
