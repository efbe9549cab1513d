//! User-specific resource logic and record implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::RecordStore;
use crate::model::User;

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "user-service";

/// Users present at startup.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new("1", "John Doe", "john@example.com"),
        User::new("2", "Jane Smith", "jane@example.com"),
    ]
}

/// Creates the user store, seeded with [`seed_users`].
pub fn new() -> RecordStore<User> {
    let store = RecordStore::new();
    store.seed(seed_users());
    store
}
