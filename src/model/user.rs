use serde::{Deserialize, Serialize};

/// Represents a registered user in the system.
///
/// # Record Store
/// This struct implements the [`Record`](crate::framework::Record) trait,
/// allowing it to be held by a [`RecordStore`](crate::framework::RecordStore).
///
/// `name` and `email` are free text. Only their presence is checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Caller-supplied identifier, unique within the store
    /// * `name` - User's display name
    /// * `email` - User's email address
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}
