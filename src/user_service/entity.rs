//! Record trait implementation for the User domain type.
//!
//! This module contains the [`Record`] trait implementation
//! that enables [`User`] to be held by the generic [`crate::framework::RecordStore`].

use super::UserError;
use crate::framework::Record;
use crate::model::User;

impl Record for User {
    const KIND: &'static str = "User";
    type Error = UserError;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    /// Requires non-empty `id`, `name` and `email`.
    fn validate(&self) -> Result<(), UserError> {
        if self.id.is_empty() || self.name.is_empty() || self.email.is_empty() {
            return Err(UserError::MissingFields);
        }
        Ok(())
    }
}
