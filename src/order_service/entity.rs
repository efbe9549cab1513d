//! Record trait implementation for the Order domain type.

use super::OrderError;
use crate::framework::Record;
use crate::model::Order;

impl Record for Order {
    const KIND: &'static str = "Order";
    type Error = OrderError;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    /// Requires non-empty `id`, `user_id` and `product`. Quantity and total are not checked.
    fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_empty() || self.user_id.is_empty() || self.product.is_empty() {
            return Err(OrderError::MissingFields);
        }
        Ok(())
    }
}
