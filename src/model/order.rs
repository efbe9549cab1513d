use serde::{Deserialize, Serialize};

/// Represents a customer order.
///
/// # Record Store
/// This struct implements the [`Record`](crate::framework::Record) trait,
/// allowing it to be held by a [`RecordStore`](crate::framework::RecordStore).
///
/// `user_id` refers to a [`User`](crate::model::User) held by the user service.
/// It is checked once, when the order is created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub product: String,
    pub quantity: u32,
    pub total: f64,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Caller-supplied identifier, unique within the store
    /// * `user_id` - ID of the user placing the order
    /// * `product` - Name of the product being ordered
    /// * `quantity` - Quantity ordered
    /// * `total` - Total price for the order
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        product: impl Into<String>,
        quantity: u32,
        total: f64,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            product: product.into(),
            quantity,
            total,
        }
    }
}
