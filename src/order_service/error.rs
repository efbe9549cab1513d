//! Error types for the order service.

use crate::framework::LookupError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found")]
    NotFound(String),

    /// One of the required fields is empty.
    #[error("ID, UserID, and Product are required")]
    MissingFields,

    /// The request body could not be decoded as an order.
    #[error("{0}")]
    InvalidBody(String),

    /// The user service answered that the referenced user is absent.
    #[error("User does not exist")]
    UserNotFound(String),

    /// The user service could not be asked.
    #[error("Failed to validate user: {0}")]
    UserLookup(#[from] LookupError),
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingFields
            | Self::InvalidBody(_)
            | Self::UserNotFound(_)
            | Self::UserLookup(_) => StatusCode::BAD_REQUEST,
        };

        tracing::warn!(entity_type = "Order", error = %self, status = status.as_u16(), "Rejected");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
