//! Error types for the user service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found")]
    NotFound(String),

    /// One of the required fields is empty.
    #[error("ID, Name, and Email are required")]
    MissingFields,

    /// The request body could not be decoded as a user.
    #[error("{0}")]
    InvalidBody(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingFields | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        };

        tracing::warn!(entity_type = "User", error = %self, status = status.as_u16(), "Rejected");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
