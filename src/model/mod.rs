//! Pure data structures (DTOs) implementing the [`Record`](crate::framework::Record) trait.
//!
//! Both types decode with `#[serde(default)]`: a field missing from a request
//! body becomes its empty value instead of a decode error.

pub mod order;
pub mod user;

pub use order::*;
pub use user::*;
