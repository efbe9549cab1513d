//! Generic record framework shared by both services.
//!
//! This module provides the building blocks for storing resources in memory
//! and for checking that a referenced resource exists.
//!
//! # Main Components
//!
//! - [`Record`] - Trait that resource types implement to be held in a store
//! - [`RecordStore`] - Lock-guarded in-memory store, one per resource type
//! - [`RecordLookup`] - Existence check used by the order service to validate users
//! - [`LookupError`] - Transient lookup failures
//!
//! # Testing
//!
//! See [`mock`] module for a [`RecordLookup`] test double.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
