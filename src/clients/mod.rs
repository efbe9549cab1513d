//! Outbound clients for talking to sibling services.
//!
//! Each client implements [`RecordLookup`](crate::framework::RecordLookup), so
//! the code that depends on it never sees the transport.

pub mod user_client;

pub use user_client::*;
