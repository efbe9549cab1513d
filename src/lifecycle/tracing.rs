//! # Observability & Tracing
//!
//! This module provides the tracing setup shared by both service binaries.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Each request gets a span from `tower_http::trace::TraceLayer`, and every handler is
//! `#[instrument]`ed, so store log lines appear nested under the request that caused them.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`).
//! Store logs carry an `entity_type` field instead, which says more than a module path.
//!
//! - **Configurable log levels** via `RUST_LOG` (defaults to `info` when unset)
//! - **Compact format** optimized for development
//!
//! ## What Gets Traced
//!
//! - **Bootstrap**: Seeding, listen address, shutdown
//! - **Store Operations**: Create, Update and Delete at `info`, Get at `debug`
//! - **Rejections**: Every 4xx answer at `warn`, with the error message
//! - **Cross-service Calls**: The user lookup made while creating an order
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! cargo run --bin user-service
//!
//! # Show reads and outbound lookups
//! RUST_LOG=debug cargo run --bin order-service
//!
//! # Only this crate's store, at debug
//! RUST_LOG=user_order_services::framework=debug cargo run --bin user-service
//! ```
//!
//! ## Workflow Trace Example
//!
//! Creating an order with `RUST_LOG=debug`:
//!
//! ```text
//! DEBUG request{method=POST uri=/orders}:create_order: Validating user user_id="1"
//! DEBUG request{method=POST uri=/orders}:create_order:exists{id="1"}: Sending request url=http://localhost:8080/users/1
//! INFO request{method=POST uri=/orders}:create_order: Created entity_type="Order" id=10 size=3
//! ```
//!
//! And for an unknown user:
//!
//! ```text
//! WARN request{method=POST uri=/orders}:create_order: Rejected entity_type="Order" error=User does not exist status=400
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type replaces module paths
        .compact()
        .init();
}
