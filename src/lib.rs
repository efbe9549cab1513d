//! # User & Order Services
//!
//! > **Two small in-memory CRUD services over HTTP.**
//!
//! The user service owns user records. The order service owns order records and,
//! before accepting a new order, asks the user service whether the referenced user exists.
//! Nothing is persisted: each process starts from a fixed seed and forgets everything on exit.
//!
//! ## Core Concepts
//!
//! ### Generics: one store, two resources
//! You'll see `RecordStore<T: Record>` everywhere. Users and orders are stored, read,
//! replaced and removed the same way, so that logic is written once.
//! Each resource only describes its identifier and its required fields.
//!
//! ### Cross-service validation behind a trait
//! The order service never talks to `reqwest` directly. It holds an
//! `Arc<dyn RecordLookup<User>>`, which is an HTTP [`UserClient`](clients::UserClient)
//! in production and a [`MockLookup`](framework::mock::MockLookup) or a plain
//! `RecordStore<User>` in tests.
//!
//! ## Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each service defines its own error type (`UserError`, `OrderError`) that maps itself to
//! an HTTP status and a JSON `{"error": ...}` body. The `#[from]` attribute turns a
//! [`LookupError`](framework::LookupError) into an `OrderError` at the `?`.
//!
//! ### 2. Concurrency Model
//! axum serves each connection on its own Tokio task. All of them share one store per
//! service, guarded by a single `RwLock`: reads run in parallel, writes are exclusive,
//! and no lock is held across an `.await`.
//!
//! ### 3. Observability
//! We use `tracing` everywhere with structured fields.
//! See the [`lifecycle::tracing`] module for details.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: The generic store and the lookup capability.
//! - **Key items**: [`Record`](framework::Record), [`RecordStore`](framework::RecordStore),
//!   [`RecordLookup`](framework::RecordLookup).
//!
//! ### 2. The Resources ([`model`], [`user_service`], [`order_service`])
//! - **Role**: Data types, their `Record` implementations, error types and seed data.
//!
//! ### 3. The Transport ([`http`], [`clients`])
//! - **Role**: Routes and CORS on the way in, the user lookup on the way out.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: Reads the environment, seeds the stores, binds and serves until shutdown.
//! - **Key items**: [`UserServiceApp`](lifecycle::UserServiceApp),
//!   [`OrderServiceApp`](lifecycle::OrderServiceApp).
//!
//! ## Quick Start
//!
//! ```bash
//! # Terminal 1
//! cargo run --bin user-service
//!
//! # Terminal 2
//! cargo run --bin order-service
//!
//! curl -X POST localhost:8081/orders \
//!   -d '{"id":"3","user_id":"1","product":"Desk","quantity":1,"total":250.0}'
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_service;
pub mod user_service;
