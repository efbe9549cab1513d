//! Process lifecycle: bootstrapping, serving, shutdown and log setup.

pub mod service_app;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use service_app::*;
