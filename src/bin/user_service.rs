//! User service binary.
//!
//! ```bash
//! USER_SERVICE_PORT=8080 cargo run --bin user-service
//! ```

use user_order_services::config::UserServiceConfig;
use user_order_services::lifecycle::{setup_tracing, BootstrapError, UserServiceApp};

#[tokio::main]
async fn main() -> Result<(), BootstrapError> {
    setup_tracing();

    let config = UserServiceConfig::from_env().inspect_err(|e| tracing::error!("{e}"))?;
    UserServiceApp::new()
        .serve(&config)
        .await
        .inspect_err(|e| tracing::error!("{e}"))
}
