//! Order service binary.
//!
//! ```bash
//! USER_SERVICE_URL=http://localhost:8080 cargo run --bin order-service
//! ```

use user_order_services::config::OrderServiceConfig;
use user_order_services::lifecycle::{setup_tracing, BootstrapError, OrderServiceApp};

#[tokio::main]
async fn main() -> Result<(), BootstrapError> {
    setup_tracing();

    let config = OrderServiceConfig::from_env().inspect_err(|e| tracing::error!("{e}"))?;
    OrderServiceApp::from_config(&config)
        .serve(&config)
        .await
        .inspect_err(|e| tracing::error!("{e}"))
}
