use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::clients::UserClient;
use crate::config::{ConfigError, OrderServiceConfig, UserServiceConfig};
use crate::framework::{RecordLookup, RecordStore};
use crate::http::orders::OrderState;
use crate::model::{Order, User};
use crate::{http, order_service, user_service};

/// Errors that stop a service from starting or running.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("Service task failed: {0}")]
    Task(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

// =============================================================================
// USER SERVICE
// =============================================================================

/// The user service: a seeded user store behind the user routes.
///
/// # Example
///
/// ```ignore
/// let config = UserServiceConfig::from_env()?;
/// UserServiceApp::new().serve(&config).await?;
/// ```
pub struct UserServiceApp {
    /// The store handed to every handler. Clones share state.
    pub users: RecordStore<User>,
}

impl Default for UserServiceApp {
    fn default() -> Self {
        Self::new()
    }
}

impl UserServiceApp {
    /// Creates the service with its seed users in place.
    pub fn new() -> Self {
        Self {
            users: user_service::new(),
        }
    }

    pub fn router(&self) -> Router {
        http::users::router(self.users.clone())
    }

    /// Binds the configured address and serves until Ctrl+C or SIGTERM.
    pub async fn serve(self, config: &UserServiceConfig) -> Result<(), BootstrapError> {
        let listener = bind(config.socket_addr()).await?;
        run(listener, self.router(), user_service::SERVICE_NAME, shutdown_signal()).await
    }

    /// Binds `addr` and serves on a background task.
    pub async fn spawn(self, addr: SocketAddr) -> Result<ServiceHandle, BootstrapError> {
        spawn(addr, self.router(), user_service::SERVICE_NAME).await
    }
}

// =============================================================================
// ORDER SERVICE
// =============================================================================

/// The order service: a seeded order store plus the lookup used to validate users.
pub struct OrderServiceApp {
    pub orders: RecordStore<Order>,
    users: Arc<dyn RecordLookup<User>>,
}

impl OrderServiceApp {
    /// Creates the service with its seed orders, validating users through `users`.
    pub fn new(users: Arc<dyn RecordLookup<User>>) -> Self {
        Self {
            orders: order_service::new(),
            users,
        }
    }

    /// Creates the service with an HTTP [`UserClient`] pointed at the configured user service.
    pub fn from_config(config: &OrderServiceConfig) -> Self {
        info!(url = %config.user_service_url, "Validating users against user service");
        Self::new(Arc::new(UserClient::new(config.user_service_url.clone())))
    }

    pub fn router(&self) -> Router {
        http::orders::router(OrderState::new(self.orders.clone(), self.users.clone()))
    }

    /// Binds the configured address and serves until Ctrl+C or SIGTERM.
    pub async fn serve(self, config: &OrderServiceConfig) -> Result<(), BootstrapError> {
        let listener = bind(config.socket_addr()).await?;
        run(listener, self.router(), order_service::SERVICE_NAME, shutdown_signal()).await
    }

    /// Binds `addr` and serves on a background task.
    pub async fn spawn(self, addr: SocketAddr) -> Result<ServiceHandle, BootstrapError> {
        spawn(addr, self.router(), order_service::SERVICE_NAME).await
    }
}

// =============================================================================
// RUNNING
// =============================================================================

/// A service running on a background task.
///
/// Dropping the handle also triggers a graceful shutdown, without waiting for it.
pub struct ServiceHandle {
    local_addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<Result<(), BootstrapError>>,
}

impl ServiceHandle {
    /// The address actually bound (resolves port `0`).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stops accepting connections, lets in-flight requests finish and waits for the task.
    pub async fn shutdown(mut self) -> Result<(), BootstrapError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }

        match self.task.await {
            Ok(result) => result,
            Err(e) => {
                error!("Service task failed: {:?}", e);
                Err(BootstrapError::Task(e.to_string()))
            }
        }
    }
}

async fn bind(addr: SocketAddr) -> Result<TcpListener, BootstrapError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| BootstrapError::Bind { addr, source })
}

async fn run(
    listener: TcpListener,
    router: Router,
    service: &'static str,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), BootstrapError> {
    let addr = listener.local_addr().map_err(BootstrapError::Serve)?;
    info!(service, %addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(BootstrapError::Serve)?;

    info!(service, "Shutdown complete");
    Ok(())
}

async fn spawn(
    addr: SocketAddr,
    router: Router,
    service: &'static str,
) -> Result<ServiceHandle, BootstrapError> {
    let listener = bind(addr).await?;
    let local_addr = listener.local_addr().map_err(BootstrapError::Serve)?;
    let (tx, rx) = oneshot::channel::<()>();

    let task = tokio::spawn(run(listener, router, service, async move {
        let _ = rx.await;
    }));

    Ok(ServiceHandle {
        local_addr,
        shutdown: Some(tx),
        task,
    })
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
