//! Service configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first, if present.
//!
//! # Environment Variables
//!
//! ## User service
//! - `USER_SERVICE_HOST` - Bind address (default: 0.0.0.0)
//! - `USER_SERVICE_PORT` - Listen port (default: 8080)
//!
//! ## Order service
//! - `ORDER_SERVICE_HOST` - Bind address (default: 0.0.0.0)
//! - `ORDER_SERVICE_PORT` - Listen port (default: 8081)
//! - `USER_SERVICE_URL` - Base URL of the user service (default: http://localhost:8080)

use std::net::{IpAddr, SocketAddr};

use reqwest::Url;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_USER_SERVICE_PORT: &str = "8080";
const DEFAULT_ORDER_SERVICE_PORT: &str = "8081";
const DEFAULT_USER_SERVICE_URL: &str = "http://localhost:8080";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// User service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct UserServiceConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

/// Order service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderServiceConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Where the user service can be reached for user validation
    pub user_service_url: Url,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_source(env_var)
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_source(source: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: parse_host(&source, "USER_SERVICE_HOST")?,
            port: parse_port(&source, "USER_SERVICE_PORT", DEFAULT_USER_SERVICE_PORT)?,
        })
    }

    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl OrderServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_source(env_var)
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_source(source: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let user_service_url = get_or_default(&source, "USER_SERVICE_URL", DEFAULT_USER_SERVICE_URL);
        let user_service_url = Url::parse(&user_service_url)
            .map_err(|e| ConfigError::InvalidEnvVar("USER_SERVICE_URL".to_string(), e.to_string()))?;

        Ok(Self {
            host: parse_host(&source, "ORDER_SERVICE_HOST")?,
            port: parse_port(&source, "ORDER_SERVICE_PORT", DEFAULT_ORDER_SERVICE_PORT)?,
            user_service_url,
        })
    }

    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn get_or_default(source: &impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    source(name).unwrap_or_else(|| default.to_string())
}

fn parse_host(source: &impl Fn(&str) -> Option<String>, name: &str) -> Result<IpAddr, ConfigError> {
    get_or_default(source, name, DEFAULT_HOST)
        .parse::<IpAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string()))
}

fn parse_port(
    source: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: &str,
) -> Result<u16, ConfigError> {
    get_or_default(source, name, default)
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string()))
}
