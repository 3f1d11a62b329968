//! Error types for service startup.
//!
//! Request handlers are infallible; everything here surfaces before the
//! listener starts accepting connections.

use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// HOST/PORT do not form a socket address.
    #[error("invalid bind address: {0}")]
    InvalidAddress(#[source] std::net::AddrParseError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
