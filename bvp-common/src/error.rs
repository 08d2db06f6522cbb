//! Common error types for BVP
//!
//! Platform-layer failures only: storage, filesystem, and configuration.
//! Estimation-pipeline failures have their own taxonomy in bvp-vs, and
//! HTTP-facing errors are mapped there too.

use thiserror::Error;

/// Common result type for BVP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across BVP services
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
