//! Error types for the weave engine.
//!
//! Setup-time operations return `WeaveResult<T>`. The per-frame numerical
//! core never fails; degenerate numerics resolve to zero contributions.

use thiserror::Error;

/// Unified error type for the weave engine.
#[derive(Debug, Error)]
pub enum WeaveError {
    /// Grid dimensions or spacing are unusable.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No integrator is known by this name.
    #[error("Unknown integrator: '{0}' (expected 'rk4' or 'euler')")]
    UnknownIntegrator(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, WeaveError>`.
pub type WeaveResult<T> = Result<T, WeaveError>;
