//! Core error types for the dashboard engine.
//!
//! Transport failures keep their [`ApiError`] classification so callers can
//! distinguish a fatal session expiry from a widget-local degrade.

use thiserror::Error;

pub use folioscope_api_client::ApiError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard engine.
#[derive(Error, Debug)]
pub enum Error {
    /// A backend fetch failed; carries the transport classification.
    #[error("Backend API error: {0}")]
    Api(#[from] ApiError),

    /// A holdings payload violated a store invariant.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}
