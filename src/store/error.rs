//! Outcomes of user store and portal operations.

use thiserror::Error;

/// Errors returned by the portal. The messages are shown to users as-is.
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("{0}")]
    MissingFields(&'static str),

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("{0}")]
    Conflict(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl PortalError {
    pub fn storage(err: anyhow::Error) -> Self {
        PortalError::Storage(format!("{err:#}"))
    }
}

/// Result type alias for portal operations.
pub type PortalResult<T> = Result<T, PortalError>;
