//! Authentication error types.

use thiserror::Error;

use cotton_row_core::EmailError;

/// Errors that can occur while issuing or checking tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token is past its `exp` claim.
    #[error("token expired")]
    Expired,

    /// Signature, issuer, or shape check failed.
    #[error("invalid token")]
    Invalid,

    /// Signing failed.
    #[error("token encoding failed: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),
}

/// Errors that can occur during authentication operations.
///
/// The `Display` text of the validation variants is shown to clients as-is.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required field was absent or empty.
    #[error("Please provide {0}")]
    MissingFields(&'static str),

    /// Invalid email format.
    #[error("Please provide a valid email")]
    InvalidEmail(#[from] EmailError),

    /// Password shorter than the minimum.
    #[error("Password must be at least {min} characters long")]
    WeakPassword { min: usize },

    /// Token operation failed.
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl AuthError {
    /// Whether this error is caused by client input rather than the server.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingFields(_) | Self::InvalidEmail(_) | Self::WeakPassword { .. }
        )
    }
}
