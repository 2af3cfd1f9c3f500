//! Signet error types.

use thiserror::Error;

/// Errors returned by signer construction and token verification.
///
/// Variants are compared by kind, so callers can branch on them directly
/// (e.g. re-authenticate on [`SignetError::Expired`], reject outright on
/// [`SignetError::InvalidSignature`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignetError {
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Token is structurally malformed (missing delimiter, bad transport encoding).
    #[error("invalid format")]
    InvalidFormat,

    /// Recomputed signature does not match the one carried by the token.
    #[error("invalid signature")]
    InvalidSignature,

    /// Expiry segment is present but is not an integer Unix timestamp.
    #[error("invalid timestamp")]
    InvalidTimestamp,

    /// Expiry timestamp is not after the current time.
    #[error("expired")]
    Expired,
}

impl SignetError {
    /// Short machine-readable name of the error kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SignetError::ConfigError(_) => "config",
            SignetError::InvalidFormat => "invalid_format",
            SignetError::InvalidSignature => "invalid_signature",
            SignetError::InvalidTimestamp => "invalid_timestamp",
            SignetError::Expired => "expired",
        }
    }
}
