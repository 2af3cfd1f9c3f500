//! Token signer - the main public API for Signet.
//!
//! [`TokenSigner`] builds the layout selected in [`SignetConfig`] and
//! dispatches `sign`/`verify` to it. Both layouts also implement [`Signer`]
//! directly for callers that do not need configuration-driven selection.

use crate::clock::{Clock, SystemClock};
use crate::config::{SignetConfig, TokenLayout};
use crate::token::{generic::GenericSigner, timed::TimedSigner};
use crate::SignetError;
use std::sync::Arc;
use tracing::debug;

/// Sign messages into tokens and verify tokens back into messages.
///
/// Implementations are immutable after construction and safe to share
/// across threads.
pub trait Signer: Send + Sync {
    /// Produce a token for `message`. Never fails.
    fn sign(&self, message: &str) -> String;

    /// Verify a token and return the original message.
    ///
    /// # Errors
    /// - `InvalidFormat` - Token is structurally malformed
    /// - `InvalidSignature` - Token was altered or signed with another key
    /// - `InvalidTimestamp` - Expiry segment is not an integer
    /// - `Expired` - Expiry window has elapsed
    fn verify(&self, token: &str) -> Result<String, SignetError>;
}

impl<S: Signer + ?Sized> Signer for Arc<S> {
    fn sign(&self, message: &str) -> String {
        (**self).sign(message)
    }

    fn verify(&self, token: &str) -> Result<String, SignetError> {
        (**self).verify(token)
    }
}

impl<S: Signer + ?Sized> Signer for Box<S> {
    fn sign(&self, message: &str) -> String {
        (**self).sign(message)
    }

    fn verify(&self, token: &str) -> Result<String, SignetError> {
        (**self).verify(token)
    }
}

/// Configuration-driven signer.
///
/// Create one instance per key and reuse it for all tokens.
#[derive(Debug, Clone)]
pub enum TokenSigner {
    /// `<message>[.<timestamp>].<signature>` layout.
    Embedded(TimedSigner),
    /// `<base64 message>.<base64 signature>` layout.
    Generic(GenericSigner),
}

impl TokenSigner {
    /// Create a signer from configuration.
    ///
    /// Uses the system clock for expiry.
    ///
    /// # Errors
    /// Returns `ConfigError` if configuration validation fails.
    pub fn new(config: SignetConfig) -> Result<Self, SignetError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a signer with a custom clock (for testing).
    #[cfg(any(test, feature = "test-seams"))]
    pub fn new_with_clock(
        config: SignetConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, SignetError> {
        Self::with_clock(config, clock)
    }

    fn with_clock(config: SignetConfig, clock: Arc<dyn Clock>) -> Result<Self, SignetError> {
        config.validate()?;

        debug!(
            layout = ?config.layout,
            hash = %config.hash,
            expiry_secs = config.effective_expiry().map(|d| d.num_seconds()),
            transport_encoding = config.transport_encoding,
            "signer configured"
        );

        Ok(match config.layout {
            TokenLayout::Embedded => TokenSigner::Embedded(TimedSigner::from_config(&config, clock)),
            TokenLayout::Generic => {
                TokenSigner::Generic(GenericSigner::new(config.secret_key, config.hash))
            }
        })
    }

    /// The layout this signer produces.
    pub fn layout(&self) -> TokenLayout {
        match self {
            TokenSigner::Embedded(_) => TokenLayout::Embedded,
            TokenSigner::Generic(_) => TokenLayout::Generic,
        }
    }
}

impl Signer for TokenSigner {
    fn sign(&self, message: &str) -> String {
        match self {
            TokenSigner::Embedded(signer) => signer.sign(message),
            TokenSigner::Generic(signer) => signer.sign(message),
        }
    }

    fn verify(&self, token: &str) -> Result<String, SignetError> {
        match self {
            TokenSigner::Embedded(signer) => signer.verify(token),
            TokenSigner::Generic(signer) => signer.verify(token),
        }
    }
}
