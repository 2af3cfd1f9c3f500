//! Signet configuration.

use crate::crypto::mac::HashAlgorithm;
use crate::SignetError;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pre-shared HMAC key.
///
/// The bytes are never printed; `Debug` only reports the length.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Borrow the key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(<redacted, {} bytes>)", self.0.len())
    }
}

impl From<&str> for SecretKey {
    fn from(key: &str) -> Self {
        Self::new(key.as_bytes())
    }
}

impl From<String> for SecretKey {
    fn from(key: String) -> Self {
        Self::new(key.into_bytes())
    }
}

impl From<&[u8]> for SecretKey {
    fn from(key: &[u8]) -> Self {
        Self::new(key)
    }
}

impl From<Vec<u8>> for SecretKey {
    fn from(key: Vec<u8>) -> Self {
        Self(key)
    }
}

/// Wire layout of produced tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenLayout {
    /// `<message>[.<timestamp>].<signature>`, optionally base64-wrapped as a whole.
    #[default]
    Embedded,
    /// `<base64 message>.<base64 signature>`, no expiry.
    Generic,
}

/// Configuration for building a [`crate::TokenSigner`].
///
/// Defaults mirror the most common deployment: HMAC-SHA1, whole-token
/// base64, no expiry, embedded layout.
#[derive(Debug, Clone)]
pub struct SignetConfig {
    /// Pre-shared secret key.
    /// SECURITY: load this from a secret store, never from the token's audience.
    pub secret_key: SecretKey,

    /// Hash primitive used by HMAC.
    pub hash: HashAlgorithm,

    /// Validity window of signed tokens.
    /// `None` or zero disables expiry; negative values produce already-expired tokens.
    pub expiry: Option<Duration>,

    /// Base64-encode tokens for transit in URLs and headers.
    pub transport_encoding: bool,

    /// Token wire layout.
    pub layout: TokenLayout,
}

impl SignetConfig {
    /// Create a configuration with defaults for everything but the key.
    pub fn new(secret_key: impl Into<SecretKey>) -> Self {
        Self {
            secret_key: secret_key.into(),
            hash: HashAlgorithm::default(),
            expiry: None,
            transport_encoding: true,
            layout: TokenLayout::default(),
        }
    }

    /// Set the hash primitive.
    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }

    /// Set the validity window.
    pub fn with_expiry(mut self, expiry: Duration) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Enable or disable base64 transport encoding.
    pub fn with_transport_encoding(mut self, enabled: bool) -> Self {
        self.transport_encoding = enabled;
        self
    }

    /// Set the token layout.
    pub fn with_layout(mut self, layout: TokenLayout) -> Self {
        self.layout = layout;
        self
    }

    /// The expiry window if it is in effect (present and non-zero).
    pub fn effective_expiry(&self) -> Option<Duration> {
        self.expiry.filter(|d| !d.is_zero())
    }

    /// Validate configuration for obvious errors.
    pub fn validate(&self) -> Result<(), SignetError> {
        if self.secret_key.is_empty() {
            return Err(SignetError::ConfigError(
                "secret_key cannot be empty".to_string(),
            ));
        }
        if self.layout == TokenLayout::Generic {
            if self.effective_expiry().is_some() {
                return Err(SignetError::ConfigError(
                    "generic layout does not support expiry".to_string(),
                ));
            }
            if !self.transport_encoding {
                return Err(SignetError::ConfigError(
                    "generic layout requires transport encoding".to_string(),
                ));
            }
        }
        Ok(())
    }
}
