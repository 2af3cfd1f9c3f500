//! Embedded-layout signer with optional expiry.
//!
//! Token format (before optional whole-token base64):
//! ```text
//! <message>[.<unix-timestamp>].<raw signature bytes>
//! ```
//!
//! Without transport encoding the raw digest cannot be carried in a UTF-8
//! string, so the signature segment is base64 encoded on its own:
//! ```text
//! <message>[.<unix-timestamp>].<base64 signature>
//! ```
//!
//! Messages may contain the delimiter; parsing always takes the signature
//! (and timestamp) from the right.

use crate::clock::{Clock, SystemClock};
use crate::config::{SecretKey, SignetConfig};
use crate::crypto::{
    compare::signatures_match,
    encoding,
    expiry::{append_expiry, expires_at, strip_and_check_expiry, DELIMITER},
    mac::{compute_signature, HashAlgorithm},
};
use crate::signer::Signer;
use crate::SignetError;
use chrono::Duration;
use std::sync::Arc;
use tracing::debug;

/// Signer producing `<message>[.<timestamp>].<signature>` tokens.
#[derive(Clone)]
pub struct TimedSigner {
    key: SecretKey,
    hash: HashAlgorithm,
    expiry: Option<Duration>,
    transport_encoding: bool,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TimedSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedSigner")
            .field("key", &self.key)
            .field("hash", &self.hash)
            .field("expiry", &self.expiry)
            .field("transport_encoding", &self.transport_encoding)
            .finish_non_exhaustive()
    }
}

impl TimedSigner {
    /// Create a signer with HMAC-SHA1, whole-token base64 and no expiry.
    pub fn new(key: impl Into<SecretKey>) -> Self {
        Self {
            key: key.into(),
            hash: HashAlgorithm::Sha1,
            expiry: None,
            transport_encoding: true,
            clock: Arc::new(SystemClock),
        }
    }

    pub(crate) fn from_config(config: &SignetConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            key: config.secret_key.clone(),
            hash: config.hash,
            expiry: config.effective_expiry(),
            transport_encoding: config.transport_encoding,
            clock,
        }
    }

    /// Use a different hash primitive.
    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }

    /// Embed an expiry timestamp `now + duration`. Zero disables expiry.
    pub fn with_expiry(mut self, duration: Duration) -> Self {
        self.expiry = Some(duration).filter(|d| !d.is_zero());
        self
    }

    /// Enable or disable whole-token base64.
    pub fn with_transport_encoding(mut self, enabled: bool) -> Self {
        self.transport_encoding = enabled;
        self
    }

    /// Replace the clock (for testing).
    #[cfg(any(test, feature = "test-seams"))]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The configured hash primitive.
    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    fn compute_signature(&self, message: &[u8]) -> Vec<u8> {
        compute_signature(message, self.key.as_bytes(), self.hash)
    }

    fn check_signature(&self, message: &[u8], signature: &[u8]) -> Result<(), SignetError> {
        let expected = self.compute_signature(message);
        if signatures_match(&expected, signature) {
            Ok(())
        } else {
            Err(SignetError::InvalidSignature)
        }
    }

    /// Decode the whole payload, then peel the fixed-length raw signature off the end.
    fn open_encoded(&self, token: &str) -> Result<String, SignetError> {
        let payload = encoding::decode(token).ok_or(SignetError::InvalidFormat)?;

        if !payload.contains(&(DELIMITER as u8)) {
            return Err(SignetError::InvalidFormat);
        }

        // The raw digest may itself contain the delimiter byte, so locate
        // the split by length rather than by searching.
        let split_at = payload
            .len()
            .checked_sub(self.hash.output_len() + 1)
            .filter(|&at| payload[at] == DELIMITER as u8)
            .ok_or(SignetError::InvalidSignature)?;

        let (message, rest) = payload.split_at(split_at);
        self.check_signature(message, &rest[1..])?;

        String::from_utf8(message.to_vec()).map_err(|_| SignetError::InvalidFormat)
    }

    fn open_plain(&self, token: &str) -> Result<String, SignetError> {
        let (message, signature) = token
            .rsplit_once(DELIMITER)
            .ok_or(SignetError::InvalidFormat)?;

        let signature = encoding::decode(signature).ok_or(SignetError::InvalidSignature)?;
        self.check_signature(message.as_bytes(), &signature)?;

        Ok(message.to_string())
    }

    fn open(&self, token: &str) -> Result<String, SignetError> {
        let message = if self.transport_encoding {
            self.open_encoded(token)?
        } else {
            self.open_plain(token)?
        };

        match self.expiry {
            Some(_) => strip_and_check_expiry(&message, self.clock.as_ref()).map(str::to_string),
            None => Ok(message),
        }
    }
}

impl Signer for TimedSigner {
    fn sign(&self, message: &str) -> String {
        let message = match self.expiry {
            Some(duration) => append_expiry(message, expires_at(self.clock.as_ref(), duration)),
            None => message.to_string(),
        };

        let signature = self.compute_signature(message.as_bytes());

        if self.transport_encoding {
            let mut payload = Vec::with_capacity(message.len() + 1 + signature.len());
            payload.extend_from_slice(message.as_bytes());
            payload.push(DELIMITER as u8);
            payload.extend_from_slice(&signature);
            encoding::encode(&payload)
        } else {
            format!("{}{}{}", message, DELIMITER, encoding::encode(&signature))
        }
    }

    fn verify(&self, token: &str) -> Result<String, SignetError> {
        self.open(token).map_err(|e| {
            debug!(layout = "embedded", hash = %self.hash, reason = e.kind(), "token rejected");
            e
        })
    }
}
