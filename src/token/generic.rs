//! Generic-layout signer: each field base64-encoded on its own.
//!
//! ```text
//! <base64 message>.<base64 signature>
//! ```

use crate::config::SecretKey;
use crate::crypto::{
    compare::signatures_match,
    encoding,
    expiry::DELIMITER,
    mac::{compute_signature, HashAlgorithm},
};
use crate::signer::Signer;
use crate::SignetError;
use tracing::debug;

/// Signer producing `<base64 message>.<base64 signature>` tokens.
///
/// A message that fails to decode is reported as `InvalidSignature`, the
/// same as a digest mismatch, so existing callers keep their error handling.
#[derive(Debug, Clone)]
pub struct GenericSigner {
    key: SecretKey,
    hash: HashAlgorithm,
}

impl GenericSigner {
    /// Create a signer with an explicit hash primitive.
    pub fn new(key: impl Into<SecretKey>, hash: HashAlgorithm) -> Self {
        Self {
            key: key.into(),
            hash,
        }
    }

    /// HMAC-MD5 signer.
    pub fn md5(key: impl Into<SecretKey>) -> Self {
        Self::new(key, HashAlgorithm::Md5)
    }

    /// HMAC-SHA1 signer.
    pub fn sha1(key: impl Into<SecretKey>) -> Self {
        Self::new(key, HashAlgorithm::Sha1)
    }

    /// HMAC-SHA256 signer.
    pub fn sha256(key: impl Into<SecretKey>) -> Self {
        Self::new(key, HashAlgorithm::Sha256)
    }

    /// HMAC-SHA512 signer.
    pub fn sha512(key: impl Into<SecretKey>) -> Self {
        Self::new(key, HashAlgorithm::Sha512)
    }

    /// The configured hash primitive.
    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    fn encoded_signature(&self, message: &[u8]) -> String {
        encoding::encode(&compute_signature(message, self.key.as_bytes(), self.hash))
    }

    fn open(&self, token: &str) -> Result<String, SignetError> {
        let mut parts = token.split(DELIMITER);
        let (Some(encoded_message), Some(encoded_signature), None) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(SignetError::InvalidFormat);
        };

        let message = encoding::decode(encoded_message).ok_or(SignetError::InvalidSignature)?;

        let expected = self.encoded_signature(&message);
        if !signatures_match(expected.as_bytes(), encoded_signature.as_bytes()) {
            return Err(SignetError::InvalidSignature);
        }

        String::from_utf8(message).map_err(|_| SignetError::InvalidSignature)
    }
}

impl Signer for GenericSigner {
    fn sign(&self, message: &str) -> String {
        format!(
            "{}{}{}",
            encoding::encode(message.as_bytes()),
            DELIMITER,
            self.encoded_signature(message.as_bytes())
        )
    }

    fn verify(&self, token: &str) -> Result<String, SignetError> {
        self.open(token).map_err(|e| {
            debug!(layout = "generic", hash = %self.hash, reason = e.kind(), "token rejected");
            e
        })
    }
}
