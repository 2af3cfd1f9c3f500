//! Pass-through signer for consumers' tests.

use crate::signer::Signer;
use crate::SignetError;

/// Signer that performs no cryptography.
///
/// `sign` returns the message unchanged; `verify` returns the token
/// unchanged, or `InvalidSignature` when `verify_fail` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSigner {
    /// Force every `verify` call to fail with `InvalidSignature`.
    pub verify_fail: bool,
}

impl MockSigner {
    /// A mock whose verification always fails.
    pub fn failing() -> Self {
        Self { verify_fail: true }
    }
}

impl Signer for MockSigner {
    fn sign(&self, message: &str) -> String {
        message.to_string()
    }

    fn verify(&self, token: &str) -> Result<String, SignetError> {
        if self.verify_fail {
            return Err(SignetError::InvalidSignature);
        }
        Ok(token.to_string())
    }
}
