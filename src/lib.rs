//! # Signet
//!
//! **Tamper-evident, optionally expiring string tokens signed with HMAC.**
//!
//! Signet combines a message with a keyed MAC so a recipient holding the
//! same secret can later prove the message was not altered and, optionally,
//! that it has not expired.
//!
//! ## Features
//!
//! - **HMAC over MD5, SHA-1, SHA-256 or SHA-512** - selected per signer
//! - **Constant-time verification** - signature comparison does not leak timing
//! - **Optional expiry** - a Unix timestamp is signed into the token
//! - **Text-safe tokens** - base64 transport encoding for URLs and headers
//! - **Typed errors** - format, signature, timestamp and expiry failures are distinct
//!
//! ## Quickstart
//!
//! ```
//! use signet::{Signer, SignetConfig, TokenSigner};
//!
//! fn main() -> Result<(), signet::SignetError> {
//!     let config = SignetConfig::new("my-secret-key")
//!         .with_hash(signet::HashAlgorithm::Sha256)
//!         .with_expiry(chrono::Duration::hours(1));
//!
//!     let signer = TokenSigner::new(config)?;
//!     let token = signer.sign("user:42");
//!
//!     assert_eq!(signer.verify(&token)?, "user:42");
//!     Ok(())
//! }
//! ```
//!
//! ## Token Layouts
//!
//! - **Embedded** (default) - `<message>[.<timestamp>].<signature>`, the
//!   whole token base64-encoded. Supports expiry.
//! - **Generic** - `<base64 message>.<base64 signature>`. No expiry.
//!
//! ## Threat Model
//!
//! Signet protects against:
//! - **Tampering** - any change to message, timestamp or signature is rejected
//! - **Stale tokens** - expired tokens are rejected when expiry is configured
//! - **Timing attacks** - digests are compared in constant time
//!
//! Signet does **not** encrypt: token contents are readable by anyone who
//! holds the token.

#![deny(warnings)]
#![deny(missing_docs)]

// Core modules
pub mod clock;
pub mod config;
pub mod errors;

// Crypto layer
pub mod crypto;

// Token layouts
pub mod token;

// Signer (main public API)
pub mod signer;

// Test double
#[cfg(any(test, feature = "test-seams"))]
pub mod mock;

// Re-exports for public API
pub use clock::{Clock, SystemClock};
pub use config::{SecretKey, SignetConfig, TokenLayout};
pub use crypto::mac::{compute_signature, HashAlgorithm};
pub use errors::SignetError;
pub use signer::{Signer, TokenSigner};
pub use token::{generic::GenericSigner, timed::TimedSigner};

#[cfg(any(test, feature = "test-seams"))]
pub use clock::MockClock;
#[cfg(any(test, feature = "test-seams"))]
pub use mock::MockSigner;
