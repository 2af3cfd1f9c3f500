//! HMAC computation over a selectable hash primitive.

use crate::SignetError;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use std::fmt;
use std::str::FromStr;

/// Hash primitive combined with the secret key via HMAC.
///
/// MD5 and SHA-1 are kept for interoperability with existing tokens; new
/// deployments should prefer SHA-256 or SHA-512.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HashAlgorithm {
    /// HMAC-MD5 (16-byte digest).
    Md5,
    /// HMAC-SHA1 (20-byte digest).
    #[default]
    Sha1,
    /// HMAC-SHA256 (32-byte digest).
    Sha256,
    /// HMAC-SHA512 (64-byte digest).
    Sha512,
}

impl HashAlgorithm {
    /// Digest length in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Canonical name, as used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA1",
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha512 => "SHA512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = SignetError;

    /// Parse a hash name, ignoring case and an optional dash (`sha-256`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "").to_ascii_uppercase();
        match normalized.as_str() {
            "MD5" => Ok(HashAlgorithm::Md5),
            "SHA1" => Ok(HashAlgorithm::Sha1),
            "SHA256" => Ok(HashAlgorithm::Sha256),
            "SHA512" => Ok(HashAlgorithm::Sha512),
            _ => Err(SignetError::ConfigError(format!(
                "Unsupported hash algorithm: {} (expected MD5, SHA1, SHA256 or SHA512)",
                s
            ))),
        }
    }
}

/// Compute `HMAC(key, hash, message)` and return the raw digest bytes.
///
/// Pure and deterministic; the digest length is `hash.output_len()`.
pub fn compute_signature(message: &[u8], key: &[u8], hash: HashAlgorithm) -> Vec<u8> {
    match hash {
        HashAlgorithm::Md5 => hmac_digest::<Hmac<Md5>>(message, key),
        HashAlgorithm::Sha1 => hmac_digest::<Hmac<Sha1>>(message, key),
        HashAlgorithm::Sha256 => hmac_digest::<Hmac<Sha256>>(message, key),
        HashAlgorithm::Sha512 => hmac_digest::<Hmac<Sha512>>(message, key),
    }
}

fn hmac_digest<M: Mac + KeyInit>(message: &[u8], key: &[u8]) -> Vec<u8> {
    let mut mac =
        <M as KeyInit>::new_from_slice(key).expect("HMAC accepts keys of any length");
    Mac::update(&mut mac, message);
    mac.finalize().into_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 2202 / RFC 4231 test case 2.
    const JEFE_KEY: &[u8] = b"Jefe";
    const JEFE_DATA: &[u8] = b"what do ya want for nothing?";

    #[test]
    fn test_hmac_md5_rfc2202() {
        let sig = compute_signature(JEFE_DATA, JEFE_KEY, HashAlgorithm::Md5);
        assert_eq!(hex::encode(sig), "750c783e6ab0b503eaa86e310a5db738");
    }

    #[test]
    fn test_hmac_sha1_rfc2202() {
        let sig = compute_signature(JEFE_DATA, JEFE_KEY, HashAlgorithm::Sha1);
        assert_eq!(hex::encode(sig), "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79");
    }

    #[test]
    fn test_hmac_sha256_rfc4231() {
        let sig = compute_signature(JEFE_DATA, JEFE_KEY, HashAlgorithm::Sha256);
        assert_eq!(
            hex::encode(sig),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_hmac_sha512_rfc4231() {
        let sig = compute_signature(JEFE_DATA, JEFE_KEY, HashAlgorithm::Sha512);
        assert_eq!(
            hex::encode(sig),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_output_len_matches_digest() {
        for hash in [
            HashAlgorithm::Md5,
            HashAlgorithm::Sha1,
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha512,
        ] {
            assert_eq!(compute_signature(b"x", b"k", hash).len(), hash.output_len());
        }
    }

    #[test]
    fn test_deterministic() {
        let a = compute_signature(b"hello", b"testing", HashAlgorithm::Sha256);
        let b = compute_signature(b"hello", b"testing", HashAlgorithm::Sha256);
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_changes_digest() {
        let a = compute_signature(b"hello", b"testing", HashAlgorithm::Sha1);
        let b = compute_signature(b"hello", b"testinG", HashAlgorithm::Sha1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_key_accepted() {
        let sig = compute_signature(b"hello", b"", HashAlgorithm::Sha1);
        assert_eq!(sig.len(), 20);
    }

    #[test]
    fn test_parse_hash_names() {
        assert_eq!("sha256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("SHA-512".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha512);
        assert_eq!(" md5 ".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Md5);
        assert!(matches!(
            "blake3".parse::<HashAlgorithm>(),
            Err(SignetError::ConfigError(_))
        ));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let hash = HashAlgorithm::Sha256;
        assert_eq!(hash.to_string().parse::<HashAlgorithm>().unwrap(), hash);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&HashAlgorithm::Sha512).unwrap();
        assert_eq!(json, "\"SHA512\"");
        let parsed: HashAlgorithm = serde_json::from_str("\"MD5\"").unwrap();
        assert_eq!(parsed, HashAlgorithm::Md5);
    }
}
