//! Sign a message and verify it, handling each failure kind.
//!
//! # Running
//!
//! ```bash
//! export SIGNET_KEY="your-secret-key"
//! cargo run --example sign_and_verify -- "user:42"
//! ```
//!
//! # Note
//!
//! In production the key comes from a secret store. Anyone holding it can
//! mint valid tokens.

use signet::{HashAlgorithm, Signer, SignetConfig, SignetError, TokenSigner};

fn main() {
    let key = std::env::var("SIGNET_KEY").unwrap_or_else(|_| "demo-only-key".to_string());
    let message = std::env::args().nth(1).unwrap_or_else(|| "hello world".to_string());

    let config = SignetConfig::new(key)
        .with_hash(HashAlgorithm::Sha256)
        .with_expiry(chrono::Duration::minutes(15));

    let signer = match TokenSigner::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let token = signer.sign(&message);
    println!("token:    {}", token);

    match signer.verify(&token) {
        Ok(original) => println!("verified: {}", original),
        Err(e) => {
            match &e {
                SignetError::Expired => eprintln!("Token expired - ask the user to sign in again"),
                SignetError::InvalidSignature => {
                    eprintln!("SECURITY: token signature mismatch, rejecting")
                }
                _ => eprintln!("Verification error: {}", e),
            }
            std::process::exit(1);
        }
    }

    // Any single altered character is rejected.
    let mut tampered = token.into_bytes();
    tampered[0] ^= 0x01;
    let tampered = String::from_utf8_lossy(&tampered);
    println!("tampered: {:?}", signer.verify(&tampered));
}
