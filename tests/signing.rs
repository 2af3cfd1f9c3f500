//! End-to-end signing and verification through the public API.

use signet::{
    GenericSigner, HashAlgorithm, Signer, SignetConfig, SignetError, TimedSigner, TokenLayout,
    TokenSigner,
};
use std::sync::Arc;
use std::thread;

const ALL_HASHES: [HashAlgorithm; 4] = [
    HashAlgorithm::Md5,
    HashAlgorithm::Sha1,
    HashAlgorithm::Sha256,
    HashAlgorithm::Sha512,
];

#[test]
fn embedded_sha1_vector() {
    let signer = TokenSigner::new(SignetConfig::new("testing")).unwrap();
    let token = signer.sign("hello world");
    assert_eq!(token, "aGVsbG8gd29ybGQulTKLm6tvriBguTc4TveWF40hfg8=");
    assert_eq!(signer.verify(&token).unwrap(), "hello world");
}

#[test]
fn generic_sha256_vector() {
    let config = SignetConfig::new("testing")
        .with_layout(TokenLayout::Generic)
        .with_hash(HashAlgorithm::Sha256);
    let signer = TokenSigner::new(config).unwrap();
    assert_eq!(
        signer.sign("hello"),
        "aGVsbG8=.+JOUrYi7eQZbEMBgqnN8bCkdk5B7zuq5hqZ933+dsak="
    );
}

#[test]
fn every_hash_round_trips_in_both_layouts() {
    for hash in ALL_HASHES {
        for layout in [TokenLayout::Embedded, TokenLayout::Generic] {
            let config = SignetConfig::new("testing").with_hash(hash).with_layout(layout);
            let signer = TokenSigner::new(config).unwrap();
            for message in ["", "hello", "with.dots.inside", "ünïcödé ✓"] {
                let token = signer.sign(message);
                assert_eq!(
                    signer.verify(&token).as_deref(),
                    Ok(message),
                    "{hash} {layout:?} {message:?}"
                );
            }
        }
    }
}

#[test]
fn expiry_with_system_clock() {
    let fresh = TimedSigner::new("testing").with_expiry(chrono::Duration::minutes(5));
    let token = fresh.sign("session");
    assert_eq!(fresh.verify(&token).unwrap(), "session");

    let stale = TimedSigner::new("testing").with_expiry(chrono::Duration::seconds(-1));
    let token = stale.sign("session");
    assert_eq!(stale.verify(&token), Err(SignetError::Expired));
}

#[test]
fn signing_is_deterministic_without_expiry() {
    let signer = TimedSigner::new("testing").with_hash(HashAlgorithm::Sha512);
    assert_eq!(signer.sign("same"), signer.sign("same"));

    let generic = GenericSigner::md5("testing");
    assert_eq!(generic.sign("same"), generic.sign("same"));
}

#[test]
fn format_rejection_mapping() {
    let embedded = TimedSigner::new("testing");
    assert_eq!(embedded.verify("%%%"), Err(SignetError::InvalidFormat));

    let generic = GenericSigner::sha1("testing");
    assert_eq!(generic.verify("%%%.AAAA"), Err(SignetError::InvalidSignature));
    assert_eq!(generic.verify("nodelimiter"), Err(SignetError::InvalidFormat));
}

#[test]
fn signer_shared_across_threads() {
    let signer: Arc<dyn Signer> = Arc::new(TokenSigner::new(SignetConfig::new("testing")).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let signer = Arc::clone(&signer);
            thread::spawn(move || {
                let message = format!("worker-{i}");
                let token = signer.sign(&message);
                assert_eq!(signer.verify(&token).unwrap(), message);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
