//! Property tests for round trips and tamper sensitivity.

use base64::{engine::general_purpose::STANDARD, Engine};
use proptest::prelude::*;
use signet::{GenericSigner, HashAlgorithm, Signer, SignetError, TimedSigner};

fn hash_strategy() -> impl Strategy<Value = HashAlgorithm> {
    prop_oneof![
        Just(HashAlgorithm::Md5),
        Just(HashAlgorithm::Sha1),
        Just(HashAlgorithm::Sha256),
        Just(HashAlgorithm::Sha512),
    ]
}

proptest! {
    #[test]
    fn embedded_round_trip(message in ".*", hash in hash_strategy(), encoded in any::<bool>()) {
        let signer = TimedSigner::new("property-key")
            .with_hash(hash)
            .with_transport_encoding(encoded);
        let token = signer.sign(&message);
        prop_assert_eq!(signer.verify(&token), Ok(message));
    }

    #[test]
    fn generic_round_trip(message in ".*", hash in hash_strategy()) {
        let signer = GenericSigner::new("property-key", hash);
        let token = signer.sign(&message);
        prop_assert_eq!(signer.verify(&token), Ok(message));
    }

    #[test]
    fn embedded_detects_any_byte_flip(
        message in "[a-z.]{0,24}",
        hash in hash_strategy(),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let signer = TimedSigner::new("property-key").with_hash(hash);
        let mut payload = STANDARD.decode(signer.sign(&message)).unwrap();
        let at = index.index(payload.len());
        payload[at] ^= flip;

        let result = signer.verify(&STANDARD.encode(&payload));
        let delimiter_at = payload.len() - hash.output_len() - 1;
        if at == delimiter_at {
            // Removing the only delimiter leaves nothing to split on.
            prop_assert!(matches!(
                result,
                Err(SignetError::InvalidSignature) | Err(SignetError::InvalidFormat)
            ));
        } else {
            prop_assert_eq!(result, Err(SignetError::InvalidSignature));
        }
    }

    #[test]
    fn generic_rejects_other_keys(message in ".*", hash in hash_strategy()) {
        let token = GenericSigner::new("key-one", hash).sign(&message);
        let result = GenericSigner::new("key-two", hash).verify(&token);
        prop_assert_eq!(result, Err(SignetError::InvalidSignature));
    }
}
