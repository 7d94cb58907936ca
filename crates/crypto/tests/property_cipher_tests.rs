//! Property-based tests for the authenticated cipher.
//!
//! Test coverage:
//! - Roundtrip: decrypt(encrypt(p)) == p for every key size and plaintext.
//! - Tamper detection: any single flipped bit makes decryption fail.
//! - Key isolation: a different key never opens the ciphertext.

use proptest::prelude::*;

use keystone_crypto::{AuthenticatedCipher, CryptoError};

/// Strategy for generating valid key material (16, 24 or 32 byte keys, 12 byte nonce).
fn key_material_strategy() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    let key = prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 24),
        prop::collection::vec(any::<u8>(), 32),
    ];
    let nonce = prop::collection::vec(any::<u8>(), 12);
    (key, nonce)
}

proptest! {
    #[test]
    fn roundtrip_preserves_plaintext(
        (key, nonce) in key_material_strategy(),
        plaintext in prop::collection::vec(any::<u8>(), 0..512),
    ) {
        let cipher = AuthenticatedCipher::from_bytes(&key, &nonce).unwrap();
        let sealed = cipher.encrypt(&plaintext).unwrap();
        prop_assert_eq!(cipher.decrypt(&sealed).unwrap(), plaintext);
    }

    #[test]
    fn single_bit_flip_fails_authentication(
        (key, nonce) in key_material_strategy(),
        plaintext in prop::collection::vec(any::<u8>(), 0..256),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let cipher = AuthenticatedCipher::from_bytes(&key, &nonce).unwrap();
        let mut sealed = cipher.encrypt(&plaintext).unwrap();

        let idx = position.index(sealed.len());
        sealed[idx] ^= 1 << bit;

        prop_assert!(matches!(
            cipher.decrypt(&sealed),
            Err(CryptoError::AuthenticationFailed)
        ));
    }

    #[test]
    fn different_key_never_opens(
        (key, nonce) in key_material_strategy(),
        plaintext in prop::collection::vec(any::<u8>(), 1..128),
    ) {
        let cipher = AuthenticatedCipher::from_bytes(&key, &nonce).unwrap();
        let sealed = cipher.encrypt(&plaintext).unwrap();

        let mut other_key = key.clone();
        other_key[0] ^= 0x01;
        let other = AuthenticatedCipher::from_bytes(&other_key, &nonce).unwrap();

        prop_assert!(other.decrypt(&sealed).is_err());
    }
}
