//! Detached signatures and verification.

use std::fmt;

use ed25519_dalek::{Verifier, VerifyingKey};

use super::keys::{split_encoded, PublicKey, KEY_SEPARATOR};
use super::key_type::KeyType;
use crate::error::KeyError;
use crate::serialization::{base_decode, base_encode, BinarySerialize, BinaryWriter};

/// Signature bytes together with the public key that verifies them.
///
/// Holds its own copy of the public key, so it stays usable after the
/// signing key pair is dropped.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    signature: Vec<u8>,
    public_key: PublicKey,
}

impl Signature {
    pub(crate) fn new(signature: Vec<u8>, public_key: PublicKey) -> Self {
        Signature { signature, public_key }
    }

    /// Raw signature bytes.
    #[inline]
    pub fn signature_bytes(&self) -> &[u8] {
        &self.signature
    }

    /// The public key that produced this signature.
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Check this signature over `message`.
    pub fn verify(&self, message: &[u8]) -> bool {
        verify(&self.public_key, message, &self.signature)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.public_key.key_type(),
            KEY_SEPARATOR,
            base_encode(&self.signature)
        )
    }
}

/// Wire form: key type tag followed by the raw signature bytes.
impl BinarySerialize for Signature {
    fn serialize_into(&self, writer: &mut BinaryWriter) {
        self.public_key.key_type().serialize_into(writer);
        writer.write_fixed(&self.signature);
    }
}

/// Parse a `[<curve>:]<base58>` signature into its key type and raw bytes.
///
/// This is the textual form written by `Signature`'s `Display`. The bytes
/// are not length-checked; verification rejects malformed signatures.
pub fn decode_signature(encoded: &str) -> Result<(KeyType, Vec<u8>), KeyError> {
    let (curve, payload) = split_encoded(encoded)?;
    let key_type = match curve {
        Some(name) => name.parse::<KeyType>()?,
        None => KeyType::default(),
    };
    Ok((key_type, base_decode(payload)?))
}

/// Verify a detached signature against a message and public key.
///
/// Any failure, including signature bytes of the wrong length or a
/// public key that is not a valid curve point, yields `false`.
pub fn verify(public_key: &PublicKey, message: &[u8], signature: &[u8]) -> bool {
    match public_key.key_type() {
        KeyType::Ed25519 => {
            let Ok(verifying_key) = VerifyingKey::from_bytes(public_key.as_bytes()) else {
                return false;
            };
            let Ok(signature) = ed25519_dalek::Signature::from_slice(signature) else {
                return false;
            };
            verifying_key.verify(message, &signature).is_ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{KeyPair, SigningKeyPair};
    use crate::serialization::serialize;

    #[test]
    fn test_sign_verify_roundtrip() {
        let kp = KeyPair::from_random(KeyType::Ed25519);
        let message = b"test message";

        let signature = kp.sign(message);
        assert!(verify(&kp.public_key(), message, signature.signature_bytes()));
        assert!(signature.verify(message));
    }

    #[test]
    fn test_verify_wrong_message_fails() {
        let kp = KeyPair::from_random(KeyType::Ed25519);
        let signature = kp.sign(b"test message");

        assert!(!verify(&kp.public_key(), b"wrong message", signature.signature_bytes()));
    }

    #[test]
    fn test_verify_wrong_key_fails() {
        let kp1 = KeyPair::from_random(KeyType::Ed25519);
        let kp2 = KeyPair::from_random(KeyType::Ed25519);
        let signature = kp1.sign(b"test message");

        assert!(!verify(&kp2.public_key(), b"test message", signature.signature_bytes()));
    }

    #[test]
    fn test_malformed_signature_is_false() {
        let kp = KeyPair::from_random(KeyType::Ed25519);
        let pk = kp.public_key();

        assert!(!verify(&pk, b"msg", &[]));
        assert!(!verify(&pk, b"msg", &[0u8; 63]));
        assert!(!verify(&pk, b"msg", &[0u8; 65]));
        assert!(!verify(&pk, b"msg", &[0xFFu8; 64]));
    }

    #[test]
    fn test_invalid_point_is_false() {
        // Not every 32-byte string decompresses to a curve point.
        let bogus = (0..=u8::MAX)
            .map(|b| PublicKey::ed25519([b; 32]))
            .find(|pk| VerifyingKey::from_bytes(pk.as_bytes()).is_err())
            .unwrap();

        assert!(!verify(&bogus, b"msg", &[0u8; 64]));
    }

    #[test]
    fn test_signature_keeps_public_key() {
        let signature = {
            let kp = KeyPair::from_random(KeyType::Ed25519);
            let sig = kp.sign(b"outlives the key pair");
            assert_eq!(sig.public_key(), &kp.public_key());
            sig
        };
        assert!(signature.verify(b"outlives the key pair"));
    }

    #[test]
    fn test_wire_form() {
        let kp = KeyPair::from_random(KeyType::Ed25519);
        let signature = kp.sign(b"wire");

        let bytes = serialize(&signature);
        assert_eq!(bytes.len(), 1 + 64);
        assert_eq!(bytes[0], 0);
        assert_eq!(&bytes[1..], signature.signature_bytes());
    }

    #[test]
    fn test_decode_signature_roundtrip() {
        let kp = KeyPair::from_random(KeyType::Ed25519);
        let signature = kp.sign(b"text form");

        let (key_type, bytes) = decode_signature(&signature.to_string()).unwrap();
        assert_eq!(key_type, KeyType::Ed25519);
        assert_eq!(bytes, signature.signature_bytes());

        let bare = base_encode(signature.signature_bytes());
        assert_eq!(decode_signature(&bare).unwrap().1, signature.signature_bytes());
    }

    #[test]
    fn test_decode_signature_errors() {
        assert_eq!(
            decode_signature("a:b:c"),
            Err(KeyError::InvalidKeyFormat { segments: 3 })
        );
        assert_eq!(
            decode_signature("rsa:abc"),
            Err(KeyError::UnknownKeyType("rsa".into()))
        );
        assert!(matches!(
            decode_signature("ed25519:0abc"),
            Err(KeyError::Decode(_))
        ));
    }

    #[test]
    fn test_display() {
        let kp = KeyPair::from_random(KeyType::Ed25519);
        let signature = kp.sign(b"display");

        let shown = signature.to_string();
        assert_eq!(shown, format!("ed25519:{}", base_encode(signature.signature_bytes())));
    }
}
