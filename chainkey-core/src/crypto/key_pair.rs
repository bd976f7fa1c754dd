//! Key pairs: the signing capability bound to a public key.
//!
//! [`SigningKeyPair`] is the contract every scheme implements. [`KeyPair`]
//! is the closed set of schemes; supporting another curve means one new
//! variant here and one arm in each `match` on [`KeyType`].

use std::fmt;
use std::str::FromStr;

use ed25519_dalek::{Signer, SigningKey, KEYPAIR_LENGTH, SECRET_KEY_LENGTH};
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use super::key_type::KeyType;
use super::keys::{split_encoded, PublicKey, KEY_SEPARATOR};
use super::signing::Signature;
use crate::error::KeyError;
use crate::serialization::{base_decode, base_encode};

/// Operations shared by every key pair, whatever its curve.
pub trait SigningKeyPair: Send + Sync {
    /// Sign a message, producing a detached signature.
    fn sign(&self, message: &[u8]) -> Signature;

    /// Check a detached signature over `message` against this key pair's
    /// public key.
    ///
    /// Malformed signature bytes yield `false`, never an error.
    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        self.public_key().verify(message, signature)
    }

    /// Encode as `<curve>:<secret material>`.
    fn to_encoded_string(&self) -> String;

    /// The public half of the pair.
    fn public_key(&self) -> PublicKey;
}

/// Ed25519 key pair.
///
/// The secret material is the base58 encoding of `seed || public key`.
/// It is wiped on drop.
#[derive(Clone)]
pub struct Ed25519KeyPair {
    public_key: PublicKey,
    signing_key: SigningKey,
    secret_key: Zeroizing<String>,
}

impl Ed25519KeyPair {
    /// Generate a new random key pair using the OS random number generator.
    ///
    /// # Panics
    ///
    /// Panics if the OS random number generator is unavailable.
    pub fn generate() -> Self {
        Self::from_signing_key(SigningKey::generate(&mut OsRng))
    }

    /// Build a key pair from base58 secret material.
    ///
    /// Accepts the 64-byte `seed || public key` form or a bare 32-byte
    /// seed. The public key is always derived from the seed, and a
    /// trailing public key that differs from it is rejected. Either way
    /// the stored material is the 64-byte form.
    pub fn from_secret_key(secret_key: &str) -> Result<Self, KeyError> {
        let decoded = Zeroizing::new(base_decode(secret_key)?);
        if decoded.len() != KEYPAIR_LENGTH && decoded.len() != SECRET_KEY_LENGTH {
            return Err(KeyError::InvalidSecretKeyLength(decoded.len()));
        }

        let mut seed = Zeroizing::new([0u8; SECRET_KEY_LENGTH]);
        seed.copy_from_slice(&decoded[..SECRET_KEY_LENGTH]);
        let key_pair = Self::from_signing_key(SigningKey::from_bytes(&seed));

        let embedded = &decoded[SECRET_KEY_LENGTH..];
        if !embedded.is_empty() && embedded != key_pair.public_key.as_bytes().as_slice() {
            return Err(KeyError::SecretKeyMismatch);
        }

        Ok(key_pair)
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let public_key = PublicKey::ed25519(signing_key.verifying_key().to_bytes());
        let keypair_bytes = Zeroizing::new(signing_key.to_keypair_bytes());
        let secret_key = Zeroizing::new(base_encode(keypair_bytes.as_slice()));
        Ed25519KeyPair {
            public_key,
            signing_key,
            secret_key,
        }
    }

    /// The base58 `seed || public key` secret material.
    ///
    /// Use with caution - exposing it compromises the identity.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl SigningKeyPair for Ed25519KeyPair {
    fn sign(&self, message: &[u8]) -> Signature {
        let signature = self.signing_key.sign(message);
        Signature::new(signature.to_bytes().to_vec(), self.public_key)
    }

    fn to_encoded_string(&self) -> String {
        format!("{}{}{}", KeyType::Ed25519, KEY_SEPARATOR, self.secret_key.as_str())
    }

    fn public_key(&self) -> PublicKey {
        self.public_key
    }
}

impl fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

/// A key pair of any supported curve.
#[derive(Clone, Debug)]
pub enum KeyPair {
    /// Ed25519 key pair.
    Ed25519(Ed25519KeyPair),
}

impl KeyPair {
    /// Generate a fresh key pair for `key_type`.
    ///
    /// # Panics
    ///
    /// Panics if the OS random number generator is unavailable.
    pub fn from_random(key_type: KeyType) -> Self {
        let key_pair = match key_type {
            KeyType::Ed25519 => KeyPair::Ed25519(Ed25519KeyPair::generate()),
        };
        tracing::debug!(public_key = %key_pair.public_key(), "generated key pair");
        key_pair
    }

    /// Parse `[<curve>:]<secret material>`.
    ///
    /// Without a prefix the default curve is assumed.
    pub fn from_encoded_secret(encoded: &str) -> Result<Self, KeyError> {
        let (curve, secret_key) = split_encoded(encoded)?;
        let key_type = match curve {
            Some(name) => name
                .parse::<KeyType>()
                .map_err(|_| KeyError::UnknownCurve(name.to_string()))?,
            None => KeyType::default(),
        };

        let key_pair = Self::from_secret_key(key_type, secret_key)?;
        tracing::debug!(public_key = %key_pair.public_key(), "loaded key pair from secret");
        Ok(key_pair)
    }

    /// Build a key pair of `key_type` from unprefixed secret material.
    pub fn from_secret_key(key_type: KeyType, secret_key: &str) -> Result<Self, KeyError> {
        match key_type {
            KeyType::Ed25519 => Ed25519KeyPair::from_secret_key(secret_key).map(KeyPair::Ed25519),
        }
    }

    /// The curve of this key pair.
    pub fn key_type(&self) -> KeyType {
        match self {
            KeyPair::Ed25519(_) => KeyType::Ed25519,
        }
    }
}

impl SigningKeyPair for KeyPair {
    fn sign(&self, message: &[u8]) -> Signature {
        match self {
            KeyPair::Ed25519(kp) => kp.sign(message),
        }
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        match self {
            KeyPair::Ed25519(kp) => kp.verify(message, signature),
        }
    }

    fn to_encoded_string(&self) -> String {
        match self {
            KeyPair::Ed25519(kp) => kp.to_encoded_string(),
        }
    }

    fn public_key(&self) -> PublicKey {
        match self {
            KeyPair::Ed25519(kp) => kp.public_key(),
        }
    }
}

impl From<Ed25519KeyPair> for KeyPair {
    fn from(key_pair: Ed25519KeyPair) -> Self {
        KeyPair::Ed25519(key_pair)
    }
}

impl FromStr for KeyPair {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyPair::from_encoded_secret(s)
    }
}
