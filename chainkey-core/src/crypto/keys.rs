//! Tagged public keys and their textual and binary forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::key_type::KeyType;
use super::signing;
use crate::error::{DecodeError, KeyError};
use crate::serialization::{
    base_decode, base_encode, BinaryDeserialize, BinaryReader, BinarySerialize, BinaryWriter,
};

/// Length of a public key payload in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Separator between the curve prefix and the base58 payload.
pub(crate) const KEY_SEPARATOR: char = ':';

/// Split `[<curve>:]<payload>` into the optional curve name and the payload.
pub(crate) fn split_encoded(encoded: &str) -> Result<(Option<&str>, &str), KeyError> {
    let parts: Vec<&str> = encoded.split(KEY_SEPARATOR).collect();
    match parts.as_slice() {
        [payload] => Ok((None, *payload)),
        [curve, payload] => Ok((Some(*curve), *payload)),
        _ => Err(KeyError::InvalidKeyFormat { segments: parts.len() }),
    }
}

/// Public key tagged with its signature scheme.
///
/// Equality and ordering cover the key type as well as the bytes, so
/// keys of different schemes never compare equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicKey {
    key_type: KeyType,
    data: [u8; PUBLIC_KEY_LEN],
}

impl PublicKey {
    /// Size of the binary encoding: one tag byte plus the payload.
    pub const SERIALIZED_LEN: usize = 1 + PUBLIC_KEY_LEN;

    /// Create a public key from its parts.
    pub const fn new(key_type: KeyType, data: [u8; PUBLIC_KEY_LEN]) -> Self {
        PublicKey { key_type, data }
    }

    /// Create an Ed25519 public key from raw bytes.
    pub const fn ed25519(data: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self::new(KeyType::Ed25519, data)
    }

    /// The signature scheme of this key.
    #[inline]
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Get the raw bytes of the public key.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.data
    }

    /// Parse `[<curve>:]<base58>`.
    ///
    /// Without a prefix the default key type is assumed.
    pub fn from_encoded_string(encoded: &str) -> Result<Self, KeyError> {
        let (curve, payload) = split_encoded(encoded)?;
        let key_type = match curve {
            Some(name) => name.parse::<KeyType>()?,
            None => KeyType::default(),
        };

        let bytes = base_decode(payload)?;
        let data: [u8; PUBLIC_KEY_LEN] =
            bytes.as_slice().try_into().map_err(|_| KeyError::InvalidKeyLength {
                expected: key_type.public_key_len(),
                actual: bytes.len(),
            })?;

        Ok(PublicKey { key_type, data })
    }

    /// Encode as `<curve>:<base58>`.
    ///
    /// The prefix is always written, even though parsing accepts its
    /// absence.
    pub fn to_encoded_string(&self) -> String {
        format!("{}{}{}", self.key_type, KEY_SEPARATOR, base_encode(&self.data))
    }

    /// Check a detached signature over `message` against this key.
    ///
    /// Returns `false` for a mismatch and for malformed signature bytes.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        signing::verify(self, message, signature)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_encoded_string())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_encoded_string())
    }
}

impl FromStr for PublicKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PublicKey::from_encoded_string(s)
    }
}

impl BinarySerialize for PublicKey {
    fn serialize_into(&self, writer: &mut BinaryWriter) {
        self.key_type.serialize_into(writer);
        self.data.serialize_into(writer);
    }
}

impl BinaryDeserialize for PublicKey {
    fn deserialize_from(reader: &mut BinaryReader<'_>) -> Result<Self, DecodeError> {
        let key_type = KeyType::deserialize_from(reader)?;
        let data = <[u8; PUBLIC_KEY_LEN]>::deserialize_from(reader)?;
        Ok(PublicKey { key_type, data })
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_encoded_string())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PublicKeyVisitor;

        impl<'de> serde::de::Visitor<'de> for PublicKeyVisitor {
            type Value = PublicKey;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an encoded public key such as `ed25519:<base58>`")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<PublicKey, E> {
                PublicKey::from_encoded_string(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(PublicKeyVisitor)
    }
}
