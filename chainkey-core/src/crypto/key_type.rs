//! Signature scheme registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DecodeError, KeyError};
use crate::serialization::{BinaryDeserialize, BinaryReader, BinarySerialize, BinaryWriter};

/// Identifies the signature scheme a key belongs to.
///
/// The binary tag of each variant is part of the wire format and must
/// never be renumbered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyType {
    /// Ed25519 detached signatures.
    #[default]
    Ed25519,
}

impl KeyType {
    /// Every supported key type.
    pub const ALL: [KeyType; 1] = [KeyType::Ed25519];

    /// Lowercase curve name used as the textual key prefix.
    pub const fn as_str(&self) -> &'static str {
        match self {
            KeyType::Ed25519 => "ed25519",
        }
    }

    /// Binary tag.
    pub const fn to_byte(self) -> u8 {
        match self {
            KeyType::Ed25519 => 0,
        }
    }

    /// Parse a binary tag.
    pub fn from_byte(byte: u8) -> Result<Self, DecodeError> {
        match byte {
            0 => Ok(KeyType::Ed25519),
            other => Err(DecodeError::UnknownData(other)),
        }
    }

    /// Length in bytes of a public key of this type.
    pub const fn public_key_len(&self) -> usize {
        match self {
            KeyType::Ed25519 => ed25519_dalek::PUBLIC_KEY_LENGTH,
        }
    }

    /// Length in bytes of a signature of this type.
    pub const fn signature_len(&self) -> usize {
        match self {
            KeyType::Ed25519 => ed25519_dalek::SIGNATURE_LENGTH,
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyType {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ed25519" => Ok(KeyType::Ed25519),
            other => Err(KeyError::UnknownKeyType(other.to_string())),
        }
    }
}

impl BinarySerialize for KeyType {
    fn serialize_into(&self, writer: &mut BinaryWriter) {
        writer.write_u8(self.to_byte());
    }
}

impl BinaryDeserialize for KeyType {
    fn deserialize_from(reader: &mut BinaryReader<'_>) -> Result<Self, DecodeError> {
        KeyType::from_byte(reader.read_u8()?)
    }
}

impl Serialize for KeyType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for KeyType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
