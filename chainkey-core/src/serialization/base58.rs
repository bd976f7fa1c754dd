//! Base58 text encoding.

use base58::{FromBase58, FromBase58Error, ToBase58};

use crate::error::DecodeError;

/// Encode bytes as base58 text.
///
/// The output never contains padding or whitespace.
pub fn base_encode(bytes: &[u8]) -> String {
    bytes.to_base58()
}

/// Decode base58 text back into bytes.
pub fn base_decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    text.from_base58().map_err(|e| match e {
        FromBase58Error::InvalidBase58Character(character, index) => {
            DecodeError::InvalidCharacter { character, index }
        }
        FromBase58Error::InvalidBase58Length => DecodeError::InvalidLength,
    })
}
