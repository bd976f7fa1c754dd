//! Error types for the chainkey core crate.

use thiserror::Error;

/// Top-level error type for chainkey-core operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Parsing or constructing a key failed.
    #[error("key error: {0}")]
    Key(#[from] KeyError),
    /// Decoding text or binary data failed.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Errors raised while decoding base58 text or binary data.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A character outside the base58 alphabet was found.
    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        index: usize,
    },
    /// The base58 value is too large for the decoder's 132-byte buffer.
    #[error("base58 value too long to decode")]
    InvalidLength,
    /// The reader ran out of bytes before a fixed-length field was complete.
    #[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Bytes the field required.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },
    /// A tag byte outside the known set.
    #[error("unknown data tag: {0}")]
    UnknownData(u8),
    /// Bytes were left over after the value was fully decoded.
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
}

/// Errors raised while parsing or constructing keys.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Wrong number of `:`-separated segments.
    #[error("invalid key format: expected `[curve:]data`, found {segments} segments")]
    InvalidKeyFormat {
        /// Number of segments found.
        segments: usize,
    },
    /// Key type prefix of a public key is not recognized.
    #[error("unknown key type: {0}")]
    UnknownKeyType(String),
    /// Curve prefix of a secret key is not recognized.
    #[error("unknown curve: {0}")]
    UnknownCurve(String),
    /// Public key payload has the wrong length.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Required payload length.
        expected: usize,
        /// Decoded payload length.
        actual: usize,
    },
    /// Secret key material decoded to an unsupported length.
    #[error("invalid secret key length: {0} bytes")]
    InvalidSecretKeyLength(usize),
    /// The public key embedded in secret material does not match its seed.
    #[error("secret key material embeds a public key that does not match its seed")]
    SecretKeyMismatch,
    /// The base58 payload could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
