//! # Chainkey Core
//!
//! Cryptographic identity primitives for a blockchain client.
//!
//! This crate provides:
//! - Key pair generation and parsing from `[<curve>:]<base58>` strings
//! - Ed25519 signing and detached signature verification
//! - A fixed-schema binary codec shared with remote peers
//! - Base58 text encoding
//!
//! ```
//! use chainkey_core::{KeyPair, KeyType, PublicKey, SigningKeyPair};
//!
//! let key_pair = KeyPair::from_random(KeyType::Ed25519);
//! let signature = key_pair.sign(b"hello");
//! assert!(key_pair.verify(b"hello", signature.signature_bytes()));
//!
//! let encoded = key_pair.public_key().to_encoded_string();
//! let public_key = PublicKey::from_encoded_string(&encoded).unwrap();
//! assert_eq!(public_key, key_pair.public_key());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod crypto;
pub mod error;
pub mod serialization;

// Re-export commonly used types at crate root
pub use crypto::{
    implicit_account_id, Ed25519KeyPair, KeyPair, KeyType, PublicKey, Signature, SigningKeyPair,
};
pub use error::{CoreError, DecodeError, KeyError};
