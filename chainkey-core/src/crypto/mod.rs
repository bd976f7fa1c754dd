//! Key material and signatures.
//!
//! This module provides:
//! - The [`KeyType`] registry of supported signature schemes
//! - Tagged [`PublicKey`] values with textual and binary encodings
//! - Ed25519 key pair generation, parsing and signing
//! - Detached signature verification
//! - Implicit account id derivation

mod address;
mod key_pair;
mod key_type;
mod keys;
mod signing;

pub use address::implicit_account_id;
pub use key_pair::{Ed25519KeyPair, KeyPair, SigningKeyPair};
pub use key_type::KeyType;
pub use keys::{PublicKey, PUBLIC_KEY_LEN};
pub use signing::{decode_signature, verify, Signature};
