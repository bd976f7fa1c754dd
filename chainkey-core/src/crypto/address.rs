//! Implicit account id derivation.
//!
//! An implicit account id is the lowercase hex encoding of the 32 raw
//! public key bytes. The account exists as soon as funds are sent to it,
//! without any on-chain registration.

use super::keys::PublicKey;

/// Derive the implicit account id of a public key.
pub fn implicit_account_id(public_key: &PublicKey) -> String {
    hex::encode(public_key.as_bytes())
}
