//! Text and binary codecs for key material.
//!
//! Two encodings are shared with remote peers and must stay bit-exact:
//! - base58 text (Bitcoin alphabet) for human-shareable keys and secrets
//! - a fixed-schema binary layout where each value is the plain
//!   concatenation of its fields in declared order, without headers or
//!   length prefixes

mod base58;
mod binary;

pub use self::base58::{base_decode, base_encode};
pub use binary::{
    deserialize, serialize, BinaryDeserialize, BinaryReader, BinarySerialize, BinaryWriter,
};
