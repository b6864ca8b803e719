//! # Keccak-256 Hashing
//!
//! The message digest guardians sign is the keccak256 of the keccak256 of the
//! VAA body. Hashing twice keeps digests bit-compatible with every existing
//! guardian signature and rules out length extension on the body.

use bridge_types::Hash;
use sha3::{Digest, Keccak256};

/// Hash data with Keccak-256 (one-shot).
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash the concatenation of several inputs.
pub fn keccak256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Keccak256::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize().into()
}

/// `keccak256(keccak256(data))`: the digest guardians sign.
pub fn double_keccak256(data: &[u8]) -> Hash {
    keccak256(&keccak256(data))
}
