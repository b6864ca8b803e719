//! # Bridge Crypto
//!
//! Cryptographic primitives used to verify guardian attestations.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | Keccak-256 | VAA digests, address derivation |
//! | `ecdsa` | secp256k1 | Guardian signature recovery and signing |
//!
//! ## Security Properties
//!
//! - **Double hashing**: VAA digests are `keccak256(keccak256(body))`
//! - **secp256k1**: RFC 6979 deterministic signing, low-S normalization
//! - **Recovery only**: guardians are identified by 20-byte addresses, never by
//!   raw public keys

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use ecdsa::{address_from_verifying_key, recover_guardian_address, GuardianKeyPair};
pub use errors::CryptoError;
pub use hashing::{double_keccak256, keccak256, keccak256_many};
