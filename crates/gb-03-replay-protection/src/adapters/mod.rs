//! # Adapters
//!
//! - `memory`: mutex-guarded hash map claim store
//! - `keccak`: keccak256-based claim address derivation

pub mod keccak;
pub mod memory;
