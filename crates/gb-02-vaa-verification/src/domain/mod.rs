//! # Domain Layer
//!
//! Verification logic with no I/O and no locking.

pub mod entities;
pub mod errors;
pub mod verifier;
