//! # VAA Verification Subsystem (GB-02)
//!
//! Checks that a VAA carries a quorum of valid, strictly ordered guardian
//! signatures from an unexpired guardian set.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): the verification algorithm, pure given a
//!   registry snapshot
//! - **Ports Layer** (`ports/`): the inbound [`VaaVerificationApi`]
//! - **Service Layer** (`service.rs`): holds the shared registry and takes
//!   its read guard for the whole of each verification
//!
//! ## Security Notes
//!
//! - The signed digest is `keccak256(keccak256(body))`
//! - Signature indices must be strictly increasing, which rules out counting
//!   one guardian twice
//! - A single bad signature rejects the whole VAA
//! - Expiry is judged against the VAA's own timestamp

pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use domain::entities::VerifiedVaa;
pub use domain::errors::VerificationError;
pub use domain::verifier::{verify_vaa, verify_with_set};
pub use ports::inbound::VaaVerificationApi;
pub use service::{SharedRegistry, VaaVerificationService};
