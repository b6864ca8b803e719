//! # Replay Protection Subsystem (GB-03)
//!
//! Records which `(emitter chain, emitter address, sequence)` triples have
//! been executed and guarantees each executes at most once.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): claim keys, statuses, errors
//! - **Ports Layer** (`ports/`): [`ClaimStore`] (atomic insert-if-absent
//!   table) and [`AddressDeriver`] (locates a claim in that table)
//! - **Adapters** (`adapters/`): in-memory store, keccak address derivation
//! - **Service Layer** (`service.rs`): [`ReplayProtectionLedger`]
//!
//! ## Atomicity
//!
//! A claim is reserved before the payload's effect runs and committed only
//! if the effect succeeds. A failed (or panicking) effect releases the
//! reservation, so the VAA stays redeemable. While reserved, concurrent
//! attempts on the same key fail with `AlreadyExecuted`.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::keccak::KeccakAddressDeriver;
pub use adapters::memory::InMemoryClaimStore;
pub use domain::entities::{ClaimAddress, ClaimKey, ClaimStatus, LedgerStats};
pub use domain::errors::{ClaimStoreError, ReplayError};
pub use ports::outbound::{AddressDeriver, ClaimStore, ReserveOutcome};
pub use service::ReplayProtectionLedger;
