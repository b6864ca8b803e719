//! # Outbound Ports (Driven Ports)
//!
//! Storage and addressing the ledger needs from the host chain.

use crate::domain::entities::{ClaimAddress, ClaimStatus};
use crate::domain::errors::ClaimStoreError;

/// Derives a deterministic storage address from seeds.
///
/// Production hosts plug in their native derivation (program-derived
/// addresses, contract storage slots). [`KeccakAddressDeriver`] is the
/// default.
///
/// [`KeccakAddressDeriver`]: crate::adapters::keccak::KeccakAddressDeriver
pub trait AddressDeriver: Send + Sync {
    fn derive(&self, seeds: &[&[u8]]) -> ClaimAddress;
}

/// Result of an atomic reservation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReserveOutcome {
    /// The caller now owns the pending claim.
    Reserved,
    /// A claim already exists.
    Exists(ClaimStatus),
}

/// Content-addressed claim table.
///
/// `try_reserve` must be an atomic insert-if-absent: of any number of
/// concurrent callers on one address, exactly one sees `Reserved`.
pub trait ClaimStore: Send + Sync {
    fn try_reserve(&self, address: &ClaimAddress) -> Result<ReserveOutcome, ClaimStoreError>;

    /// Pending -> Executed. Called only after the effect ran; on error the
    /// ledger leaves the claim pending and never releases it.
    fn commit(&self, address: &ClaimAddress) -> Result<(), ClaimStoreError>;

    /// Remove a pending claim.
    fn release(&self, address: &ClaimAddress) -> Result<(), ClaimStoreError>;

    fn status(&self, address: &ClaimAddress) -> Result<Option<ClaimStatus>, ClaimStoreError>;

    /// Number of claims held, pending included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
