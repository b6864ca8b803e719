//! In-memory claim store.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::entities::{ClaimAddress, ClaimStatus};
use crate::domain::errors::ClaimStoreError;
use crate::ports::outbound::{ClaimStore, ReserveOutcome};

/// Mutex-guarded map. Every operation takes the lock once, which makes
/// `try_reserve` a single atomic insert-if-absent.
#[derive(Default)]
pub struct InMemoryClaimStore {
    claims: Mutex<HashMap<ClaimAddress, ClaimStatus>>,
}

impl InMemoryClaimStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClaimStore for InMemoryClaimStore {
    fn try_reserve(&self, address: &ClaimAddress) -> Result<ReserveOutcome, ClaimStoreError> {
        match self.claims.lock().entry(*address) {
            Entry::Occupied(existing) => Ok(ReserveOutcome::Exists(*existing.get())),
            Entry::Vacant(slot) => {
                slot.insert(ClaimStatus::Pending);
                Ok(ReserveOutcome::Reserved)
            }
        }
    }

    fn commit(&self, address: &ClaimAddress) -> Result<(), ClaimStoreError> {
        let mut claims = self.claims.lock();
        match claims.get_mut(address) {
            Some(status) if *status == ClaimStatus::Pending => {
                *status = ClaimStatus::Executed;
                Ok(())
            }
            _ => Err(ClaimStoreError::NotReserved(hex::encode(address))),
        }
    }

    fn release(&self, address: &ClaimAddress) -> Result<(), ClaimStoreError> {
        let mut claims = self.claims.lock();
        match claims.get(address) {
            Some(ClaimStatus::Pending) => {
                claims.remove(address);
                Ok(())
            }
            _ => Err(ClaimStoreError::NotReserved(hex::encode(address))),
        }
    }

    fn status(&self, address: &ClaimAddress) -> Result<Option<ClaimStatus>, ClaimStoreError> {
        Ok(self.claims.lock().get(address).copied())
    }

    fn len(&self) -> usize {
        self.claims.lock().len()
    }
}
