//! # Replay Protection Ledger
//!
//! Exclusive owner of claims. Callers hand it the effect of a verified
//! message; the ledger runs the effect only if it wins the claim and keeps
//! the claim only if the effect succeeds.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error, info, warn};

use crate::adapters::keccak::KeccakAddressDeriver;
use crate::adapters::memory::InMemoryClaimStore;
use crate::domain::entities::{ClaimAddress, ClaimKey, ClaimStatus, LedgerStats};
use crate::domain::errors::{ClaimStoreError, ReplayError};
use crate::ports::outbound::{AddressDeriver, ClaimStore, ReserveOutcome};

/// At-most-once execution ledger.
pub struct ReplayProtectionLedger<
    S: ClaimStore = InMemoryClaimStore,
    D: AddressDeriver = KeccakAddressDeriver,
> {
    store: S,
    deriver: D,
    executed: AtomicU64,
    replays_rejected: AtomicU64,
    rolled_back: AtomicU64,
}

impl ReplayProtectionLedger {
    /// In-memory ledger with keccak addressing under `namespace`.
    pub fn in_memory(namespace: &[u8]) -> Self {
        Self::new(
            InMemoryClaimStore::new(),
            KeccakAddressDeriver::new(namespace.to_vec()),
        )
    }
}

impl<S: ClaimStore, D: AddressDeriver> ReplayProtectionLedger<S, D> {
    pub fn new(store: S, deriver: D) -> Self {
        Self {
            store,
            deriver,
            executed: AtomicU64::new(0),
            replays_rejected: AtomicU64::new(0),
            rolled_back: AtomicU64::new(0),
        }
    }

    /// Where `key`'s claim lives in the store.
    pub fn claim_address(&self, key: &ClaimKey) -> ClaimAddress {
        let (address, chain, sequence) = key.seeds();
        self.deriver.derive(&[&address, &chain, &sequence])
    }

    /// Claim `key` with no associated effect.
    pub fn claim(&self, key: &ClaimKey) -> Result<(), ReplayError> {
        self.claim_and_apply(key, || Ok::<_, ReplayError>(()))
    }

    /// Claim `key` and run `effect` as one all-or-nothing unit.
    ///
    /// Returns `AlreadyExecuted` without running `effect` when the key was
    /// executed or is being executed. When `effect` fails or panics the claim
    /// is released. Once `effect` has succeeded the claim is never released:
    /// if the store fails to commit it, the claim stays pending and keeps
    /// blocking the key.
    pub fn claim_and_apply<T, E, F>(&self, key: &ClaimKey, effect: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<ReplayError>,
    {
        let reservation = self.reserve(key)?;

        match effect() {
            Ok(value) => {
                if let Err(e) = reservation.commit() {
                    error!(claim = %key, "effect applied but claim left pending: {e}");
                }
                self.executed.fetch_add(1, Ordering::Relaxed);
                info!(claim = %key, "claim executed");
                Ok(value)
            }
            Err(err) => {
                // reservation drop releases the claim
                drop(reservation);
                Err(err)
            }
        }
    }

    /// Whether `key` has been executed. Pending claims are not executed.
    pub fn is_executed(&self, key: &ClaimKey) -> Result<bool, ReplayError> {
        let status = self.store.status(&self.claim_address(key))?;
        Ok(status == Some(ClaimStatus::Executed))
    }

    pub fn stats(&self) -> LedgerStats {
        LedgerStats {
            executed: self.executed.load(Ordering::Relaxed),
            replays_rejected: self.replays_rejected.load(Ordering::Relaxed),
            rolled_back: self.rolled_back.load(Ordering::Relaxed),
        }
    }

    /// Claims held by the store, pending included.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn reserve(&self, key: &ClaimKey) -> Result<Reservation<'_, S, D>, ReplayError> {
        let address = self.claim_address(key);
        match self.store.try_reserve(&address)? {
            ReserveOutcome::Reserved => {
                debug!(claim = %key, "claim reserved");
                Ok(Reservation {
                    ledger: self,
                    key: *key,
                    address,
                    settled: false,
                })
            }
            ReserveOutcome::Exists(status) => {
                self.replays_rejected.fetch_add(1, Ordering::Relaxed);
                warn!(claim = %key, ?status, "replay rejected");
                Err(ReplayError::AlreadyExecuted(*key))
            }
        }
    }
}

/// A pending claim. Released on drop unless settled by `commit`.
struct Reservation<'a, S: ClaimStore, D: AddressDeriver> {
    ledger: &'a ReplayProtectionLedger<S, D>,
    key: ClaimKey,
    address: ClaimAddress,
    settled: bool,
}

impl<S: ClaimStore, D: AddressDeriver> Reservation<'_, S, D> {
    /// Settles the reservation even when the store fails: the claim is then
    /// left pending rather than released.
    fn commit(mut self) -> Result<(), ClaimStoreError> {
        self.settled = true;
        self.ledger.store.commit(&self.address)
    }
}

impl<S: ClaimStore, D: AddressDeriver> Drop for Reservation<'_, S, D> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        self.ledger.rolled_back.fetch_add(1, Ordering::Relaxed);
        match self.ledger.store.release(&self.address) {
            Ok(()) => debug!(claim = %self.key, "claim released"),
            Err(e) => warn!(claim = %self.key, "failed to release claim: {e}"),
        }
    }
}
