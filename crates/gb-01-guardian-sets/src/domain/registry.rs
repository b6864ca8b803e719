//! # Guardian Set Registry
//!
//! Exclusive owner of every guardian set. Verification borrows sets
//! read-only through [`GuardianSetRegistry::get_unexpired`]; the only
//! mutation is [`GuardianSetRegistry::rotate`], driven by governance.

use std::collections::{BTreeMap, HashSet};

use bridge_types::{GuardianAddress, Timestamp};
use tracing::{debug, info};

use super::entities::{GuardianSet, MAX_GUARDIANS};
use super::errors::GuardianSetError;

/// Grace period for superseded sets: 24 hours.
pub const DEFAULT_EXPIRY_SECS: u32 = 86_400;

/// Check that a guardian list can form a set.
///
/// Non-empty, at most [`MAX_GUARDIANS`], no zero address, no duplicates.
pub fn validate_guardians(guardians: &[GuardianAddress]) -> Result<(), GuardianSetError> {
    if guardians.is_empty() {
        return Err(GuardianSetError::Empty);
    }
    if guardians.len() > MAX_GUARDIANS {
        return Err(GuardianSetError::TooManyGuardians {
            count: guardians.len(),
            max: MAX_GUARDIANS,
        });
    }

    let mut seen = HashSet::with_capacity(guardians.len());
    for (position, address) in guardians.iter().enumerate() {
        if address.iter().all(|b| *b == 0) {
            return Err(GuardianSetError::ZeroAddress(position));
        }
        if !seen.insert(address) {
            return Err(GuardianSetError::DuplicateGuardian {
                position,
                address: hex::encode(address),
            });
        }
    }
    Ok(())
}

/// Active and historical guardian sets.
#[derive(Clone, Debug)]
pub struct GuardianSetRegistry {
    sets: BTreeMap<u32, GuardianSet>,
    active_index: u32,
    expiry_secs: u32,
}

impl GuardianSetRegistry {
    /// Install the initial set at index 0.
    pub fn genesis(
        guardians: Vec<GuardianAddress>,
        expiry_secs: u32,
    ) -> Result<Self, GuardianSetError> {
        Self::with_initial_set(0, guardians, expiry_secs)
    }

    /// Install an initial set at an arbitrary index, e.g. when bootstrapping
    /// from a chain that already rotated.
    pub fn with_initial_set(
        index: u32,
        guardians: Vec<GuardianAddress>,
        expiry_secs: u32,
    ) -> Result<Self, GuardianSetError> {
        validate_guardians(&guardians)?;

        let mut sets = BTreeMap::new();
        sets.insert(index, GuardianSet::new(index, guardians));
        debug!(index, expiry_secs, "guardian set registry initialised");

        Ok(Self {
            sets,
            active_index: index,
            expiry_secs,
        })
    }

    /// Set at `index`, expired or not.
    pub fn get(&self, index: u32) -> Result<&GuardianSet, GuardianSetError> {
        self.sets
            .get(&index)
            .ok_or(GuardianSetError::NotFound(index))
    }

    /// Set at `index`, failing if it expired before `timestamp`.
    ///
    /// `timestamp` is the message's own timestamp, not wall-clock time.
    pub fn get_unexpired(
        &self,
        index: u32,
        timestamp: Timestamp,
    ) -> Result<&GuardianSet, GuardianSetError> {
        let set = self.get(index)?;
        if let Some(expiration_time) = set.expiration_time {
            if timestamp > expiration_time {
                return Err(GuardianSetError::Expired {
                    index,
                    expiration_time,
                    timestamp,
                });
            }
        }
        Ok(set)
    }

    pub fn active_index(&self) -> u32 {
        self.active_index
    }

    /// The active set.
    pub fn active(&self) -> &GuardianSet {
        // active_index always names an installed set
        &self.sets[&self.active_index]
    }

    pub fn expiry_secs(&self) -> u32 {
        self.expiry_secs
    }

    /// Number of sets held, active included.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Replace the active set.
    ///
    /// `new_index` must be `active + 1`. The superseded set expires at
    /// `now + expiry_secs`.
    pub fn rotate(
        &mut self,
        new_index: u32,
        guardians: Vec<GuardianAddress>,
        now: Timestamp,
    ) -> Result<(), GuardianSetError> {
        let expected = self
            .active_index
            .checked_add(1)
            .ok_or(GuardianSetError::IndexExhausted(self.active_index))?;
        if new_index != expected {
            return Err(GuardianSetError::InvalidIndex {
                expected,
                got: new_index,
            });
        }
        validate_guardians(&guardians)?;

        let expiration = now.saturating_add(self.expiry_secs);
        if let Some(previous) = self.sets.get_mut(&self.active_index) {
            previous.expiration_time = Some(expiration);
        }

        let count = guardians.len();
        self.sets
            .insert(new_index, GuardianSet::new(new_index, guardians));
        let previous_index = self.active_index;
        self.active_index = new_index;

        info!(
            previous_index,
            new_index,
            guardians = count,
            previous_expires_at = expiration,
            "guardian set rotated"
        );
        Ok(())
    }

    /// Drop superseded sets whose expiration is before `now`.
    ///
    /// Returns how many were removed. The active set is never removed.
    pub fn prune_expired(&mut self, now: Timestamp) -> usize {
        let before = self.sets.len();
        self.sets.retain(|_, set| !set.is_expired_at(now));
        let removed = before - self.sets.len();
        if removed > 0 {
            debug!(removed, "pruned expired guardian sets");
        }
        removed
    }
}
