//! # Guardian Set
//!
//! An indexed, ordered list of guardian addresses. The position of an
//! address in the list is the `guardian_index` its signatures carry.

use bridge_types::{GuardianAddress, Timestamp};
use serde::{Deserialize, Serialize};

/// Upper bound on guardians per set. Signature indices are a single byte and
/// quorum math is tuned for this size.
pub const MAX_GUARDIANS: usize = 19;

/// A guardian set at a given index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardianSet {
    /// Monotonic set index.
    pub index: u32,
    /// Guardian addresses in signing-index order.
    pub guardians: Vec<GuardianAddress>,
    /// `None` while the set is active.
    pub expiration_time: Option<Timestamp>,
}

impl GuardianSet {
    /// Create an active (non-expiring) set.
    pub fn new(index: u32, guardians: Vec<GuardianAddress>) -> Self {
        Self {
            index,
            guardians,
            expiration_time: None,
        }
    }

    /// Number of guardians.
    pub fn len(&self) -> usize {
        self.guardians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guardians.is_empty()
    }

    /// Minimum number of signatures: `floor(2N/3) + 1`.
    pub fn quorum(&self) -> usize {
        self.guardians.len() * 2 / 3 + 1
    }

    /// Address at `guardian_index`, if in range.
    pub fn guardian(&self, guardian_index: u8) -> Option<&GuardianAddress> {
        self.guardians.get(guardian_index as usize)
    }

    /// Whether a message stamped `at` can no longer be verified by this set.
    ///
    /// The expiration instant itself is still valid.
    pub fn is_expired_at(&self, at: Timestamp) -> bool {
        match self.expiration_time {
            Some(expiration) => at > expiration,
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.expiration_time.is_none()
    }
}
