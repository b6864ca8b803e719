//! # Guardian Set Errors

use bridge_types::Timestamp;
use thiserror::Error;

/// Errors from guardian set lookup and rotation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardianSetError {
    /// No set was ever installed at this index.
    #[error("Guardian set {0} not found")]
    NotFound(u32),

    /// The set expired before the message timestamp.
    #[error("Guardian set {index} expired at {expiration_time}, message timestamp {timestamp}")]
    Expired {
        index: u32,
        expiration_time: Timestamp,
        timestamp: Timestamp,
    },

    /// Rotation must install exactly `active + 1`.
    #[error("Invalid guardian set index: expected {expected}, got {got}")]
    InvalidIndex { expected: u32, got: u32 },

    /// The active set sits at `u32::MAX`; no further index exists.
    #[error("Guardian set index exhausted at {0}")]
    IndexExhausted(u32),

    #[error("Guardian set is empty")]
    Empty,

    #[error("Too many guardians: {count} (max {max})")]
    TooManyGuardians { count: usize, max: usize },

    #[error("Duplicate guardian {address} at position {position}")]
    DuplicateGuardian { position: usize, address: String },

    #[error("Zero guardian address at position {0}")]
    ZeroAddress(usize),
}
