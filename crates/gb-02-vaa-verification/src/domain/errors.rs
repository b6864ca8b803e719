//! # Verification Errors
//!
//! Every variant except `Malformed` is a permanent rejection: the same bytes
//! will never verify.

use bridge_types::{DecodeError, Timestamp};
use gb_01_guardian_sets::GuardianSetError;
use thiserror::Error;

/// Errors that can occur while verifying a VAA.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerificationError {
    /// The VAA references a guardian set that was never installed
    #[error("Guardian set {0} not found")]
    GuardianSetNotFound(u32),

    /// The guardian set expired before the VAA timestamp
    #[error("Guardian set {index} expired at {expiration_time} (VAA timestamp {timestamp})")]
    GuardianSetExpired {
        index: u32,
        expiration_time: Timestamp,
        timestamp: Timestamp,
    },

    /// Guardian indices are not strictly increasing
    #[error("Signature {position} has guardian index {guardian_index}, not above the previous")]
    InvalidSignatureOrder { position: usize, guardian_index: u8 },

    /// Signature does not recover to the guardian at its index
    #[error("Invalid signature for guardian index {guardian_index}")]
    InvalidSignature { guardian_index: u8 },

    /// Fewer signatures than `floor(2N/3) + 1`
    #[error("Insufficient quorum: {signatures} signatures, {required} required")]
    InsufficientQuorum { signatures: usize, required: usize },

    /// The VAA bytes could not be parsed
    #[error("Malformed VAA: {0}")]
    Malformed(#[from] DecodeError),

    /// Registry failure other than lookup
    #[error("Guardian set registry: {0}")]
    Registry(GuardianSetError),
}

impl From<GuardianSetError> for VerificationError {
    fn from(err: GuardianSetError) -> Self {
        match err {
            GuardianSetError::NotFound(index) => Self::GuardianSetNotFound(index),
            GuardianSetError::Expired {
                index,
                expiration_time,
                timestamp,
            } => Self::GuardianSetExpired {
                index,
                expiration_time,
                timestamp,
            },
            other => Self::Registry(other),
        }
    }
}

impl VerificationError {
    /// Short label for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::GuardianSetNotFound(_) => "guardian_set_not_found",
            Self::GuardianSetExpired { .. } => "guardian_set_expired",
            Self::InvalidSignatureOrder { .. } => "invalid_signature_order",
            Self::InvalidSignature { .. } => "invalid_signature",
            Self::InsufficientQuorum { .. } => "insufficient_quorum",
            Self::Malformed(_) => "malformed",
            Self::Registry(_) => "registry",
        }
    }
}
