//! # Replay Protection Errors

use thiserror::Error;

use super::entities::ClaimKey;

/// Claim store failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimStoreError {
    /// Commit or release on a claim that is not pending
    #[error("Claim {0} is not reserved")]
    NotReserved(String),

    /// Backend unavailable
    #[error("Claim store unavailable: {0}")]
    Unavailable(String),
}

/// Errors returned by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// The message was already executed, or is being executed right now.
    #[error("VAA already executed: {0}")]
    AlreadyExecuted(ClaimKey),

    #[error("Claim store error: {0}")]
    Store(#[from] ClaimStoreError),
}
