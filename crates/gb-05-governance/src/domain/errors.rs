//! # Governance Errors

use bridge_types::{ChainId, DecodeError, Emitter, U256};
use gb_01_guardian_sets::GuardianSetError;
use gb_03_replay_protection::ReplayError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GovernanceError {
    /// VAA was not emitted by the governance emitter
    #[error("Invalid governance emitter: {0}")]
    InvalidGovernanceEmitter(Emitter),

    /// Payload addresses another module
    #[error("Invalid module: expected {expected}, got {got}")]
    InvalidModule { expected: String, got: String },

    /// Payload targets another chain
    #[error("Invalid target chain {target} (this chain is {current})")]
    InvalidTargetChain { target: ChainId, current: ChainId },

    /// Unknown action for the module
    #[error("Invalid action {action} for module {module}")]
    InvalidAction { module: String, action: u8 },

    #[error("Malformed governance payload: {0}")]
    Malformed(#[from] DecodeError),

    /// Guardian set upgrades must be signed by the active set
    #[error("Guardian set upgrade signed by set {signed_by}, active set is {active}")]
    NotCurrentGuardianSet { signed_by: u32, active: u32 },

    #[error("Insufficient fees: requested {requested}, available {available}")]
    InsufficientFees { requested: U256, available: U256 },

    #[error(transparent)]
    Replay(#[from] ReplayError),

    #[error("Guardian set: {0}")]
    GuardianSet(#[from] GuardianSetError),
}
