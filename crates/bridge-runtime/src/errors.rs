//! # Runtime Errors
//!
//! [`BridgeError`] wraps every subsystem error a submitted VAA can fail
//! with. [`Disposition`] tells the submitter what to do with the VAA next.

use bridge_types::DecodeError;
use gb_02_vaa_verification::VerificationError;
use gb_03_replay_protection::ReplayError;
use gb_04_token_bridge::TokenBridgeError;
use gb_05_governance::GovernanceError;
use thiserror::Error;

use crate::container::ConfigError;

/// How a failed submission should be treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// The bytes can never be executed.
    Malformed,
    /// Already executed. Benign for relayers racing each other.
    AlreadyApplied,
    /// Authentic but not executable here, now or later.
    PermanentlyInvalid,
    /// Blocked by current state; left unclaimed and may succeed later.
    Deferred,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Malformed => "malformed",
            Self::AlreadyApplied => "already_applied",
            Self::PermanentlyInvalid => "permanently_invalid",
            Self::Deferred => "deferred",
        }
    }
}

impl std::fmt::Display for Disposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any failure of the submit pipeline.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Malformed VAA: {0}")]
    Malformed(#[from] DecodeError),

    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Governance(#[from] GovernanceError),

    #[error(transparent)]
    TokenBridge(#[from] TokenBridgeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BridgeError {
    pub fn disposition(&self) -> Disposition {
        match self {
            Self::Malformed(_) => Disposition::Malformed,
            Self::Verification(e) => verification_disposition(e),
            Self::Governance(e) => governance_disposition(e),
            Self::TokenBridge(e) => token_bridge_disposition(e),
            Self::Config(_) => Disposition::PermanentlyInvalid,
        }
    }

    /// Whether the VAA had already been executed.
    pub fn is_replay(&self) -> bool {
        self.disposition() == Disposition::AlreadyApplied
    }
}

fn verification_disposition(err: &VerificationError) -> Disposition {
    match err {
        VerificationError::Malformed(_) => Disposition::Malformed,
        VerificationError::GuardianSetNotFound(_)
        | VerificationError::GuardianSetExpired { .. }
        | VerificationError::InvalidSignatureOrder { .. }
        | VerificationError::InvalidSignature { .. }
        | VerificationError::InsufficientQuorum { .. }
        | VerificationError::Registry(_) => Disposition::PermanentlyInvalid,
    }
}

fn replay_disposition(err: &ReplayError) -> Disposition {
    match err {
        ReplayError::AlreadyExecuted(_) => Disposition::AlreadyApplied,
        ReplayError::Store(_) => Disposition::Deferred,
    }
}

fn governance_disposition(err: &GovernanceError) -> Disposition {
    match err {
        GovernanceError::InvalidAction { .. } | GovernanceError::Malformed(_) => {
            Disposition::Malformed
        }
        GovernanceError::InvalidGovernanceEmitter(_)
        | GovernanceError::InvalidModule { .. }
        | GovernanceError::InvalidTargetChain { .. }
        | GovernanceError::NotCurrentGuardianSet { .. }
        | GovernanceError::GuardianSet(_) => Disposition::PermanentlyInvalid,
        GovernanceError::InsufficientFees { .. } => Disposition::Deferred,
        GovernanceError::Replay(e) => replay_disposition(e),
    }
}

fn token_bridge_disposition(err: &TokenBridgeError) -> Disposition {
    match err {
        TokenBridgeError::InvalidRelayerFee { .. }
        | TokenBridgeError::AmountOverflow
        | TokenBridgeError::Malformed(_)
        | TokenBridgeError::ZeroAmount
        | TokenBridgeError::FeeWithPayload => Disposition::Malformed,
        TokenBridgeError::UnregisteredEmitter(_)
        | TokenBridgeError::InvalidRecipientChain { .. }
        | TokenBridgeError::NativeAttestation
        | TokenBridgeError::ChainAlreadyRegistered(_)
        | TokenBridgeError::InvalidRegistration(_)
        | TokenBridgeError::AlreadyAttested { .. } => Disposition::PermanentlyInvalid,
        TokenBridgeError::InvalidRedeemer
        | TokenBridgeError::UnknownAsset(_)
        | TokenBridgeError::WrappedNotAttested(_)
        | TokenBridgeError::InsufficientBalance { .. }
        | TokenBridgeError::InsufficientCustody { .. }
        | TokenBridgeError::InsufficientMessageFunds { .. }
        | TokenBridgeError::Publish(_) => Disposition::Deferred,
        TokenBridgeError::Governance(e) => governance_disposition(e),
        TokenBridgeError::Replay(e) => replay_disposition(e),
    }
}
