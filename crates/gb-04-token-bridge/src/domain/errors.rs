//! # Token Bridge Errors

use bridge_types::{ChainId, DecodeError, Emitter, U256};
use gb_03_replay_protection::ReplayError;
use gb_05_governance::GovernanceError;
use thiserror::Error;

use crate::ports::outbound::PublishError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenBridgeError {
    // =========================================================================
    // Payload / amount errors (caller)
    // =========================================================================
    /// Relayer fee larger than the transferred amount
    #[error("Invalid relayer fee: fee {fee} exceeds amount {amount}")]
    InvalidRelayerFee { amount: U256, fee: U256 },

    /// Amount does not fit a 64-bit wire integer (or its native scaling
    /// overflows)
    #[error("Amount overflow")]
    AmountOverflow,

    #[error("Malformed transfer payload: {0}")]
    Malformed(#[from] DecodeError),

    /// Nothing left to send after dropping sub-wire-precision dust
    #[error("Transfer amount is zero after truncation")]
    ZeroAmount,

    /// Transfers carrying a payload have no relayer fee
    #[error("Transfers with payload cannot carry a relayer fee")]
    FeeWithPayload,

    // =========================================================================
    // Routing errors (misdirected or forged)
    // =========================================================================
    #[error("Emitter {0} is not a registered token bridge")]
    UnregisteredEmitter(Emitter),

    #[error("Transfer for chain {recipient_chain} redeemed on chain {current}")]
    InvalidRecipientChain {
        recipient_chain: ChainId,
        current: ChainId,
    },

    /// A transfer with payload may only be redeemed by its recipient
    #[error("Only the recipient may redeem a transfer with payload")]
    InvalidRedeemer,

    /// Asset metadata for a token native to this chain
    #[error("Token is native to this chain and cannot be attested here")]
    NativeAttestation,

    #[error("Chain {0} already has a registered token bridge")]
    ChainAlreadyRegistered(ChainId),

    #[error("Chain {0} cannot be registered")]
    InvalidRegistration(ChainId),

    // =========================================================================
    // State errors
    // =========================================================================
    #[error("Unknown asset {0}")]
    UnknownAsset(String),

    /// Wrapped asset must be attested before tokens can be minted
    #[error("Wrapped asset {0} not attested")]
    WrappedNotAttested(String),

    /// Attestation older than the one already applied
    #[error("Asset {token} already attested at sequence {sequence}")]
    AlreadyAttested { token: String, sequence: u64 },

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: U256, available: U256 },

    #[error("Insufficient custody: requested {requested}, held {held}")]
    InsufficientCustody { requested: U256, held: U256 },

    /// Payer cannot cover the core message fee
    #[error("Insufficient funds for message fee: requested {requested}, available {available}")]
    InsufficientMessageFunds { requested: U256, available: U256 },

    // =========================================================================
    // Collaborators
    // =========================================================================
    #[error(transparent)]
    Governance(#[from] GovernanceError),

    #[error(transparent)]
    Replay(#[from] ReplayError),

    #[error("Publish failed: {0}")]
    Publish(#[from] PublishError),
}
