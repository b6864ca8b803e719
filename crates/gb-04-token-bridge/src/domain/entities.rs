//! # Token Bridge Entities

use bridge_types::{ChainId, ExternalAddress, U256};
use std::collections::HashMap;
use std::fmt;

use super::errors::TokenBridgeError;
use super::normalizer::WIRE_DECIMALS;

/// A token identified by its origin chain and address there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenId {
    pub chain: ChainId,
    pub address: ExternalAddress,
}

impl TokenId {
    pub fn new(chain: ChainId, address: ExternalAddress) -> Self {
        Self { chain, address }
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain, hex::encode(self.address))
    }
}

/// A token native to this chain that the bridge can lock in custody.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NativeAsset {
    pub address: ExternalAddress,
    pub decimals: u8,
    pub symbol: String,
    pub name: String,
}

/// Local representation of a foreign token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrappedAsset {
    pub origin: TokenId,
    /// `min(origin decimals, 8)`.
    pub decimals: u8,
    pub symbol: String,
    pub name: String,
    /// Sequence of the attestation last applied.
    pub last_attest_sequence: u64,
    /// Minted minus burned.
    pub supply: U256,
}

impl WrappedAsset {
    pub fn wrapped_decimals(origin_decimals: u8) -> u8 {
        origin_decimals.min(WIRE_DECIMALS)
    }
}

/// Ledger of everything the token bridge holds.
#[derive(Clone, Debug, Default)]
pub struct TokenBridgeState {
    /// Trusted token bridge emitter per foreign chain.
    pub registered_emitters: HashMap<ChainId, ExternalAddress>,
    pub native_assets: HashMap<ExternalAddress, NativeAsset>,
    pub wrapped_assets: HashMap<TokenId, WrappedAsset>,
    /// Native tokens locked by outbound transfers, in native units.
    pub custody: HashMap<ExternalAddress, U256>,
    /// Holder balances, native units for native tokens and wire units for
    /// wrapped ones.
    pub balances: HashMap<(TokenId, ExternalAddress), U256>,
    /// Host currency each account can spend on core message fees.
    pub fee_funds: HashMap<ExternalAddress, U256>,
    pub contract: Option<ExternalAddress>,
}

impl TokenBridgeState {
    pub fn balance_of(&self, token: &TokenId, holder: &ExternalAddress) -> U256 {
        self.balances
            .get(&(*token, *holder))
            .copied()
            .unwrap_or_default()
    }

    pub fn credit(&mut self, token: TokenId, holder: ExternalAddress, amount: U256) {
        if amount.is_zero() {
            return;
        }
        let balance = self.balances.entry((token, holder)).or_default();
        *balance = balance.saturating_add(amount);
    }

    /// Returns the remaining balance, or `None` when it is too small.
    pub fn debit(
        &mut self,
        token: &TokenId,
        holder: &ExternalAddress,
        amount: U256,
    ) -> Option<U256> {
        let balance = self.balances.get_mut(&(*token, *holder))?;
        let remaining = balance.checked_sub(amount)?;
        *balance = remaining;
        Some(remaining)
    }

    pub fn custody_of(&self, address: &ExternalAddress) -> U256 {
        self.custody.get(address).copied().unwrap_or_default()
    }

    pub fn fee_funds_of(&self, holder: &ExternalAddress) -> U256 {
        self.fee_funds.get(holder).copied().unwrap_or_default()
    }

    /// Fails unless `payer` can cover `message_fee`.
    pub fn check_fee_funds(
        &self,
        payer: &ExternalAddress,
        message_fee: U256,
    ) -> Result<(), TokenBridgeError> {
        let available = self.fee_funds_of(payer);
        if available < message_fee {
            return Err(TokenBridgeError::InsufficientMessageFunds {
                requested: message_fee,
                available,
            });
        }
        Ok(())
    }

    /// Take a message fee already checked with [`Self::check_fee_funds`].
    pub fn charge_fee_funds(&mut self, payer: &ExternalAddress, message_fee: U256) {
        if let Some(funds) = self.fee_funds.get_mut(payer) {
            *funds = funds.saturating_sub(message_fee);
        }
    }
}

/// Parameters of an outbound transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRequest {
    pub sender: ExternalAddress,
    pub token: TokenId,
    /// Native units for native tokens, wire units for wrapped ones.
    pub amount: U256,
    pub recipient_chain: ChainId,
    pub recipient: ExternalAddress,
    pub fee: U256,
    /// Host currency the sender pays the core bridge for publishing.
    pub message_fee: U256,
    pub nonce: u32,
    /// When set, publishes a transfer with payload (no relayer fee).
    pub payload: Option<Vec<u8>>,
}

/// Result of redeeming a token bridge VAA.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RedeemEffect {
    Completed {
        token: TokenId,
        recipient: ExternalAddress,
        /// Credited to the recipient, local units.
        amount: U256,
        /// Credited to the relayer, local units.
        fee: U256,
        relayer: ExternalAddress,
        payload: Option<Vec<u8>>,
    },
    WrappedCreated {
        token: TokenId,
        decimals: u8,
    },
    WrappedUpdated {
        token: TokenId,
        sequence: u64,
    },
}

impl RedeemEffect {
    pub fn kind(&self) -> &'static str {
        match self {
            RedeemEffect::Completed { payload: None, .. } => "transfer",
            RedeemEffect::Completed { .. } => "transfer_with_payload",
            RedeemEffect::WrappedCreated { .. } => "wrapped_created",
            RedeemEffect::WrappedUpdated { .. } => "wrapped_updated",
        }
    }
}

/// Result of a `TokenBridge` governance action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GovernanceEffect {
    ChainRegistered {
        chain: ChainId,
        emitter_address: ExternalAddress,
    },
    ContractUpgraded {
        new_contract: ExternalAddress,
    },
}
