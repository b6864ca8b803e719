//! # Token Bridge Service
//!
//! Holds the token bridge ledger for one chain and exposes:
//! 1. `redeem` for inbound transfers and attestations
//! 2. `transfer` and `attest_token` for outbound messages
//! 3. the `TokenBridge` governance handler (chain registration, upgrades)
//!
//! Inbound VAAs are claimed in the replay protection ledger; every state
//! change of a redeem happens inside that claim.

mod governance;
mod redeem;
mod transfer;

use bridge_types::{ChainId, ExternalAddress, U256};
use parking_lot::Mutex;
use tracing::info;

use crate::adapters::publisher::InMemoryPublisher;
use crate::domain::entities::{NativeAsset, TokenBridgeState, TokenId, WrappedAsset};
use crate::domain::errors::TokenBridgeError;
use crate::ports::outbound::MessagePublisher;

/// Consistency level requested for published messages.
pub const DEFAULT_CONSISTENCY_LEVEL: u8 = 1;

/// Token bridge for one chain.
pub struct TokenBridge<P: MessagePublisher = InMemoryPublisher> {
    /// Chain this bridge runs on.
    pub(crate) chain_id: ChainId,
    /// Emitter address of this bridge's outbound messages.
    pub(crate) emitter_address: ExternalAddress,
    pub(crate) consistency_level: u8,
    pub(crate) state: Mutex<TokenBridgeState>,
    pub(crate) publisher: P,
}

impl<P: MessagePublisher> TokenBridge<P> {
    pub fn new(chain_id: ChainId, emitter_address: ExternalAddress, publisher: P) -> Self {
        Self {
            chain_id,
            emitter_address,
            consistency_level: DEFAULT_CONSISTENCY_LEVEL,
            state: Mutex::new(TokenBridgeState::default()),
            publisher,
        }
    }

    pub fn with_consistency_level(mut self, level: u8) -> Self {
        self.consistency_level = level;
        self
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn emitter_address(&self) -> ExternalAddress {
        self.emitter_address
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Snapshot of the full ledger.
    pub fn state(&self) -> TokenBridgeState {
        self.state.lock().clone()
    }

    /// Make a token native to this chain transferable.
    pub fn register_native_asset(
        &self,
        address: ExternalAddress,
        decimals: u8,
        symbol: &str,
        name: &str,
    ) {
        let asset = NativeAsset {
            address,
            decimals,
            symbol: symbol.to_owned(),
            name: name.to_owned(),
        };
        self.state.lock().native_assets.insert(address, asset);
        info!(token = %hex::encode(address), decimals, symbol, "native asset registered");
    }

    /// Credit `holder` with native tokens held outside the bridge.
    pub fn deposit(
        &self,
        address: ExternalAddress,
        holder: ExternalAddress,
        amount: U256,
    ) -> Result<(), TokenBridgeError> {
        let mut state = self.state.lock();
        if !state.native_assets.contains_key(&address) {
            return Err(TokenBridgeError::UnknownAsset(hex::encode(address)));
        }
        state.credit(TokenId::new(self.chain_id, address), holder, amount);
        Ok(())
    }

    /// Credit `holder` with host currency for paying message fees.
    pub fn fund_message_fees(&self, holder: ExternalAddress, amount: U256) {
        let mut state = self.state.lock();
        let funds = state.fee_funds.entry(holder).or_default();
        *funds = funds.saturating_add(amount);
    }

    pub fn message_fee_funds(&self, holder: &ExternalAddress) -> U256 {
        self.state.lock().fee_funds_of(holder)
    }

    pub fn balance_of(&self, token: &TokenId, holder: &ExternalAddress) -> U256 {
        self.state.lock().balance_of(token, holder)
    }

    pub fn custody_of(&self, address: &ExternalAddress) -> U256 {
        self.state.lock().custody_of(address)
    }

    pub fn wrapped_asset(&self, origin: &TokenId) -> Option<WrappedAsset> {
        self.state.lock().wrapped_assets.get(origin).cloned()
    }

    /// Trusted token bridge emitter on `chain`.
    pub fn registered_emitter(&self, chain: ChainId) -> Option<ExternalAddress> {
        self.state.lock().registered_emitters.get(&chain).copied()
    }

    /// Publish a token bridge payload from this bridge's emitter.
    pub(crate) fn publish(
        &self,
        nonce: u32,
        payload: Vec<u8>,
        message_fee: U256,
    ) -> Result<u64, TokenBridgeError> {
        let sequence = self.publisher.publish(
            self.emitter_address,
            nonce,
            payload,
            self.consistency_level,
            message_fee,
        )?;
        Ok(sequence)
    }
}
