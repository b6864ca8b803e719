//! Outbound: locking or burning tokens and publishing transfers.

use bridge_types::{ExternalAddress, U256};
use tracing::info;

use super::TokenBridge;
use crate::domain::entities::{TokenBridgeState, TokenId, TransferRequest};
use crate::domain::errors::TokenBridgeError;
use crate::domain::normalizer::{to_wire, truncate, validate_relayer_fee};
use crate::domain::payload::{fixed_string, AssetMeta, Transfer, TransferPayload, TransferWithPayload};
use crate::ports::outbound::MessagePublisher;

impl<P: MessagePublisher> TokenBridge<P> {
    /// Send tokens to another chain. Returns the published sequence.
    ///
    /// Tokens native to this chain are locked in custody with their
    /// sub-wire-precision dust left with the sender. Wrapped tokens are
    /// burned. The sender also pays `message_fee` from its fee funds.
    /// Nothing changes when publishing fails.
    pub fn transfer(&self, request: TransferRequest) -> Result<u64, TokenBridgeError> {
        if request.recipient_chain == self.chain_id {
            return Err(TokenBridgeError::InvalidRecipientChain {
                recipient_chain: request.recipient_chain,
                current: self.chain_id,
            });
        }
        validate_relayer_fee(request.amount, request.fee)?;
        if request.payload.is_some() && !request.fee.is_zero() {
            return Err(TokenBridgeError::FeeWithPayload);
        }

        let mut state = self.state.lock();
        let (amount, wire_amount, wire_fee) = if request.token.chain == self.chain_id {
            self.prepare_native(&state, &request)?
        } else {
            prepare_wrapped(&state, &request)?
        };

        let available = state.balance_of(&request.token, &request.sender);
        if available < amount {
            return Err(TokenBridgeError::InsufficientBalance {
                requested: amount,
                available,
            });
        }
        state.check_fee_funds(&request.sender, request.message_fee)?;

        let payload = outbound_payload(&request, wire_amount, wire_fee);
        let sequence = self.publish(request.nonce, payload.encode(), request.message_fee)?;

        let token = request.token;
        // balances checked above
        state.charge_fee_funds(&request.sender, request.message_fee);
        state.debit(&token, &request.sender, amount);
        if token.chain == self.chain_id {
            let held = state.custody.entry(token.address).or_default();
            *held = held.saturating_add(amount);
        } else if let Some(wrapped) = state.wrapped_assets.get_mut(&token) {
            wrapped.supply = wrapped.supply.saturating_sub(amount);
        }

        info!(
            kind = payload.kind(),
            %token,
            wire_amount,
            recipient_chain = %request.recipient_chain,
            sequence,
            "transfer published"
        );
        Ok(sequence)
    }

    /// Publish metadata for a native token so other chains can wrap it.
    /// `payer` covers `message_fee` from its fee funds.
    pub fn attest_token(
        &self,
        address: ExternalAddress,
        payer: ExternalAddress,
        message_fee: U256,
        nonce: u32,
    ) -> Result<u64, TokenBridgeError> {
        let mut state = self.state.lock();
        let asset = state
            .native_assets
            .get(&address)
            .ok_or_else(|| TokenBridgeError::UnknownAsset(hex::encode(address)))?;
        let meta = AssetMeta {
            token_address: address,
            token_chain: self.chain_id,
            decimals: asset.decimals,
            symbol: fixed_string(&asset.symbol),
            name: fixed_string(&asset.name),
        };
        state.check_fee_funds(&payer, message_fee)?;

        let sequence = self.publish(nonce, TransferPayload::AssetMeta(meta).encode(), message_fee)?;
        state.charge_fee_funds(&payer, message_fee);
        info!(token = %hex::encode(address), sequence, %message_fee, "asset attested");
        Ok(sequence)
    }

    /// (amount to lock, wire amount, wire fee) for a native token.
    fn prepare_native(
        &self,
        state: &TokenBridgeState,
        request: &TransferRequest,
    ) -> Result<(U256, u64, u64), TokenBridgeError> {
        let decimals = state
            .native_assets
            .get(&request.token.address)
            .map(|asset| asset.decimals)
            .ok_or_else(|| TokenBridgeError::UnknownAsset(request.token.to_string()))?;

        let amount = truncate(request.amount, decimals);
        if amount.is_zero() {
            return Err(TokenBridgeError::ZeroAmount);
        }
        let fee = truncate(request.fee, decimals);
        Ok((amount, to_wire(amount, decimals)?, to_wire(fee, decimals)?))
    }
}

/// (amount to burn, wire amount, wire fee) for a wrapped token.
fn prepare_wrapped(
    state: &TokenBridgeState,
    request: &TransferRequest,
) -> Result<(U256, u64, u64), TokenBridgeError> {
    let wrapped = state
        .wrapped_assets
        .get(&request.token)
        .ok_or_else(|| TokenBridgeError::WrappedNotAttested(request.token.to_string()))?;

    if request.amount.is_zero() {
        return Err(TokenBridgeError::ZeroAmount);
    }
    let wire_amount = to_wire(request.amount, wrapped.decimals)?;
    let wire_fee = to_wire(request.fee, wrapped.decimals)?;
    Ok((request.amount, wire_amount, wire_fee))
}

fn outbound_payload(request: &TransferRequest, wire_amount: u64, wire_fee: u64) -> TransferPayload {
    let token: &TokenId = &request.token;
    match &request.payload {
        Some(data) => TransferPayload::TransferWithPayload(TransferWithPayload {
            amount: U256::from(wire_amount),
            token_address: token.address,
            token_chain: token.chain,
            recipient: request.recipient,
            recipient_chain: request.recipient_chain,
            sender_address: request.sender,
            payload: data.clone(),
        }),
        None => TransferPayload::Transfer(Transfer {
            amount: U256::from(wire_amount),
            token_address: token.address,
            token_chain: token.chain,
            recipient: request.recipient,
            recipient_chain: request.recipient_chain,
            fee: U256::from(wire_fee),
        }),
    }
}
