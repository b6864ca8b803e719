//! Inbound: completing transfers and applying attestations.

use bridge_types::{ChainId, ExternalAddress, U256};
use gb_02_vaa_verification::VerifiedVaa;
use gb_03_replay_protection::{AddressDeriver, ClaimKey, ClaimStore, ReplayProtectionLedger};
use tracing::{info, warn};

use super::TokenBridge;
use crate::domain::entities::{RedeemEffect, TokenBridgeState, TokenId, WrappedAsset};
use crate::domain::errors::TokenBridgeError;
use crate::domain::normalizer::{from_wire, validate_relayer_fee};
use crate::domain::payload::{AssetMeta, TransferPayload};
use crate::ports::outbound::MessagePublisher;

/// A transfer that passed every stateless check, in wire units.
struct InboundTransfer {
    token: TokenId,
    recipient: ExternalAddress,
    amount: u64,
    fee: u64,
    payload: Option<Vec<u8>>,
}

impl<P: MessagePublisher> TokenBridge<P> {
    /// Redeem a token bridge VAA.
    ///
    /// `redeemer` receives the relayer fee of a plain transfer and must be
    /// the recipient of a transfer with payload. Checks run before the VAA is
    /// claimed; a failing effect leaves the VAA unclaimed.
    pub fn redeem<S, D>(
        &self,
        vaa: &VerifiedVaa,
        redeemer: ExternalAddress,
        ledger: &ReplayProtectionLedger<S, D>,
    ) -> Result<RedeemEffect, TokenBridgeError>
    where
        S: ClaimStore,
        D: AddressDeriver,
    {
        let payload = TransferPayload::decode(vaa.payload())?;

        let registered = self.registered_emitter(vaa.emitter_chain());
        if registered.as_ref() != Some(vaa.emitter_address()) {
            warn!(emitter = %vaa.emitter(), "redeem from unregistered emitter");
            return Err(TokenBridgeError::UnregisteredEmitter(vaa.emitter()));
        }

        let key = ClaimKey::from_emitter(vaa.emitter(), vaa.sequence());
        let effect = match payload {
            TransferPayload::Transfer(t) => {
                let inbound = self.check_inbound(
                    TokenId::new(t.token_chain, t.token_address),
                    t.recipient,
                    t.recipient_chain,
                    t.amount,
                    t.fee,
                    None,
                )?;
                ledger.claim_and_apply(&key, || self.complete_transfer(inbound, redeemer))?
            }
            TransferPayload::TransferWithPayload(t) => {
                if redeemer != t.recipient {
                    return Err(TokenBridgeError::InvalidRedeemer);
                }
                let inbound = self.check_inbound(
                    TokenId::new(t.token_chain, t.token_address),
                    t.recipient,
                    t.recipient_chain,
                    t.amount,
                    U256::zero(),
                    Some(t.payload),
                )?;
                ledger.claim_and_apply(&key, || self.complete_transfer(inbound, redeemer))?
            }
            TransferPayload::AssetMeta(meta) => {
                if meta.token_chain == self.chain_id {
                    return Err(TokenBridgeError::NativeAttestation);
                }
                let sequence = vaa.sequence();
                ledger.claim_and_apply(&key, || self.apply_attestation(&meta, sequence))?
            }
        };

        info!(
            kind = effect.kind(),
            emitter = %vaa.emitter(),
            sequence = vaa.sequence(),
            "token bridge VAA redeemed"
        );
        Ok(effect)
    }

    fn check_inbound(
        &self,
        token: TokenId,
        recipient: ExternalAddress,
        recipient_chain: ChainId,
        amount: U256,
        fee: U256,
        payload: Option<Vec<u8>>,
    ) -> Result<InboundTransfer, TokenBridgeError> {
        if recipient_chain != self.chain_id {
            return Err(TokenBridgeError::InvalidRecipientChain {
                recipient_chain,
                current: self.chain_id,
            });
        }
        validate_relayer_fee(amount, fee)?;
        Ok(InboundTransfer {
            token,
            recipient,
            amount: wire_u64(amount)?,
            fee: wire_u64(fee)?,
            payload,
        })
    }

    fn complete_transfer(
        &self,
        inbound: InboundTransfer,
        relayer: ExternalAddress,
    ) -> Result<RedeemEffect, TokenBridgeError> {
        let mut state = self.state.lock();
        let token = inbound.token;

        let (amount, fee) = if token.chain == self.chain_id {
            release_native(&mut state, &token, inbound.amount, inbound.fee)?
        } else {
            mint_wrapped(&mut state, &token, inbound.amount, inbound.fee)?
        };

        // fee <= amount was checked on the wire values and scaling preserves it
        state.credit(token, inbound.recipient, amount - fee);
        state.credit(token, relayer, fee);

        Ok(RedeemEffect::Completed {
            token,
            recipient: inbound.recipient,
            amount: amount - fee,
            fee,
            relayer,
            payload: inbound.payload,
        })
    }

    fn apply_attestation(
        &self,
        meta: &AssetMeta,
        sequence: u64,
    ) -> Result<RedeemEffect, TokenBridgeError> {
        let mut state = self.state.lock();
        let token = TokenId::new(meta.token_chain, meta.token_address);

        if let Some(existing) = state.wrapped_assets.get_mut(&token) {
            if sequence <= existing.last_attest_sequence {
                return Err(TokenBridgeError::AlreadyAttested {
                    token: token.to_string(),
                    sequence: existing.last_attest_sequence,
                });
            }
            existing.symbol = meta.symbol_str();
            existing.name = meta.name_str();
            existing.last_attest_sequence = sequence;
            return Ok(RedeemEffect::WrappedUpdated { token, sequence });
        }

        let decimals = WrappedAsset::wrapped_decimals(meta.decimals);
        state.wrapped_assets.insert(
            token,
            WrappedAsset {
                origin: token,
                decimals,
                symbol: meta.symbol_str(),
                name: meta.name_str(),
                last_attest_sequence: sequence,
                supply: U256::zero(),
            },
        );
        Ok(RedeemEffect::WrappedCreated { token, decimals })
    }
}

/// Wire amounts are bounded by 64 bits.
fn wire_u64(value: U256) -> Result<u64, TokenBridgeError> {
    if value > U256::from(u64::MAX) {
        return Err(TokenBridgeError::AmountOverflow);
    }
    Ok(value.low_u64())
}

/// Release native tokens from custody, returning (amount, fee) in native
/// units.
fn release_native(
    state: &mut TokenBridgeState,
    token: &TokenId,
    wire_amount: u64,
    wire_fee: u64,
) -> Result<(U256, U256), TokenBridgeError> {
    let decimals = state
        .native_assets
        .get(&token.address)
        .map(|asset| asset.decimals)
        .ok_or_else(|| TokenBridgeError::UnknownAsset(token.to_string()))?;

    let amount = from_wire(wire_amount, decimals)?;
    let fee = from_wire(wire_fee, decimals)?;

    let held = state.custody_of(&token.address);
    if amount > held {
        return Err(TokenBridgeError::InsufficientCustody {
            requested: amount,
            held,
        });
    }
    state.custody.insert(token.address, held - amount);
    Ok((amount, fee))
}

/// Mint wrapped tokens; wrapped units equal wire units.
fn mint_wrapped(
    state: &mut TokenBridgeState,
    token: &TokenId,
    wire_amount: u64,
    wire_fee: u64,
) -> Result<(U256, U256), TokenBridgeError> {
    let wrapped = state
        .wrapped_assets
        .get_mut(token)
        .ok_or_else(|| TokenBridgeError::WrappedNotAttested(token.to_string()))?;

    let amount = U256::from(wire_amount);
    wrapped.supply = wrapped
        .supply
        .checked_add(amount)
        .ok_or(TokenBridgeError::AmountOverflow)?;
    Ok((amount, U256::from(wire_fee)))
}
