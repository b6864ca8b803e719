//! `TokenBridge` governance module.

use gb_02_vaa_verification::VerifiedVaa;
use gb_05_governance::{GovernanceHandler, TOKEN_BRIDGE_MODULE};
use tracing::info;

use super::TokenBridge;
use crate::domain::actions::TokenBridgeAction;
use crate::domain::entities::GovernanceEffect;
use crate::domain::errors::TokenBridgeError;
use crate::ports::outbound::MessagePublisher;

impl<P: MessagePublisher> GovernanceHandler for TokenBridge<P> {
    type Action = TokenBridgeAction;
    type Effect = GovernanceEffect;
    type Error = TokenBridgeError;

    fn module(&self) -> [u8; 32] {
        TOKEN_BRIDGE_MODULE
    }

    fn decode_action(&self, action: u8, data: &[u8]) -> Result<TokenBridgeAction, TokenBridgeError> {
        Ok(TokenBridgeAction::decode(action, data)?)
    }

    fn apply(
        &self,
        _vaa: &VerifiedVaa,
        action: TokenBridgeAction,
    ) -> Result<GovernanceEffect, TokenBridgeError> {
        let mut state = self.state.lock();
        let effect = match action {
            TokenBridgeAction::RegisterChain {
                chain,
                emitter_address,
            } => {
                if chain == self.chain_id || chain.is_any() {
                    return Err(TokenBridgeError::InvalidRegistration(chain));
                }
                if state.registered_emitters.contains_key(&chain) {
                    return Err(TokenBridgeError::ChainAlreadyRegistered(chain));
                }
                state.registered_emitters.insert(chain, emitter_address);
                GovernanceEffect::ChainRegistered {
                    chain,
                    emitter_address,
                }
            }
            TokenBridgeAction::UpgradeContract { new_contract } => {
                state.contract = Some(new_contract);
                GovernanceEffect::ContractUpgraded { new_contract }
            }
        };
        info!(?effect, "token bridge governance applied");
        Ok(effect)
    }
}
