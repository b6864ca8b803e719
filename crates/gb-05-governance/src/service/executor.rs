//! # Governance Action Executor

use bridge_types::{ChainId, Emitter};
use gb_02_vaa_verification::VerifiedVaa;
use gb_03_replay_protection::{AddressDeriver, ClaimKey, ClaimStore, ReplayProtectionLedger};
use tracing::{info, warn};

use crate::domain::errors::GovernanceError;
use crate::domain::payload::{module_name, GovernancePayload};
use crate::ports::handler::GovernanceHandler;

/// Authorizes governance VAAs for one chain and dispatches them.
#[derive(Clone, Debug)]
pub struct GovernanceExecutor {
    chain_id: ChainId,
    governance_emitter: Emitter,
}

impl GovernanceExecutor {
    pub fn new(chain_id: ChainId, governance_emitter: Emitter) -> Self {
        Self {
            chain_id,
            governance_emitter,
        }
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn governance_emitter(&self) -> Emitter {
        self.governance_emitter
    }

    /// Whether `vaa` comes from the governance emitter.
    pub fn is_governance(&self, vaa: &VerifiedVaa) -> bool {
        vaa.emitter() == self.governance_emitter
    }

    /// Emitter, module and target chain checks, in that order.
    pub fn authorize(
        &self,
        vaa: &VerifiedVaa,
        module: &[u8; 32],
    ) -> Result<GovernancePayload, GovernanceError> {
        if !self.is_governance(vaa) {
            return Err(GovernanceError::InvalidGovernanceEmitter(vaa.emitter()));
        }

        let payload = GovernancePayload::decode(vaa.payload())?;

        if &payload.module != module {
            return Err(GovernanceError::InvalidModule {
                expected: module_name(module),
                got: module_name(&payload.module),
            });
        }

        if !payload.targets(self.chain_id) {
            return Err(GovernanceError::InvalidTargetChain {
                target: payload.target_chain,
                current: self.chain_id,
            });
        }

        Ok(payload)
    }

    /// Authorize `vaa`, claim it, and apply its action through `handler`.
    ///
    /// The action is decoded before the claim so malformed actions stay
    /// unclaimed. The effect runs inside the claim.
    pub fn execute<H, S, D>(
        &self,
        vaa: &VerifiedVaa,
        ledger: &ReplayProtectionLedger<S, D>,
        handler: &H,
    ) -> Result<H::Effect, H::Error>
    where
        H: GovernanceHandler,
        S: ClaimStore,
        D: AddressDeriver,
    {
        let module = handler.module();
        let payload = self.authorize(vaa, &module).inspect_err(|e| {
            warn!(emitter = %vaa.emitter(), sequence = vaa.sequence(), "governance VAA rejected: {e}");
        })?;

        let action = handler.decode_action(payload.action, &payload.action_data)?;

        let key = ClaimKey::from_emitter(vaa.emitter(), vaa.sequence());
        let effect = ledger.claim_and_apply(&key, || handler.apply(vaa, action))?;

        info!(
            module = %module_name(&module),
            action = payload.action,
            sequence = vaa.sequence(),
            "governance action executed"
        );
        Ok(effect)
    }
}
