//! # VAA Submission
//!
//! Parse, verify, then route a VAA by emitter:
//!
//! | Emitter | Module | Handler |
//! |---------|--------|---------|
//! | governance | `Core` | core governance (fees, upgrades, guardian rotation) |
//! | governance | `TokenBridge` | token bridge governance (chain registration) |
//! | anything else | | token bridge redeem |
//!
//! Every successful route consumes exactly one claim in the node's ledger.

use bridge_telemetry::{
    metric_inc, CLAIMS_RECORDED, GOVERNANCE_ACTIONS, REPLAYS_REJECTED, TRANSFERS_COMPLETED,
    VAAS_REJECTED, VAAS_VERIFIED,
};
use bridge_types::{ExternalAddress, Vaa};
use gb_02_vaa_verification::{VaaVerificationApi, VerificationError, VerifiedVaa};
use gb_04_token_bridge::{GovernanceEffect, RedeemEffect};
use gb_05_governance::{
    module_name, CoreEffect, GovernanceError, GovernancePayload, CORE_MODULE, TOKEN_BRIDGE_MODULE,
};
use tracing::{debug, info, warn};

use crate::container::BridgeNode;
use crate::errors::BridgeError;

/// What an executed VAA did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Core(CoreEffect),
    TokenBridgeGovernance(GovernanceEffect),
    Redeemed(RedeemEffect),
}

impl SubmitOutcome {
    /// Label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Core(_) => "core_governance",
            Self::TokenBridgeGovernance(_) => "token_bridge_governance",
            Self::Redeemed(effect) => effect.kind(),
        }
    }
}

impl BridgeNode {
    /// Execute one VAA. `relayer` receives the relayer fee of a transfer and
    /// must be the recipient of a transfer with payload.
    pub fn submit_vaa(
        &self,
        bytes: &[u8],
        relayer: ExternalAddress,
    ) -> Result<SubmitOutcome, BridgeError> {
        let vaa = parse(bytes)?;
        let verified = record_verification(self.verifier.verify(vaa))?;
        self.apply(&verified, relayer)
    }

    /// Execute several VAAs. Signatures are checked in parallel against one
    /// registry snapshot; effects are applied one at a time in input order.
    pub fn submit_batch<B: AsRef<[u8]>>(
        &self,
        batch: &[B],
        relayer: ExternalAddress,
    ) -> Vec<Result<SubmitOutcome, BridgeError>> {
        let mut slots: Vec<Option<BridgeError>> = Vec::with_capacity(batch.len());
        let mut vaas = Vec::new();
        for bytes in batch {
            match parse(bytes.as_ref()) {
                Ok(vaa) => {
                    vaas.push(vaa);
                    slots.push(None);
                }
                Err(e) => slots.push(Some(e)),
            }
        }

        let mut verified = self.verifier.verify_batch(vaas).into_iter();
        slots
            .into_iter()
            .filter_map(|slot| match slot {
                Some(parse_error) => Some(Err(parse_error)),
                None => verified.next().map(|result| {
                    record_verification(result).and_then(|vaa| self.apply(&vaa, relayer))
                }),
            })
            .collect()
    }

    /// Route a verified VAA to its handler.
    pub fn apply(
        &self,
        vaa: &VerifiedVaa,
        relayer: ExternalAddress,
    ) -> Result<SubmitOutcome, BridgeError> {
        let result = self.route(vaa, relayer);
        match &result {
            Ok(outcome) => {
                metric_inc!(CLAIMS_RECORDED);
                match outcome {
                    SubmitOutcome::Core(_) => metric_inc!(GOVERNANCE_ACTIONS, &["Core"]),
                    SubmitOutcome::TokenBridgeGovernance(_) => {
                        metric_inc!(GOVERNANCE_ACTIONS, &["TokenBridge"])
                    }
                    SubmitOutcome::Redeemed(effect) => {
                        metric_inc!(TRANSFERS_COMPLETED, &[effect.kind()])
                    }
                }
                info!(
                    emitter = %vaa.emitter(),
                    sequence = vaa.sequence(),
                    kind = outcome.kind(),
                    "VAA executed"
                );
            }
            Err(e) if e.is_replay() => {
                metric_inc!(REPLAYS_REJECTED);
                debug!(emitter = %vaa.emitter(), sequence = vaa.sequence(), "VAA already executed");
            }
            Err(e) => {
                warn!(
                    emitter = %vaa.emitter(),
                    sequence = vaa.sequence(),
                    disposition = %e.disposition(),
                    "VAA not executed: {e}"
                );
            }
        }
        result
    }

    fn route(
        &self,
        vaa: &VerifiedVaa,
        relayer: ExternalAddress,
    ) -> Result<SubmitOutcome, BridgeError> {
        if !self.executor.is_governance(vaa) {
            let effect = self.token_bridge.redeem(vaa, relayer, &self.ledger)?;
            return Ok(SubmitOutcome::Redeemed(effect));
        }

        let payload = GovernancePayload::decode(vaa.payload()).map_err(GovernanceError::from)?;
        if payload.module == CORE_MODULE {
            let effect = self.executor.execute(vaa, &self.ledger, self.core.as_ref())?;
            Ok(SubmitOutcome::Core(effect))
        } else if payload.module == TOKEN_BRIDGE_MODULE {
            let effect = self.executor.execute(vaa, &self.ledger, &self.token_bridge)?;
            Ok(SubmitOutcome::TokenBridgeGovernance(effect))
        } else {
            Err(GovernanceError::InvalidModule {
                expected: "Core or TokenBridge".into(),
                got: module_name(&payload.module),
            }
            .into())
        }
    }
}

fn parse(bytes: &[u8]) -> Result<Vaa, BridgeError> {
    Vaa::parse(bytes).map_err(|e| {
        debug!(len = bytes.len(), "unparsable VAA: {e}");
        metric_inc!(VAAS_REJECTED, &["malformed"]);
        BridgeError::from(e)
    })
}

fn record_verification(
    result: Result<VerifiedVaa, VerificationError>,
) -> Result<VerifiedVaa, BridgeError> {
    match result {
        Ok(vaa) => {
            metric_inc!(VAAS_VERIFIED);
            Ok(vaa)
        }
        Err(e) => {
            metric_inc!(VAAS_REJECTED, &[e.reason()]);
            Err(e.into())
        }
    }
}
