//! # Core Bridge Governance
//!
//! State owned by the core module (message fee, collected fees, contract
//! implementation) and the handler applying `Core` actions to it and to the
//! guardian set registry.
//!
//! Every `Core` action must be signed by the active guardian set. A
//! superseded set still verifies during its grace period but cannot govern.

use bridge_types::{ExternalAddress, GuardianAddress, U256};
use gb_01_guardian_sets::GuardianSetRegistry;
use gb_02_vaa_verification::{SharedRegistry, VerifiedVaa};
use parking_lot::{Mutex, RwLockReadGuard};
use tracing::{debug, info};

use crate::adapters::clock::SystemTimeSource;
use crate::domain::core_actions::CoreAction;
use crate::domain::errors::GovernanceError;
use crate::domain::payload::CORE_MODULE;
use crate::ports::handler::GovernanceHandler;
use crate::ports::outbound::TimeSource;

/// Mutable core bridge configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoreBridgeState {
    /// Fee charged per published message.
    pub message_fee: U256,
    /// Fees collected and not yet transferred out.
    pub collected_fees: U256,
    /// Current contract implementation, if ever upgraded.
    pub contract: Option<ExternalAddress>,
}

/// Result of a core action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreEffect {
    ContractUpgraded {
        new_contract: ExternalAddress,
    },
    GuardianSetRotated {
        previous_index: u32,
        new_index: u32,
    },
    MessageFeeSet {
        fee: U256,
    },
    FeesTransferred {
        amount: U256,
        recipient: ExternalAddress,
    },
}

/// Handler for the `Core` governance module.
pub struct CoreGovernance<T: TimeSource = SystemTimeSource> {
    registry: SharedRegistry,
    state: Mutex<CoreBridgeState>,
    clock: T,
}

impl CoreGovernance {
    pub fn new(registry: SharedRegistry) -> Self {
        Self::with_clock(registry, SystemTimeSource)
    }
}

impl<T: TimeSource> CoreGovernance<T> {
    pub fn with_clock(registry: SharedRegistry, clock: T) -> Self {
        Self {
            registry,
            state: Mutex::new(CoreBridgeState::default()),
            clock,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CoreBridgeState {
        self.state.lock().clone()
    }

    pub fn message_fee(&self) -> U256 {
        self.state.lock().message_fee
    }

    /// Accept `paid` as the fee for publishing one message.
    pub fn collect_message_fee(&self, paid: U256) -> Result<(), GovernanceError> {
        let mut state = self.state.lock();
        if paid < state.message_fee {
            return Err(GovernanceError::InsufficientFees {
                requested: state.message_fee,
                available: paid,
            });
        }
        state.collected_fees = state.collected_fees.saturating_add(paid);
        debug!(%paid, collected = %state.collected_fees, "message fee collected");
        Ok(())
    }

    /// Read guard on the registry, held while a non-rotating action applies.
    fn require_active_set(
        &self,
        vaa: &VerifiedVaa,
    ) -> Result<RwLockReadGuard<'_, GuardianSetRegistry>, GovernanceError> {
        let registry = self.registry.read();
        signed_by_active(vaa, registry.active_index())?;
        Ok(registry)
    }

    fn rotate_guardian_set(
        &self,
        vaa: &VerifiedVaa,
        new_index: u32,
        guardians: Vec<GuardianAddress>,
    ) -> Result<CoreEffect, GovernanceError> {
        let mut registry = self.registry.write();
        let active = registry.active_index();
        signed_by_active(vaa, active)?;

        registry.rotate(new_index, guardians, self.clock.now())?;
        Ok(CoreEffect::GuardianSetRotated {
            previous_index: active,
            new_index,
        })
    }
}

fn signed_by_active(vaa: &VerifiedVaa, active: u32) -> Result<(), GovernanceError> {
    if vaa.guardian_set_index() != active {
        return Err(GovernanceError::NotCurrentGuardianSet {
            signed_by: vaa.guardian_set_index(),
            active,
        });
    }
    Ok(())
}

impl<T: TimeSource> GovernanceHandler for CoreGovernance<T> {
    type Action = CoreAction;
    type Effect = CoreEffect;
    type Error = GovernanceError;

    fn module(&self) -> [u8; 32] {
        CORE_MODULE
    }

    fn decode_action(&self, action: u8, data: &[u8]) -> Result<CoreAction, GovernanceError> {
        CoreAction::decode(action, data)
    }

    fn apply(&self, vaa: &VerifiedVaa, action: CoreAction) -> Result<CoreEffect, GovernanceError> {
        let effect = match action {
            CoreAction::ContractUpgrade { new_contract } => {
                let _active = self.require_active_set(vaa)?;
                self.state.lock().contract = Some(new_contract);
                CoreEffect::ContractUpgraded { new_contract }
            }
            CoreAction::GuardianSetUpgrade {
                new_index,
                guardians,
            } => self.rotate_guardian_set(vaa, new_index, guardians)?,
            CoreAction::SetMessageFee { fee } => {
                let _active = self.require_active_set(vaa)?;
                self.state.lock().message_fee = fee;
                CoreEffect::MessageFeeSet { fee }
            }
            CoreAction::TransferFees { amount, recipient } => {
                let _active = self.require_active_set(vaa)?;
                let mut state = self.state.lock();
                if amount > state.collected_fees {
                    return Err(GovernanceError::InsufficientFees {
                        requested: amount,
                        available: state.collected_fees,
                    });
                }
                state.collected_fees -= amount;
                CoreEffect::FeesTransferred { amount, recipient }
            }
        };
        info!(?effect, "core governance applied");
        Ok(effect)
    }
}
