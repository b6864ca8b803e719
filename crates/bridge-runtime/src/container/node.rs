//! Bridge node construction and accessors.

use std::sync::Arc;

use gb_01_guardian_sets::GuardianSetRegistry;
use gb_02_vaa_verification::{SharedRegistry, VaaVerificationService};
use gb_03_replay_protection::ReplayProtectionLedger;
use gb_04_token_bridge::TokenBridge;
use gb_05_governance::{CoreGovernance, GovernanceExecutor, SystemTimeSource, TimeSource};
use parking_lot::RwLock;
use tracing::info;

use super::config::{BridgeConfig, ConfigError};
use crate::adapters::CoreMessagePublisher;

/// Clock used for guardian set expiry.
pub type NodeClock = Arc<dyn TimeSource>;
pub type NodeCore = CoreGovernance<NodeClock>;
pub type NodeTokenBridge = TokenBridge<CoreMessagePublisher<NodeClock>>;

/// All subsystems of one node.
pub struct BridgeNode {
    pub(crate) config: BridgeConfig,
    pub(crate) registry: SharedRegistry,
    pub(crate) verifier: VaaVerificationService,
    pub(crate) ledger: ReplayProtectionLedger,
    pub(crate) executor: GovernanceExecutor,
    pub(crate) core: Arc<NodeCore>,
    pub(crate) token_bridge: NodeTokenBridge,
}

impl BridgeNode {
    /// Build a node on the wall clock.
    pub fn new(config: BridgeConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Arc::new(SystemTimeSource))
    }

    /// Build a node whose guardian set rotations read `clock`.
    pub fn with_clock(config: BridgeConfig, clock: NodeClock) -> Result<Self, ConfigError> {
        config.validate()?;

        let chain = config.chain();
        let governance = config.governance_emitter()?;
        let token_bridge_emitter = config.token_bridge_emitter()?;

        let registry: SharedRegistry = Arc::new(RwLock::new(GuardianSetRegistry::genesis(
            config.initial_guardians()?,
            config.guardians.expiry_secs,
        )?));
        let verifier = VaaVerificationService::new(registry.clone());
        let ledger = ReplayProtectionLedger::in_memory(&token_bridge_emitter);
        let executor = GovernanceExecutor::new(chain, governance);
        let core = Arc::new(CoreGovernance::with_clock(registry.clone(), clock));
        let token_bridge = TokenBridge::new(
            chain,
            token_bridge_emitter,
            CoreMessagePublisher::new(core.clone()),
        );

        info!(
            %chain,
            %governance,
            guardians = config.guardians.initial.len(),
            "bridge node initialized"
        );

        Ok(Self {
            config,
            registry,
            verifier,
            ledger,
            executor,
            core,
            token_bridge,
        })
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    pub fn verifier(&self) -> &VaaVerificationService {
        &self.verifier
    }

    pub fn ledger(&self) -> &ReplayProtectionLedger {
        &self.ledger
    }

    pub fn executor(&self) -> &GovernanceExecutor {
        &self.executor
    }

    pub fn core(&self) -> &NodeCore {
        &self.core
    }

    pub fn token_bridge(&self) -> &NodeTokenBridge {
        &self.token_bridge
    }

    /// Index of the guardian set new VAAs must be signed by.
    pub fn active_guardian_set(&self) -> u32 {
        self.registry.read().active_index()
    }
}
