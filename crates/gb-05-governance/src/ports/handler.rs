//! # Governance Handler Port
//!
//! A module that accepts governance actions. The executor authorizes the
//! VAA and claims it; the handler only decodes and applies.

use gb_02_vaa_verification::VerifiedVaa;
use gb_03_replay_protection::ReplayError;

use crate::domain::errors::GovernanceError;

pub trait GovernanceHandler: Send + Sync {
    /// Decoded action.
    type Action;
    /// What applying an action produced.
    type Effect;
    type Error: From<GovernanceError> + From<ReplayError>;

    /// Module id this handler accepts.
    fn module(&self) -> [u8; 32];

    /// Decode `data` for `action`. Runs before the claim; failures leave the
    /// VAA unclaimed.
    fn decode_action(&self, action: u8, data: &[u8]) -> Result<Self::Action, Self::Error>;

    /// Apply a decoded action. Runs inside the claim; an error rolls the
    /// claim back.
    fn apply(&self, vaa: &VerifiedVaa, action: Self::Action) -> Result<Self::Effect, Self::Error>;
}
