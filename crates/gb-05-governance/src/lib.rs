//! # Governance Subsystem (GB-05)
//!
//! Authorizes governance VAAs and dispatches them to the module they
//! address.
//!
//! ## Authorization Order
//!
//! 1. Emitter is the configured governance emitter (`InvalidGovernanceEmitter`)
//! 2. Module matches the handler's module (`InvalidModule`)
//! 3. Target chain is `0` or this chain (`InvalidTargetChain`)
//! 4. Action decodes (`InvalidAction`, `Malformed`)
//! 5. Claim succeeds (`AlreadyExecuted`), then the effect runs inside the
//!    claim
//!
//! ## Modules
//!
//! - `Core` (this crate): contract upgrade, guardian set upgrade, message
//!   fee, fee transfer
//! - `TokenBridge` (gb-04): implements [`GovernanceHandler`] itself

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::clock::{FixedTimeSource, SystemTimeSource};
pub use domain::core_actions::CoreAction;
pub use domain::errors::GovernanceError;
pub use domain::payload::{module_name, GovernancePayload, CORE_MODULE, TOKEN_BRIDGE_MODULE};
pub use ports::handler::GovernanceHandler;
pub use ports::outbound::TimeSource;
pub use service::core_bridge::{CoreBridgeState, CoreEffect, CoreGovernance};
pub use service::executor::GovernanceExecutor;
