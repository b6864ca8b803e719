//! # Node Container
//!
//! Owns every subsystem of one bridge node and wires their shared state.
//!
//! ## Wiring
//!
//! - The guardian set registry is shared by verification (read) and core
//!   governance (rotation, write)
//! - One replay ledger holds the claims of governance and token bridge VAAs
//! - The token bridge publishes through the core bridge, paying its fee

pub mod config;
pub mod node;

pub use config::{BridgeConfig, ConfigError, GovernanceConfig, GuardianConfig, TokenBridgeConfig};
pub use node::{BridgeNode, NodeClock, NodeCore, NodeTokenBridge};
