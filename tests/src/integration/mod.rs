//! # Integration Flows
//!
//! End-to-end behavior of a `BridgeNode`: governance, guardian set rotation,
//! token transfers in both directions, and exactly-once execution.

pub mod governance;
pub mod lifecycle;
pub mod replay;
pub mod rotation;
