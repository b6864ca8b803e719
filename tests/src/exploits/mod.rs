//! # Attack Simulations
//!
//! Each module replays a class of attack that has drained real bridges and
//! checks the node rejects it without changing state.

pub mod forged_governance;
pub mod signature_forgery;
