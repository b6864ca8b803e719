//! # Bridge Runtime Library
//!
//! Wires the Guardian Bridge subsystems into one node. The `bridge-node`
//! binary in `main.rs` is a thin driver over this library.
//!
//! ## Layout
//!
//! - `container`: configuration and the [`BridgeNode`] holding every subsystem
//! - `adapters`: ports implemented across subsystems (core fee publisher)
//! - `handlers`: the submit pipeline (parse, verify, route, metrics)
//! - `errors`: [`BridgeError`] and its [`Disposition`]

pub mod adapters;
pub mod container;
pub mod errors;
pub mod handlers;

pub use container::{BridgeConfig, BridgeNode, ConfigError};
pub use errors::{BridgeError, Disposition};
pub use handlers::SubmitOutcome;
