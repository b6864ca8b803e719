//! # Runtime Adapters
//!
//! Implementations of subsystem ports that need more than one subsystem.

pub mod publisher;

pub use publisher::CoreMessagePublisher;
