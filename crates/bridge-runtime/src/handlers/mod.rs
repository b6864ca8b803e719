//! # Handlers
//!
//! Entry points that drive a VAA through several subsystems.

pub mod submit;

pub use submit::SubmitOutcome;
