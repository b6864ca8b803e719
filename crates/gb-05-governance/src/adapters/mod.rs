//! # Adapters

pub mod clock;
