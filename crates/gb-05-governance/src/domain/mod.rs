//! # Domain Layer

pub mod core_actions;
pub mod errors;
pub mod payload;
