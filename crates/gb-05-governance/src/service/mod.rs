//! # Service Layer

pub mod core_bridge;
pub mod executor;
