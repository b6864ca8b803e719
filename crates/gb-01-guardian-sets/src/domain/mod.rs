//! # Domain Layer
//!
//! Guardian set entities and the registry that owns them. No I/O.

pub mod entities;
pub mod errors;
pub mod registry;
