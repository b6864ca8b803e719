//! # Domain Layer

pub mod actions;
pub mod entities;
pub mod errors;
pub mod normalizer;
pub mod payload;
