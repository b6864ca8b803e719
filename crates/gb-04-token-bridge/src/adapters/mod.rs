//! # Adapters

pub mod publisher;
