//! # Ports Layer
//!
//! - `handler`: the per-module governance handler the executor dispatches to
//! - `outbound`: clock

pub mod handler;
pub mod outbound;
