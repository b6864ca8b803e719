//! # Guardian Bridge Benchmarks
//!
//! Criterion benchmarks per subsystem, driven by `benches/bridge_benchmarks.rs`.

pub mod gb_02_verification;
pub mod gb_03_replay;
