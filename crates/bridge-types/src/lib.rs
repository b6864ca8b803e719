//! # Bridge Types Crate
//!
//! Domain primitives shared by every Guardian Bridge subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: chain ids, address widths and the VAA entity
//!   are defined once here and reused by all subsystems.
//! - **Big-Endian Wire Format**: every multi-byte integer on the wire is
//!   big-endian; [`WireReader`] and [`WireWriter`] are the only codecs.
//! - **Fail Closed**: decoding never panics; truncated or trailing input is a
//!   [`DecodeError`].

pub mod entities;
pub mod errors;
pub mod vaa;
pub mod wire;

pub use entities::*;
pub use errors::*;
pub use vaa::{GuardianSignature, Vaa};
pub use wire::{WireReader, WireWriter};
