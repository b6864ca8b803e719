//! # Guardian Set Registry Subsystem (GB-01)
//!
//! Holds the active guardian set and the superseded sets that are still
//! inside their grace period.
//!
//! ## Invariants
//!
//! - Exactly one set has no expiration: the active one.
//! - Set indices are dense; a rotation installs `active + 1`.
//! - Superseded sets are immutable. Their only change is gaining an
//!   expiration time at the moment they are replaced.
//!
//! The registry is plain state. Callers that share it across threads wrap it
//! in a reader/writer lock so that verification (read) is linearized with
//! rotation (write).

pub mod domain;

pub use domain::entities::{GuardianSet, MAX_GUARDIANS};
pub use domain::errors::GuardianSetError;
pub use domain::registry::{validate_guardians, GuardianSetRegistry, DEFAULT_EXPIRY_SECS};
