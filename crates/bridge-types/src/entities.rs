//! # Core Domain Entities
//!
//! Identifiers that appear in every VAA: chain ids, emitter addresses,
//! guardian addresses and hashes.

use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

/// A 32-byte hash (keccak256 digests, derived claim addresses).
pub type Hash = [u8; 32];

/// A 20-byte guardian address (last 20 bytes of keccak256(pubkey)).
pub type GuardianAddress = [u8; 20];

/// A chain-agnostic 32-byte address. Shorter native addresses are
/// left-zero-padded.
pub type ExternalAddress = [u8; 32];

/// Seconds since the Unix epoch, as carried in the VAA body.
pub type Timestamp = u32;

/// Numeric chain identifier as used on the wire.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChainId(pub u16);

impl ChainId {
    /// Wildcard target: a governance action addressed to every chain.
    pub const ANY: ChainId = ChainId(0);
    /// Solana.
    pub const SOLANA: ChainId = ChainId(1);
    /// Ethereum.
    pub const ETHEREUM: ChainId = ChainId(2);
    /// Terra.
    pub const TERRA: ChainId = ChainId(3);
    /// BNB Smart Chain.
    pub const BSC: ChainId = ChainId(4);
    /// Polygon.
    pub const POLYGON: ChainId = ChainId(5);

    /// Whether this is the wildcard chain id `0`.
    pub fn is_any(self) -> bool {
        self == Self::ANY
    }

    /// Raw wire value.
    pub fn value(self) -> u16 {
        self.0
    }
}

impl From<u16> for ChainId {
    fn from(value: u16) -> Self {
        ChainId(value)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The logical source of a message: a (chain, address) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Emitter {
    /// Chain the message was emitted on.
    pub chain: ChainId,
    /// Emitter address on that chain.
    pub address: ExternalAddress,
}

impl Emitter {
    /// Create an emitter.
    pub fn new(chain: ChainId, address: ExternalAddress) -> Self {
        Self { chain, address }
    }
}

impl fmt::Display for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.chain, hex::encode(self.address))
    }
}

/// Left-pad a native address of up to 32 bytes to an [`ExternalAddress`].
///
/// Returns `None` when the input is longer than 32 bytes.
pub fn left_pad_address(native: &[u8]) -> Option<ExternalAddress> {
    if native.len() > 32 {
        return None;
    }
    let mut out = [0u8; 32];
    out[32 - native.len()..].copy_from_slice(native);
    Some(out)
}

/// Encode a short ASCII name as a right-aligned 32-byte identifier.
///
/// Used for governance module ids (`"Core"`, `"TokenBridge"`).
pub const fn right_aligned_name(name: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    let offset = 32 - name.len();
    let mut i = 0;
    while i < name.len() {
        out[offset + i] = name[i];
        i += 1;
    }
    out
}
