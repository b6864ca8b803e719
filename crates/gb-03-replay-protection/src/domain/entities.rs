//! # Domain Entities

use std::fmt;

use bridge_types::{ChainId, Emitter, ExternalAddress, Hash};

/// Location of a claim in the claim store.
pub type ClaimAddress = Hash;

/// Identity of an executable message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClaimKey {
    pub emitter_chain: ChainId,
    pub emitter_address: ExternalAddress,
    pub sequence: u64,
}

impl ClaimKey {
    pub fn new(emitter_chain: ChainId, emitter_address: ExternalAddress, sequence: u64) -> Self {
        Self {
            emitter_chain,
            emitter_address,
            sequence,
        }
    }

    pub fn from_emitter(emitter: Emitter, sequence: u64) -> Self {
        Self::new(emitter.chain, emitter.address, sequence)
    }

    /// Derivation seeds: emitter address, big-endian chain, big-endian
    /// sequence.
    pub fn seeds(&self) -> ([u8; 32], [u8; 2], [u8; 8]) {
        (
            self.emitter_address,
            self.emitter_chain.value().to_be_bytes(),
            self.sequence.to_be_bytes(),
        )
    }
}

impl fmt::Display for ClaimKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.emitter_chain,
            hex::encode(self.emitter_address),
            self.sequence
        )
    }
}

/// State of a claim in the store. Absent means never claimed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimStatus {
    /// Reserved while the effect runs.
    Pending,
    /// Effect applied. Permanent.
    Executed,
}

/// Ledger counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedgerStats {
    pub executed: u64,
    pub replays_rejected: u64,
    pub rolled_back: u64,
}
