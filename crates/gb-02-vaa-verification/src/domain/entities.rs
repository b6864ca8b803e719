//! # Domain Entities

use bridge_types::{ChainId, Emitter, ExternalAddress, Hash, Timestamp, Vaa};

/// A VAA whose signatures have been checked against its guardian set.
///
/// Only the verifier can construct one, so holding a `VerifiedVaa` is proof
/// that quorum was reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedVaa {
    vaa: Vaa,
    digest: Hash,
}

impl VerifiedVaa {
    pub(crate) fn new(vaa: Vaa, digest: Hash) -> Self {
        Self { vaa, digest }
    }

    /// The double-keccak digest the guardians signed.
    pub fn digest(&self) -> &Hash {
        &self.digest
    }

    pub fn payload(&self) -> &[u8] {
        &self.vaa.payload
    }

    pub fn emitter(&self) -> Emitter {
        self.vaa.emitter()
    }

    pub fn emitter_chain(&self) -> ChainId {
        self.vaa.emitter_chain
    }

    pub fn emitter_address(&self) -> &ExternalAddress {
        &self.vaa.emitter_address
    }

    pub fn sequence(&self) -> u64 {
        self.vaa.sequence
    }

    pub fn timestamp(&self) -> Timestamp {
        self.vaa.timestamp
    }

    pub fn nonce(&self) -> u32 {
        self.vaa.nonce
    }

    pub fn guardian_set_index(&self) -> u32 {
        self.vaa.guardian_set_index
    }

    pub fn consistency_level(&self) -> u8 {
        self.vaa.consistency_level
    }

    /// Borrow the underlying VAA.
    pub fn vaa(&self) -> &Vaa {
        &self.vaa
    }

    pub fn into_vaa(self) -> Vaa {
        self.vaa
    }
}
