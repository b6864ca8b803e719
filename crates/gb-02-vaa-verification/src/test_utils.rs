//! Test fixtures: deterministic guardian keys and a VAA builder that signs.
//!
//! Enabled in this crate's tests and, for other crates, through the
//! `test-utils` feature.

use bridge_crypto::{double_keccak256, GuardianKeyPair};
use bridge_types::{ChainId, ExternalAddress, GuardianAddress, GuardianSignature, Timestamp, Vaa};
use gb_01_guardian_sets::GuardianSetRegistry;

/// A set of guardian signing keys.
pub struct GuardianFixture {
    keys: Vec<GuardianKeyPair>,
}

impl GuardianFixture {
    /// `n` deterministic keys.
    pub fn new(n: usize) -> Self {
        Self::with_seed(n, 0)
    }

    /// `n` deterministic keys distinct from those of any other seed.
    pub fn with_seed(n: usize, seed: u8) -> Self {
        let keys = (0..n)
            .map(|i| {
                let mut secret = [0u8; 32];
                secret[0] = seed;
                secret[30] = (i >> 8) as u8;
                secret[31] = i as u8 + 1;
                GuardianKeyPair::from_bytes(secret).expect("valid fixture key")
            })
            .collect();
        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Guardian addresses in index order.
    pub fn addresses(&self) -> Vec<GuardianAddress> {
        self.keys.iter().map(GuardianKeyPair::address).collect()
    }

    /// `floor(2N/3) + 1` for this fixture's size.
    pub fn quorum(&self) -> usize {
        self.keys.len() * 2 / 3 + 1
    }

    /// A registry whose genesis set is this fixture.
    pub fn registry(&self, expiry_secs: u32) -> GuardianSetRegistry {
        GuardianSetRegistry::genesis(self.addresses(), expiry_secs).expect("valid fixture set")
    }

    /// Sign `vaa`'s body with the guardians at `indices`, in the given order.
    pub fn sign(&self, vaa: &Vaa, indices: &[u8]) -> Vec<GuardianSignature> {
        let digest = double_keccak256(&vaa.body_bytes());
        indices
            .iter()
            .map(|&i| GuardianSignature {
                guardian_index: i,
                signature: self.keys[i as usize]
                    .sign_digest(&digest)
                    .expect("fixture signing"),
            })
            .collect()
    }
}

/// Builds VAAs with sensible defaults.
pub struct VaaBuilder {
    vaa: Vaa,
}

impl Default for VaaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VaaBuilder {
    pub fn new() -> Self {
        Self {
            vaa: Vaa {
                version: Vaa::VERSION,
                guardian_set_index: 0,
                signatures: Vec::new(),
                timestamp: 1_000,
                nonce: 0,
                emitter_chain: ChainId::ETHEREUM,
                emitter_address: [0x11; 32],
                sequence: 0,
                consistency_level: 1,
                payload: Vec::new(),
            },
        }
    }

    pub fn guardian_set_index(mut self, index: u32) -> Self {
        self.vaa.guardian_set_index = index;
        self
    }

    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.vaa.timestamp = timestamp;
        self
    }

    pub fn nonce(mut self, nonce: u32) -> Self {
        self.vaa.nonce = nonce;
        self
    }

    pub fn emitter(mut self, chain: ChainId, address: ExternalAddress) -> Self {
        self.vaa.emitter_chain = chain;
        self.vaa.emitter_address = address;
        self
    }

    pub fn sequence(mut self, sequence: u64) -> Self {
        self.vaa.sequence = sequence;
        self
    }

    pub fn consistency_level(mut self, level: u8) -> Self {
        self.vaa.consistency_level = level;
        self
    }

    pub fn payload(mut self, payload: &[u8]) -> Self {
        self.vaa.payload = payload.to_vec();
        self
    }

    /// The VAA with no signatures.
    pub fn unsigned(self) -> Vaa {
        self.vaa
    }

    /// Signed by the guardians at `indices`.
    pub fn sign_with(self, fixture: &GuardianFixture, indices: &[u8]) -> Vaa {
        let mut vaa = self.vaa;
        vaa.signatures = fixture.sign(&vaa, indices);
        vaa
    }

    /// Signed by the first quorum of guardians.
    pub fn sign_quorum(self, fixture: &GuardianFixture) -> Vaa {
        let indices: Vec<u8> = (0..fixture.quorum() as u8).collect();
        self.sign_with(fixture, &indices)
    }

    /// Signed by every guardian.
    pub fn sign_all(self, fixture: &GuardianFixture) -> Vaa {
        let indices: Vec<u8> = (0..fixture.len() as u8).collect();
        self.sign_with(fixture, &indices)
    }
}
