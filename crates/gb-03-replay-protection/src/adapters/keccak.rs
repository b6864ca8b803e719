//! Keccak claim address derivation.

use bridge_crypto::keccak256_many;

use crate::domain::entities::ClaimAddress;
use crate::ports::outbound::AddressDeriver;

/// `keccak256(namespace || seed_0 || seed_1 || ...)`.
///
/// The namespace separates ledgers of different modules sharing one store.
#[derive(Clone, Debug)]
pub struct KeccakAddressDeriver {
    namespace: Vec<u8>,
}

impl KeccakAddressDeriver {
    pub fn new(namespace: impl Into<Vec<u8>>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Default for KeccakAddressDeriver {
    fn default() -> Self {
        Self::new(b"claim".to_vec())
    }
}

impl AddressDeriver for KeccakAddressDeriver {
    fn derive(&self, seeds: &[&[u8]]) -> ClaimAddress {
        let mut inputs: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 1);
        inputs.push(&self.namespace);
        inputs.extend_from_slice(seeds);
        keccak256_many(&inputs)
    }
}
