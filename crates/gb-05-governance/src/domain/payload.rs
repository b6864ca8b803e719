//! # Governance Payload
//!
//! ```text
//! 0   [32]   module, ASCII name right-aligned, zero padded on the left
//! 32  u8     action
//! 33  u16    target chain (0 = every chain)
//! 35  [..]   action data
//! ```

use bridge_types::{right_aligned_name, ChainId, DecodeError, WireReader, WireWriter};

/// Module id of the core bridge.
pub const CORE_MODULE: [u8; 32] = right_aligned_name(b"Core");

/// Module id of the token bridge.
pub const TOKEN_BRIDGE_MODULE: [u8; 32] = right_aligned_name(b"TokenBridge");

/// Printable form of a module id: the ASCII name without padding.
pub fn module_name(module: &[u8; 32]) -> String {
    let start = module.iter().position(|b| *b != 0).unwrap_or(module.len());
    String::from_utf8_lossy(&module[start..]).into_owned()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GovernancePayload {
    pub module: [u8; 32],
    pub action: u8,
    pub target_chain: ChainId,
    pub action_data: Vec<u8>,
}

impl GovernancePayload {
    pub const HEADER_LEN: usize = 35;

    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = WireReader::new(bytes);
        let module = reader.read_array::<32>()?;
        let action = reader.read_u8()?;
        let target_chain = reader.read_chain()?;
        let action_data = reader.read_rest().to_vec();

        Ok(Self {
            module,
            action,
            target_chain,
            action_data,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut writer = WireWriter::with_capacity(Self::HEADER_LEN + self.action_data.len());
        writer
            .put_bytes(&self.module)
            .put_u8(self.action)
            .put_chain(self.target_chain)
            .put_bytes(&self.action_data);
        writer.into_bytes()
    }

    /// Whether this payload may execute on `chain`.
    pub fn targets(&self, chain: ChainId) -> bool {
        self.target_chain.is_any() || self.target_chain == chain
    }
}
