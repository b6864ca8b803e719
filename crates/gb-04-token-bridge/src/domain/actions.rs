//! # Token Bridge Governance Actions
//!
//! ```text
//! 1 RegisterChain    u16 chain | [32] bridge emitter address
//! 2 UpgradeContract  [32] new contract
//! ```

use bridge_types::{ChainId, ExternalAddress, WireReader, WireWriter};
use gb_05_governance::{module_name, GovernanceError, TOKEN_BRIDGE_MODULE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenBridgeAction {
    RegisterChain {
        chain: ChainId,
        emitter_address: ExternalAddress,
    },
    UpgradeContract {
        new_contract: ExternalAddress,
    },
}

impl TokenBridgeAction {
    pub const REGISTER_CHAIN: u8 = 1;
    pub const UPGRADE_CONTRACT: u8 = 2;

    pub fn decode(action: u8, data: &[u8]) -> Result<Self, GovernanceError> {
        let mut reader = WireReader::new(data);
        let decoded = match action {
            Self::REGISTER_CHAIN => TokenBridgeAction::RegisterChain {
                chain: reader.read_chain()?,
                emitter_address: reader.read_array()?,
            },
            Self::UPGRADE_CONTRACT => TokenBridgeAction::UpgradeContract {
                new_contract: reader.read_array()?,
            },
            other => {
                return Err(GovernanceError::InvalidAction {
                    module: module_name(&TOKEN_BRIDGE_MODULE),
                    action: other,
                })
            }
        };
        reader.finish()?;
        Ok(decoded)
    }

    pub fn action_id(&self) -> u8 {
        match self {
            TokenBridgeAction::RegisterChain { .. } => Self::REGISTER_CHAIN,
            TokenBridgeAction::UpgradeContract { .. } => Self::UPGRADE_CONTRACT,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut writer = WireWriter::new();
        match self {
            TokenBridgeAction::RegisterChain {
                chain,
                emitter_address,
            } => {
                writer.put_chain(*chain).put_bytes(emitter_address);
            }
            TokenBridgeAction::UpgradeContract { new_contract } => {
                writer.put_bytes(new_contract);
            }
        }
        writer.into_bytes()
    }
}
