//! # Core Module Actions
//!
//! ```text
//! 1 ContractUpgrade     [32] new contract
//! 2 GuardianSetUpgrade  u32 new index | u8 count | count x [20] address
//! 3 SetMessageFee       u256 fee
//! 4 TransferFees        u256 amount | [32] recipient
//! ```

use bridge_types::{ExternalAddress, GuardianAddress, WireReader, WireWriter, U256};

use super::errors::GovernanceError;
use super::payload::{module_name, CORE_MODULE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreAction {
    ContractUpgrade {
        new_contract: ExternalAddress,
    },
    GuardianSetUpgrade {
        new_index: u32,
        guardians: Vec<GuardianAddress>,
    },
    SetMessageFee {
        fee: U256,
    },
    TransferFees {
        amount: U256,
        recipient: ExternalAddress,
    },
}

impl CoreAction {
    pub const CONTRACT_UPGRADE: u8 = 1;
    pub const GUARDIAN_SET_UPGRADE: u8 = 2;
    pub const SET_MESSAGE_FEE: u8 = 3;
    pub const TRANSFER_FEES: u8 = 4;

    /// Decode the action data for `action`. Trailing bytes are rejected.
    pub fn decode(action: u8, data: &[u8]) -> Result<Self, GovernanceError> {
        let mut reader = WireReader::new(data);
        let decoded = match action {
            Self::CONTRACT_UPGRADE => CoreAction::ContractUpgrade {
                new_contract: reader.read_array()?,
            },
            Self::GUARDIAN_SET_UPGRADE => {
                let new_index = reader.read_u32()?;
                let count = reader.read_u8()?;
                let guardians = (0..count)
                    .map(|_| reader.read_array::<20>())
                    .collect::<Result<Vec<_>, _>>()?;
                CoreAction::GuardianSetUpgrade {
                    new_index,
                    guardians,
                }
            }
            Self::SET_MESSAGE_FEE => CoreAction::SetMessageFee {
                fee: reader.read_u256()?,
            },
            Self::TRANSFER_FEES => CoreAction::TransferFees {
                amount: reader.read_u256()?,
                recipient: reader.read_array()?,
            },
            other => {
                return Err(GovernanceError::InvalidAction {
                    module: module_name(&CORE_MODULE),
                    action: other,
                })
            }
        };
        reader.finish()?;
        Ok(decoded)
    }

    pub fn action_id(&self) -> u8 {
        match self {
            CoreAction::ContractUpgrade { .. } => Self::CONTRACT_UPGRADE,
            CoreAction::GuardianSetUpgrade { .. } => Self::GUARDIAN_SET_UPGRADE,
            CoreAction::SetMessageFee { .. } => Self::SET_MESSAGE_FEE,
            CoreAction::TransferFees { .. } => Self::TRANSFER_FEES,
        }
    }

    /// Encode the action data (without the governance header).
    pub fn encode(&self) -> Vec<u8> {
        let mut writer = WireWriter::new();
        match self {
            CoreAction::ContractUpgrade { new_contract } => {
                writer.put_bytes(new_contract);
            }
            CoreAction::GuardianSetUpgrade {
                new_index,
                guardians,
            } => {
                writer.put_u32(*new_index).put_u8(guardians.len() as u8);
                for guardian in guardians {
                    writer.put_bytes(guardian);
                }
            }
            CoreAction::SetMessageFee { fee } => {
                writer.put_u256(*fee);
            }
            CoreAction::TransferFees { amount, recipient } => {
                writer.put_u256(*amount).put_bytes(recipient);
            }
        }
        writer.into_bytes()
    }
}
