//! # Token Bridge Payloads
//!
//! ```text
//! 1 Transfer             amount u256 | token [32] | token_chain u16 |
//!                        to [32] | to_chain u16 | fee u256          (133 bytes)
//! 2 AssetMeta            token [32] | token_chain u16 | decimals u8 |
//!                        symbol [32] | name [32]                     (100 bytes)
//! 3 TransferWithPayload  amount u256 | token [32] | token_chain u16 |
//!                        to [32] | to_chain u16 | from [32] | payload ...
//! ```
//!
//! Amounts are wire amounts (8 decimals) stored in a 256-bit field.

use bridge_types::{ChainId, DecodeError, ExternalAddress, WireReader, WireWriter, U256};

/// A plain token transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub amount: U256,
    pub token_address: ExternalAddress,
    pub token_chain: ChainId,
    pub recipient: ExternalAddress,
    pub recipient_chain: ChainId,
    /// Relayer fee, taken out of `amount`.
    pub fee: U256,
}

/// Metadata for a token, used to create or update its wrapped
/// representation on other chains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetMeta {
    pub token_address: ExternalAddress,
    pub token_chain: ChainId,
    /// Native decimals on the origin chain.
    pub decimals: u8,
    pub symbol: [u8; 32],
    pub name: [u8; 32],
}

/// A transfer carrying arbitrary data for the recipient contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferWithPayload {
    pub amount: U256,
    pub token_address: ExternalAddress,
    pub token_chain: ChainId,
    pub recipient: ExternalAddress,
    pub recipient_chain: ChainId,
    pub sender_address: ExternalAddress,
    pub payload: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransferPayload {
    Transfer(Transfer),
    AssetMeta(AssetMeta),
    TransferWithPayload(TransferWithPayload),
}

impl Transfer {
    pub const ENCODED_LEN: usize = 133;
}

impl AssetMeta {
    pub const ENCODED_LEN: usize = 100;

    /// Symbol with trailing zero padding removed.
    pub fn symbol_str(&self) -> String {
        trim_fixed(&self.symbol)
    }

    /// Name with trailing zero padding removed.
    pub fn name_str(&self) -> String {
        trim_fixed(&self.name)
    }
}

/// Right-pad (or cut) a string into a 32-byte field.
pub fn fixed_string(value: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    let bytes = value.as_bytes();
    let len = bytes.len().min(32);
    out[..len].copy_from_slice(&bytes[..len]);
    out
}

fn trim_fixed(field: &[u8; 32]) -> String {
    let end = field.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&field[..end]).into_owned()
}

impl TransferPayload {
    pub const TRANSFER: u8 = 1;
    pub const ASSET_META: u8 = 2;
    pub const TRANSFER_WITH_PAYLOAD: u8 = 3;

    /// Decode a token bridge payload. Fixed-width kinds reject trailing
    /// bytes.
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = WireReader::new(data);
        let payload = match reader.read_u8()? {
            Self::TRANSFER => {
                let transfer = Transfer {
                    amount: reader.read_u256()?,
                    token_address: reader.read_array()?,
                    token_chain: reader.read_chain()?,
                    recipient: reader.read_array()?,
                    recipient_chain: reader.read_chain()?,
                    fee: reader.read_u256()?,
                };
                reader.finish()?;
                TransferPayload::Transfer(transfer)
            }
            Self::ASSET_META => {
                let meta = AssetMeta {
                    token_address: reader.read_array()?,
                    token_chain: reader.read_chain()?,
                    decimals: reader.read_u8()?,
                    symbol: reader.read_array()?,
                    name: reader.read_array()?,
                };
                reader.finish()?;
                TransferPayload::AssetMeta(meta)
            }
            Self::TRANSFER_WITH_PAYLOAD => TransferPayload::TransferWithPayload(TransferWithPayload {
                amount: reader.read_u256()?,
                token_address: reader.read_array()?,
                token_chain: reader.read_chain()?,
                recipient: reader.read_array()?,
                recipient_chain: reader.read_chain()?,
                sender_address: reader.read_array()?,
                payload: reader.read_rest().to_vec(),
            }),
            other => return Err(DecodeError::UnknownPayloadId(other)),
        };
        Ok(payload)
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            TransferPayload::Transfer(t) => {
                let mut writer = WireWriter::with_capacity(Transfer::ENCODED_LEN);
                writer
                    .put_u8(Self::TRANSFER)
                    .put_u256(t.amount)
                    .put_bytes(&t.token_address)
                    .put_chain(t.token_chain)
                    .put_bytes(&t.recipient)
                    .put_chain(t.recipient_chain)
                    .put_u256(t.fee);
                writer.into_bytes()
            }
            TransferPayload::AssetMeta(m) => {
                let mut writer = WireWriter::with_capacity(AssetMeta::ENCODED_LEN);
                writer
                    .put_u8(Self::ASSET_META)
                    .put_bytes(&m.token_address)
                    .put_chain(m.token_chain)
                    .put_u8(m.decimals)
                    .put_bytes(&m.symbol)
                    .put_bytes(&m.name);
                writer.into_bytes()
            }
            TransferPayload::TransferWithPayload(t) => {
                let mut writer = WireWriter::with_capacity(133 + t.payload.len());
                writer
                    .put_u8(Self::TRANSFER_WITH_PAYLOAD)
                    .put_u256(t.amount)
                    .put_bytes(&t.token_address)
                    .put_chain(t.token_chain)
                    .put_bytes(&t.recipient)
                    .put_chain(t.recipient_chain)
                    .put_bytes(&t.sender_address)
                    .put_bytes(&t.payload);
                writer.into_bytes()
            }
        }
    }

    pub fn payload_id(&self) -> u8 {
        match self {
            TransferPayload::Transfer(_) => Self::TRANSFER,
            TransferPayload::AssetMeta(_) => Self::ASSET_META,
            TransferPayload::TransferWithPayload(_) => Self::TRANSFER_WITH_PAYLOAD,
        }
    }

    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            TransferPayload::Transfer(_) => "transfer",
            TransferPayload::AssetMeta(_) => "asset_meta",
            TransferPayload::TransferWithPayload(_) => "transfer_with_payload",
        }
    }
}
