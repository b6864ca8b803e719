//! # VAA Entity
//!
//! Verified Action Approval: a guardian-signed, sequence-numbered message.
//!
//! ## Wire Layout
//!
//! ```text
//! header:
//! 0   u8        version (1)
//! 1   u32       guardian set index
//! 5   u8        signature count
//! 6   [66]      per signature: u8 guardian index, [65] r || s || v
//!
//! body (the signed part):
//! 0   u32       timestamp
//! 4   u32       nonce
//! 8   u16       emitter chain
//! 10  [32]      emitter address
//! 42  u64       sequence
//! 50  u8        consistency level
//! 51  [..]      payload
//! ```

use crate::entities::{ChainId, Emitter, ExternalAddress, Timestamp};
use crate::errors::{DecodeError, EncodeError};
use crate::wire::{WireReader, WireWriter};

/// One guardian's signature over the VAA body digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardianSignature {
    /// Position of the signer in the guardian set.
    pub guardian_index: u8,
    /// `r (32) || s (32) || recovery id (1)`.
    pub signature: [u8; 65],
}

/// A parsed VAA. Parsing does not imply the signatures are valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vaa {
    pub version: u8,
    pub guardian_set_index: u32,
    pub signatures: Vec<GuardianSignature>,
    pub timestamp: Timestamp,
    pub nonce: u32,
    pub emitter_chain: ChainId,
    pub emitter_address: ExternalAddress,
    pub sequence: u64,
    pub consistency_level: u8,
    pub payload: Vec<u8>,
}

impl Vaa {
    /// The only supported version.
    pub const VERSION: u8 = 1;
    pub const HEADER_LEN: usize = 6;
    pub const SIGNATURE_LEN: usize = 66;
    /// Body length without the payload.
    pub const BODY_FIXED_LEN: usize = 51;

    /// Parse the full wire encoding.
    pub fn parse(data: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = WireReader::new(data);

        let version = reader.read_u8()?;
        if version != Self::VERSION {
            return Err(DecodeError::UnsupportedVersion(version));
        }
        let guardian_set_index = reader.read_u32()?;

        let count = reader.read_u8()?;
        let mut signatures = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let guardian_index = reader.read_u8()?;
            let signature = reader.read_array::<65>()?;
            signatures.push(GuardianSignature {
                guardian_index,
                signature,
            });
        }

        let timestamp = reader.read_u32()?;
        let nonce = reader.read_u32()?;
        let emitter_chain = reader.read_chain()?;
        let emitter_address = reader.read_array::<32>()?;
        let sequence = reader.read_u64()?;
        let consistency_level = reader.read_u8()?;
        let payload = reader.read_rest().to_vec();

        Ok(Self {
            version,
            guardian_set_index,
            signatures,
            timestamp,
            nonce,
            emitter_chain,
            emitter_address,
            sequence,
            consistency_level,
            payload,
        })
    }

    /// Full wire encoding (header, signatures, body).
    pub fn serialize(&self) -> Result<Vec<u8>, EncodeError> {
        let count = u8::try_from(self.signatures.len())
            .map_err(|_| EncodeError::TooManySignatures(self.signatures.len()))?;
        let body = self.body_bytes();
        let mut writer = WireWriter::with_capacity(
            Self::HEADER_LEN + Self::SIGNATURE_LEN * self.signatures.len() + body.len(),
        );
        writer
            .put_u8(self.version)
            .put_u32(self.guardian_set_index)
            .put_u8(count);
        for sig in &self.signatures {
            writer.put_u8(sig.guardian_index).put_bytes(&sig.signature);
        }
        writer.put_bytes(&body);
        Ok(writer.into_bytes())
    }

    /// The signed body: every field except the header and signatures.
    pub fn body_bytes(&self) -> Vec<u8> {
        let mut writer = WireWriter::with_capacity(Self::BODY_FIXED_LEN + self.payload.len());
        writer
            .put_u32(self.timestamp)
            .put_u32(self.nonce)
            .put_chain(self.emitter_chain)
            .put_bytes(&self.emitter_address)
            .put_u64(self.sequence)
            .put_u8(self.consistency_level)
            .put_bytes(&self.payload);
        writer.into_bytes()
    }

    pub fn emitter(&self) -> Emitter {
        Emitter::new(self.emitter_chain, self.emitter_address)
    }
}
