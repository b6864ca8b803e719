//! # Outbound Ports
//!
//! The token bridge publishes its payloads through the core bridge.

use bridge_types::{ExternalAddress, U256};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    /// Message fee not covered.
    #[error("Insufficient message fee")]
    InsufficientFee,

    #[error("Publish rejected: {0}")]
    Rejected(String),
}

/// A message handed to the core bridge for guardian observation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishedMessage {
    pub emitter: ExternalAddress,
    pub sequence: u64,
    pub nonce: u32,
    pub payload: Vec<u8>,
    pub consistency_level: u8,
    /// Host currency paid to the core bridge for this message.
    pub message_fee: U256,
}

/// Core bridge message publication.
pub trait MessagePublisher: Send + Sync {
    /// Publish `payload` from `emitter` paying `message_fee`; returns the
    /// assigned sequence. On error nothing is published and nothing paid.
    fn publish(
        &self,
        emitter: ExternalAddress,
        nonce: u32,
        payload: Vec<u8>,
        consistency_level: u8,
        message_fee: U256,
    ) -> Result<u64, PublishError>;
}

impl<T: MessagePublisher + ?Sized> MessagePublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        emitter: ExternalAddress,
        nonce: u32,
        payload: Vec<u8>,
        consistency_level: u8,
        message_fee: U256,
    ) -> Result<u64, PublishError> {
        (**self).publish(emitter, nonce, payload, consistency_level, message_fee)
    }
}
