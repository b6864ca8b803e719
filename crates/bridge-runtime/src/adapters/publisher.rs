//! Token bridge publisher backed by the core bridge.
//!
//! Every message must pay at least the core message fee current at publish
//! time. Paid fees accrue in the core state until a `TransferFees`
//! governance action moves them out.

use std::sync::Arc;

use bridge_types::{ExternalAddress, U256};
use gb_04_token_bridge::{InMemoryPublisher, MessagePublisher, PublishError, PublishedMessage};
use gb_05_governance::{CoreGovernance, TimeSource};
use tracing::warn;

/// Charges the message fee, then sequences the message.
pub struct CoreMessagePublisher<T: TimeSource> {
    core: Arc<CoreGovernance<T>>,
    messages: InMemoryPublisher,
}

impl<T: TimeSource> CoreMessagePublisher<T> {
    pub fn new(core: Arc<CoreGovernance<T>>) -> Self {
        Self {
            core,
            messages: InMemoryPublisher::new(),
        }
    }

    /// Published messages, oldest first.
    pub fn messages(&self) -> Vec<PublishedMessage> {
        self.messages.messages()
    }

    pub fn last(&self) -> Option<PublishedMessage> {
        self.messages.last()
    }
}

impl<T: TimeSource> MessagePublisher for CoreMessagePublisher<T> {
    fn publish(
        &self,
        emitter: ExternalAddress,
        nonce: u32,
        payload: Vec<u8>,
        consistency_level: u8,
        message_fee: U256,
    ) -> Result<u64, PublishError> {
        self.core.collect_message_fee(message_fee).map_err(|e| {
            warn!(paid = %message_fee, "message fee not collected: {e}");
            PublishError::InsufficientFee
        })?;
        self.messages
            .publish(emitter, nonce, payload, consistency_level, message_fee)
    }
}
