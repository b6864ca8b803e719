//! In-memory core bridge publisher.

use bridge_types::{ExternalAddress, U256};
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::debug;

use crate::ports::outbound::{MessagePublisher, PublishError, PublishedMessage};

/// Assigns per-emitter sequences starting at 0 and records every message.
#[derive(Default)]
pub struct InMemoryPublisher {
    inner: Mutex<PublisherInner>,
}

#[derive(Default)]
struct PublisherInner {
    sequences: HashMap<ExternalAddress, u64>,
    messages: Vec<PublishedMessage>,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything published so far, in order.
    pub fn messages(&self) -> Vec<PublishedMessage> {
        self.inner.lock().messages.clone()
    }

    pub fn last(&self) -> Option<PublishedMessage> {
        self.inner.lock().messages.last().cloned()
    }

    /// Next sequence `emitter` would be assigned.
    pub fn next_sequence(&self, emitter: &ExternalAddress) -> u64 {
        self.inner
            .lock()
            .sequences
            .get(emitter)
            .copied()
            .unwrap_or(0)
    }
}

impl MessagePublisher for InMemoryPublisher {
    fn publish(
        &self,
        emitter: ExternalAddress,
        nonce: u32,
        payload: Vec<u8>,
        consistency_level: u8,
        message_fee: U256,
    ) -> Result<u64, PublishError> {
        let mut inner = self.inner.lock();
        let next = inner.sequences.entry(emitter).or_insert(0);
        let sequence = *next;
        *next += 1;

        debug!(emitter = %hex::encode(emitter), sequence, len = payload.len(), "message published");
        inner.messages.push(PublishedMessage {
            emitter,
            sequence,
            nonce,
            payload,
            consistency_level,
            message_fee,
        });
        Ok(sequence)
    }
}
