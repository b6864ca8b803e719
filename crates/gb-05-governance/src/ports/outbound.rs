//! # Outbound Ports (Driven Ports)

use std::sync::Arc;

use bridge_types::Timestamp;

/// Source of the current host-chain time in unix seconds.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> Timestamp;
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
