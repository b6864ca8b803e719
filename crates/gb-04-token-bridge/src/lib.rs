//! # Token Bridge Subsystem (GB-04)
//!
//! Moves fungible tokens between chains on top of verified VAAs.
//!
//! ## Components
//!
//! | Module | Role |
//! |--------|------|
//! | `domain::normalizer` | native decimals <-> 8-decimal wire precision |
//! | `domain::payload` | Transfer / AssetMeta / TransferWithPayload codec |
//! | `domain::actions` | `TokenBridge` governance actions |
//! | `service` | redeem inbound transfers, publish outbound ones |
//!
//! ## Custody Model
//!
//! - Tokens native to this chain are locked in custody when sent and
//!   released when they come back.
//! - Foreign tokens are represented by wrapped assets, minted on redeem and
//!   burned on send. Wrapped assets carry at most 8 decimals, so their
//!   amounts are already at wire precision.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::publisher::InMemoryPublisher;
pub use domain::actions::TokenBridgeAction;
pub use domain::entities::{
    GovernanceEffect, NativeAsset, RedeemEffect, TokenBridgeState, TokenId, TransferRequest,
    WrappedAsset,
};
pub use domain::errors::TokenBridgeError;
pub use domain::normalizer::{
    from_wire, scale_factor, to_wire, truncate, validate_relayer_fee, WIRE_DECIMALS,
};
pub use domain::payload::{fixed_string, AssetMeta, Transfer, TransferPayload, TransferWithPayload};
pub use ports::outbound::{MessagePublisher, PublishError, PublishedMessage};
pub use service::{TokenBridge, DEFAULT_CONSISTENCY_LEVEL};
