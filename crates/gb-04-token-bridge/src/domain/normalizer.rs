//! # Token Amount Normalizer
//!
//! Wire amounts have 8 decimals. Assets with more decimals are scaled down
//! by `10^(d - 8)` when sent (remainder dropped) and scaled back up on
//! redeem. Assets with 8 or fewer decimals pass through unchanged.

use bridge_types::U256;

use super::errors::TokenBridgeError;

/// Fixed precision of amounts on the wire.
pub const WIRE_DECIMALS: u8 = 8;

/// `10^(decimals - 8)` for `decimals > 8`, otherwise 1.
///
/// `None` when the factor does not fit 256 bits.
pub fn scale_factor(decimals: u8) -> Option<U256> {
    if decimals <= WIRE_DECIMALS {
        return Some(U256::one());
    }
    U256::from(10u64).checked_pow(U256::from(decimals - WIRE_DECIMALS))
}

/// Native amount to wire amount, flooring.
pub fn to_wire(amount: U256, decimals: u8) -> Result<u64, TokenBridgeError> {
    let scaled = match scale_factor(decimals) {
        Some(factor) => amount / factor,
        None => U256::zero(),
    };
    if scaled > U256::from(u64::MAX) {
        return Err(TokenBridgeError::AmountOverflow);
    }
    Ok(scaled.low_u64())
}

/// Wire amount to native amount.
pub fn from_wire(wire_amount: u64, decimals: u8) -> Result<U256, TokenBridgeError> {
    let wire_amount = U256::from(wire_amount);
    match scale_factor(decimals) {
        Some(factor) => wire_amount
            .checked_mul(factor)
            .ok_or(TokenBridgeError::AmountOverflow),
        None if wire_amount.is_zero() => Ok(U256::zero()),
        None => Err(TokenBridgeError::AmountOverflow),
    }
}

/// Drop the sub-wire-precision remainder so that
/// `from_wire(to_wire(truncate(x))) == truncate(x)`.
pub fn truncate(amount: U256, decimals: u8) -> U256 {
    match scale_factor(decimals) {
        Some(factor) => amount - amount % factor,
        None => U256::zero(),
    }
}

/// `fee <= amount`, checked before any normalization.
pub fn validate_relayer_fee(amount: U256, fee: U256) -> Result<(), TokenBridgeError> {
    if fee > amount {
        return Err(TokenBridgeError::InvalidRelayerFee { amount, fee });
    }
    Ok(())
}
