//! Packed claim encoding.
//!
//! A channel contract checks claims against the digest of
//! `abi.encodePacked(address(this), amount)`, so the off-chain encoder has
//! to reproduce that layout byte for byte: the 20 address bytes verbatim,
//! then the amount as a 32-byte big-endian `uint256`, no padding and no
//! length prefixes.

use crate::{
    errors::{Error, Result},
    Amount, ChannelAddress,
};

/// Size of a channel contract address in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// Size of the big-endian `uint256` amount field in bytes.
pub const AMOUNT_SIZE: usize = 32;

/// Size of the packed `address ‖ uint256` payload in bytes.
pub const PACKED_PAYLOAD_SIZE: usize = ADDRESS_SIZE + AMOUNT_SIZE;

/// How the encoder treats claim amounts that do not fit in 256 bits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Keep only the low 256 bits of the amount, dropping any higher
    /// magnitude. The contract reads a fixed 32-byte amount field, so a
    /// wider value could never verify anyway.
    #[default]
    Truncate,

    /// Fail with [`Error::AmountOverflow`] instead of truncating.
    Reject,
}

/// The packed `address ‖ uint256` payload a contract-side
/// `abi.encodePacked` would produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PackedPayload([u8; PACKED_PAYLOAD_SIZE]);

impl PackedPayload {
    /// Pack `address` and `amount` into the fixed 52-byte claim layout.
    pub fn new(
        address: &ChannelAddress,
        amount: &Amount,
        policy: OverflowPolicy,
    ) -> Result<Self> {
        if policy == OverflowPolicy::Reject {
            ensure!(
                amount.bits() <= 8 * AMOUNT_SIZE as u64,
                Error::AmountOverflow {
                    bits: amount.bits()
                }
            );
        }
        let mut bytes = [0u8; PACKED_PAYLOAD_SIZE];
        bytes[..ADDRESS_SIZE].copy_from_slice(address.as_bytes());
        bytes[ADDRESS_SIZE..].copy_from_slice(&amount_to_uint256_be(amount));
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; PACKED_PAYLOAD_SIZE] {
        &self.0
    }

    pub fn to_bytes(&self) -> [u8; PACKED_PAYLOAD_SIZE] {
        self.0
    }
}

/// Encode `amount` as a 32-byte big-endian `uint256`.
///
/// Only the low 256 bits are kept; higher magnitude is silently dropped.
/// Callers that want overflow rejected go through [`PackedPayload::new`]
/// with [`OverflowPolicy::Reject`].
pub fn amount_to_uint256_be(amount: &Amount) -> [u8; AMOUNT_SIZE] {
    let mut out = [0u8; AMOUNT_SIZE];
    let bytes = amount.to_bytes_be();
    if bytes.len() >= AMOUNT_SIZE {
        out.copy_from_slice(&bytes[bytes.len() - AMOUNT_SIZE..]);
    } else {
        out[AMOUNT_SIZE - bytes.len()..].copy_from_slice(&bytes);
    }
    out
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
