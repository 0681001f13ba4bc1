//! Authorization signatures for off-chain payment-channel claims.
//!
//! A channel contract releases funds against a claim signed by the channel
//! owner. On chain the claim is checked with `ecrecover` over
//! `keccak256(prefix ‖ keccak256(abi.encodePacked(address, amount)))`, so
//! the off-chain side has to reproduce that byte layout exactly. This crate
//! packs the claim, derives the prefixed digest, signs it with a
//! deterministic recoverable ECDSA signature over secp256k1 and assembles
//! the 65-byte `r ‖ s ‖ v` blob the contract expects.
//!
//! The whole pipeline is a pure function of its inputs: validate → encode →
//! digest → sign → format, no shared state, identical inputs always yield
//! an identical [`SignedClaim`].

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

#[macro_use]
pub(crate) mod macros;

pub mod digest;
pub mod encoding;
pub mod errors;
pub mod signature;
pub mod signer;
pub mod testing;

pub use digest::{claim_digest, Hasher256, Keccak256Hasher, SIGNED_MESSAGE_PREFIX};
pub use encoding::{OverflowPolicy, PackedPayload, ADDRESS_SIZE, PACKED_PAYLOAD_SIZE};
pub use errors::{Error, Result};
pub use signature::{RecoverableSignature, SignedClaim, SIGNATURE_SIZE};
pub use signer::{RecoverableSigner, Secp256k1Signer};

/// Size of a secp256k1 private scalar in bytes.
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Claim amounts arrive as arbitrary-precision integers. Only the low 256
/// bits survive packed encoding; see [`OverflowPolicy`] for how overflow is
/// handled.
pub type Amount = num_bigint::BigUint;

fn strip_hex_prefix(input: &str) -> &str {
    input.strip_prefix("0x").unwrap_or(input)
}

// ------------------------------------------------------------------------
// Validated inputs
// ------------------------------------------------------------------------

/// A 32-byte secp256k1 private scalar.
///
/// Validation only checks the length. A zero or out-of-curve-order scalar
/// is accepted here and rejected by the signing backend, keeping the
/// range check in one place.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateScalar([u8; PRIVATE_KEY_SIZE]);

impl PrivateScalar {
    pub fn new(bytes: [u8; PRIVATE_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Decode from hex, stripping an optional `0x` prefix first.
    pub fn from_hex(key: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(strip_hex_prefix(key))?)
    }

    /// Validate a raw byte slice as a private scalar.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        ensure!(
            bytes.len() == PRIVATE_KEY_SIZE,
            Error::InvalidKeyLength {
                length: bytes.len()
            }
        );
        let mut scalar = [0u8; PRIVATE_KEY_SIZE];
        scalar.copy_from_slice(bytes);
        Ok(Self(scalar))
    }

    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for PrivateScalar {
    // Key material stays out of logs and panic messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateScalar(<redacted>)")
    }
}

/// A 20-byte channel contract address.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChannelAddress([u8; ADDRESS_SIZE]);

impl ChannelAddress {
    pub fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    /// Decode from hex, stripping an optional `0x` prefix first.
    pub fn from_hex(address: &str) -> Result<Self> {
        Self::from_slice(&hex::decode(strip_hex_prefix(address))?)
    }

    /// Validate a raw byte slice as a channel address.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        ensure!(
            bytes.len() == ADDRESS_SIZE,
            Error::InvalidAddressLength {
                length: bytes.len()
            }
        );
        let mut address = [0u8; ADDRESS_SIZE];
        address.copy_from_slice(bytes);
        Ok(Self(address))
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    /// `0x`-prefixed lowercase hex form.
    pub fn to_hex(&self) -> String {
        signature::prefixed_hex(&self.0)
    }
}

// ------------------------------------------------------------------------
// The claim-signing pipeline
// ------------------------------------------------------------------------

/// The claim-signing pipeline with injectable hash and signing backends.
///
/// The default instantiation runs keccak-256 ([`Keccak256Hasher`]) and
/// software ECDSA ([`Secp256k1Signer`]); both seams exist so a different
/// backend (an HSM-backed signer, a host-provided keccak) can be swapped
/// in without touching the encoding or formatting logic.
#[derive(Copy, Clone, Debug, Default)]
pub struct ClaimSigner<H = Keccak256Hasher, S = Secp256k1Signer> {
    hasher: H,
    signer: S,
    overflow_policy: OverflowPolicy,
}

impl ClaimSigner {
    /// Pipeline over the default backends, truncating oversized amounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default backends, but amounts over 256 bits fail with
    /// [`Error::AmountOverflow`] instead of truncating.
    pub fn strict() -> Self {
        Self {
            overflow_policy: OverflowPolicy::Reject,
            ..Self::default()
        }
    }
}

impl<H: Hasher256, S: RecoverableSigner> ClaimSigner<H, S> {
    /// Pipeline over caller-provided backends.
    pub fn with_backends(hasher: H, signer: S, overflow_policy: OverflowPolicy) -> Self {
        Self {
            hasher,
            signer,
            overflow_policy,
        }
    }

    /// Sign a claim of `amount` against the channel at `address`.
    ///
    /// Strictly sequential: encode the packed payload, derive the prefixed
    /// digest, sign, assemble. Any failure aborts the pipeline with no
    /// partial result.
    pub fn sign_claim(
        &self,
        key: &PrivateScalar,
        address: &ChannelAddress,
        amount: &Amount,
    ) -> Result<SignedClaim> {
        let payload = PackedPayload::new(address, amount, self.overflow_policy)?;
        let message_hash = claim_digest(&payload, &self.hasher);
        log::trace!(
            "signing claim against channel {} ({} bit amount)",
            address.to_hex(),
            amount.bits()
        );
        let sig = self.signer.sign_digest(&message_hash, key)?;
        Ok(SignedClaim::assemble(message_hash, &sig))
    }
}

/// Sign a claim with the default backends, taking the hex forms the
/// channel tooling supplies: a 64-digit private key and a 40-digit
/// contract address, each with an optional `0x` prefix.
pub fn sign_claim(
    private_key_hex: &str,
    address_hex: &str,
    amount: &Amount,
) -> Result<SignedClaim> {
    let key = PrivateScalar::from_hex(private_key_hex)?;
    let address = ChannelAddress::from_hex(address_hex)?;
    ClaimSigner::new().sign_claim(&key, &address, amount)
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
