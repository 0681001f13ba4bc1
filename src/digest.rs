//! Message digest construction for claim signatures.
//!
//! The contract side verifies claims against
//! `keccak256(prefix ‖ keccak256(packed_payload))`, where the prefix is the
//! personal-message domain separator. The double hash keeps a signed claim
//! from ever colliding with a raw transaction hash.

use sha3::{Digest, Keccak256};

use crate::encoding::PackedPayload;

/// Personal-message domain separator: the control byte `0x19`, the literal
/// text `Ethereum Signed Message:`, a newline, then the ASCII digits `3`
/// and `2`. The `32` suffix is a fixed literal since the inner digest is
/// always exactly 32 bytes; it must not be derived from the input length.
pub const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// A 256-bit hash capability.
///
/// The pipeline only ever invokes this through the trait, so a different
/// backend (hardware keccak, a host-provided primitive) can be swapped in
/// without touching the encoding or formatting logic.
pub trait Hasher256 {
    fn hash(&self, data: &[u8]) -> [u8; 32];
}

/// Keccak-256 backend used by the default pipeline.
#[derive(Copy, Clone, Debug, Default)]
pub struct Keccak256Hasher;

impl Hasher256 for Keccak256Hasher {
    fn hash(&self, data: &[u8]) -> [u8; 32] {
        Keccak256::digest(data).into()
    }
}

/// Digest of the packed payload, wrapped in the personal-message prefix.
///
/// This is the 32-byte message the signer authorizes.
pub fn claim_digest<H: Hasher256>(payload: &PackedPayload, hasher: &H) -> [u8; 32] {
    let inner = hasher.hash(payload.as_bytes());
    prefixed_digest(&inner, hasher)
}

/// `H(prefix ‖ inner)` for a 32-byte inner digest.
pub fn prefixed_digest<H: Hasher256>(inner: &[u8; 32], hasher: &H) -> [u8; 32] {
    let mut prefixed = [0u8; SIGNED_MESSAGE_PREFIX.len() + 32];
    prefixed[..SIGNED_MESSAGE_PREFIX.len()].copy_from_slice(SIGNED_MESSAGE_PREFIX);
    prefixed[SIGNED_MESSAGE_PREFIX.len()..].copy_from_slice(inner);
    hasher.hash(&prefixed)
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    extern crate wasm_bindgen_test;
    use super::*;
    use crate::{encoding::OverflowPolicy, Amount, ChannelAddress};
    use wasm_bindgen_test::*;

    #[test]
    #[wasm_bindgen_test]
    fn prefix_matches_the_contract_literal() {
        assert_eq!(SIGNED_MESSAGE_PREFIX.len(), 28);
        assert_eq!(SIGNED_MESSAGE_PREFIX[0], 0x19);
        assert_eq!(&SIGNED_MESSAGE_PREFIX[1..25], b"Ethereum Signed Message:");
        assert_eq!(SIGNED_MESSAGE_PREFIX[25], b'\n');
        assert_eq!(&SIGNED_MESSAGE_PREFIX[26..], b"32");
    }

    #[test]
    #[wasm_bindgen_test]
    fn keccak_backend_matches_known_vector() {
        let hasher = Keccak256Hasher;
        assert_eq!(
            hex::encode(hasher.hash(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    #[wasm_bindgen_test]
    fn claim_digest_matches_reference_vector() {
        let mut address = [0u8; 20];
        address[19] = 0x01;
        let payload = PackedPayload::new(
            &ChannelAddress::new(address),
            &Amount::from(1u8),
            OverflowPolicy::Truncate,
        )
        .unwrap();

        let hasher = Keccak256Hasher;
        let inner = hasher.hash(payload.as_bytes());
        assert_eq!(
            hex::encode(inner),
            "2a5bb61d4b6540294819af4b6a2b302e0fcb2b698020f535cd8182b0a910da9f"
        );
        assert_eq!(
            hex::encode(claim_digest(&payload, &hasher)),
            "6468c52c15cac2bdc253ee945d0b4688c89b64b22916b44e95def60ce5d478c4"
        );
    }
}
