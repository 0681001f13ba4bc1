//! Signature normalization and the signed-claim output record.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// Offset added to the recovery id to produce the `v` byte, per the
/// `ecrecover` convention.
pub const V_OFFSET: u8 = 27;

/// Size of the assembled `r ‖ s ‖ v` signature blob in bytes.
pub const SIGNATURE_SIZE: usize = 65;

/// A canonical recoverable ECDSA signature as handed back by the signing
/// backend: low-s `r` and `s`, plus a recovery id of 0 or 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    r: [u8; 32],
    s: [u8; 32],
    recovery_id: u8,
}

impl RecoverableSignature {
    pub fn new(r: [u8; 32], s: [u8; 32], recovery_id: u8) -> Self {
        Self { r, s, recovery_id }
    }

    /// Split a raw 64-byte `r ‖ s` signature into its components.
    pub fn from_compact(bytes: &[u8; 64], recovery_id: u8) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Self { r, s, recovery_id }
    }

    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    pub fn recovery_id(&self) -> u8 {
        self.recovery_id
    }
}

/// The signed claim handed back to the caller: the message digest, the
/// 65-byte `r ‖ s ‖ v` blob the contract expects, and the individual
/// signature components.
///
/// Every field is also exposed as `0x`-prefixed lowercase hex, the form the
/// channel tooling passes around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedClaim {
    message_hash: [u8; 32],
    signature: [u8; SIGNATURE_SIZE],
    r: [u8; 32],
    s: [u8; 32],
    v: u8,
}

impl SignedClaim {
    /// Derive `v` and assemble the 65-byte `r ‖ s ‖ v` blob.
    pub fn assemble(message_hash: [u8; 32], signature: &RecoverableSignature) -> Self {
        let v = V_OFFSET + signature.recovery_id();
        let mut blob = [0u8; SIGNATURE_SIZE];
        blob[..32].copy_from_slice(signature.r());
        blob[32..64].copy_from_slice(signature.s());
        blob[64] = v;
        Self {
            message_hash,
            signature: blob,
            r: *signature.r(),
            s: *signature.s(),
            v,
        }
    }

    pub fn message_hash(&self) -> &[u8; 32] {
        &self.message_hash
    }

    pub fn signature(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.signature
    }

    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// Either 27 or 28.
    pub fn v(&self) -> u8 {
        self.v
    }

    pub fn message_hash_hex(&self) -> String {
        prefixed_hex(&self.message_hash)
    }

    pub fn signature_hex(&self) -> String {
        prefixed_hex(&self.signature)
    }

    pub fn r_hex(&self) -> String {
        prefixed_hex(&self.r)
    }

    pub fn s_hex(&self) -> String {
        prefixed_hex(&self.s)
    }
}

impl fmt::Display for SignedClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signature_hex())
    }
}

#[cfg(feature = "serde")]
impl Serialize for SignedClaim {
    /// Serializes with the field names and `0x`-hex values the channel
    /// tooling exchanges as JSON.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SignedClaim", 5)?;
        state.serialize_field("messageHash", &self.message_hash_hex())?;
        state.serialize_field("signatureBytes", &self.signature_hex())?;
        state.serialize_field("r", &self.r_hex())?;
        state.serialize_field("s", &self.s_hex())?;
        state.serialize_field("v", &self.v)?;
        state.end()
    }
}

/// Render bytes as `0x`-prefixed lowercase hex.
pub fn prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    extern crate wasm_bindgen_test;
    use super::*;
    use wasm_bindgen_test::*;

    fn sample_signature(recovery_id: u8) -> RecoverableSignature {
        RecoverableSignature::new([0xAAu8; 32], [0xBBu8; 32], recovery_id)
    }

    #[test]
    #[wasm_bindgen_test]
    fn from_compact_splits_r_and_s() {
        let mut compact = [0u8; 64];
        compact[..32].copy_from_slice(&[0xAAu8; 32]);
        compact[32..].copy_from_slice(&[0xBBu8; 32]);
        assert_eq!(
            RecoverableSignature::from_compact(&compact, 1),
            sample_signature(1)
        );
    }

    #[test]
    #[wasm_bindgen_test]
    fn assemble_places_v_as_trailing_byte() {
        let claim = SignedClaim::assemble([0x01u8; 32], &sample_signature(0));
        assert_eq!(claim.v(), 27);
        assert_eq!(claim.signature()[..32], [0xAAu8; 32]);
        assert_eq!(claim.signature()[32..64], [0xBBu8; 32]);
        assert_eq!(claim.signature()[64], 27);

        let claim = SignedClaim::assemble([0x01u8; 32], &sample_signature(1));
        assert_eq!(claim.v(), 28);
        assert_eq!(claim.signature()[64], 28);
    }

    #[test]
    #[wasm_bindgen_test]
    fn hex_accessors_round_trip() {
        let claim = SignedClaim::assemble([0x01u8; 32], &sample_signature(1));

        let hash = claim.message_hash_hex();
        assert!(hash.starts_with("0x") && hash.len() == 2 + 64);
        assert_eq!(
            hex::decode(&hash[2..]).unwrap(),
            claim.message_hash().to_vec()
        );

        let sig = claim.signature_hex();
        assert!(sig.starts_with("0x") && sig.len() == 2 + 130);
        let decoded = hex::decode(&sig[2..]).unwrap();
        assert_eq!(decoded, claim.signature().to_vec());
        assert_eq!(&decoded[..32], claim.r());
        assert_eq!(&decoded[32..64], claim.s());

        assert_eq!(hex::decode(&claim.r_hex()[2..]).unwrap(), claim.r().to_vec());
        assert_eq!(hex::decode(&claim.s_hex()[2..]).unwrap(), claim.s().to_vec());
    }
}
