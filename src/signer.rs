//! Recoverable ECDSA signing over secp256k1.

use k256::ecdsa::SigningKey;

use crate::{
    errors::{Error, Result},
    signature::RecoverableSignature,
    PrivateScalar,
};

/// A deterministic recoverable ECDSA signing capability over secp256k1.
///
/// Implementations must derive the nonce deterministically (RFC 6979) and
/// return the canonical low-s form, so identical inputs always produce
/// identical signatures. The returned signature and recovery id are passed
/// into formatting unmodified.
pub trait RecoverableSigner {
    /// Sign a 32-byte message digest with a 32-byte private scalar.
    ///
    /// Fails with [`Error::SigningFailure`] when the scalar is zero or not
    /// below the curve order; input validation leaves that range check to
    /// the backend.
    fn sign_digest(
        &self,
        digest: &[u8; 32],
        key: &PrivateScalar,
    ) -> Result<RecoverableSignature>;
}

/// Software signer backed by `k256`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Secp256k1Signer;

impl RecoverableSigner for Secp256k1Signer {
    fn sign_digest(
        &self,
        digest: &[u8; 32],
        key: &PrivateScalar,
    ) -> Result<RecoverableSignature> {
        let signing_key =
            SigningKey::from_slice(key.as_bytes()).map_err(|e| Error::SigningFailure {
                reason: e.to_string(),
            })?;
        let (signature, recovery_id) = signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|e| Error::SigningFailure {
                reason: e.to_string(),
            })?;
        let mut compact = [0u8; 64];
        compact.copy_from_slice(&signature.to_bytes());
        Ok(RecoverableSignature::from_compact(
            &compact,
            recovery_id.to_byte(),
        ))
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
