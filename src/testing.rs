//! Helpers for tests and benchmarks.

use k256::{ecdsa::SigningKey, elliptic_curve::sec1::ToEncodedPoint};
use rand_core::{CryptoRng, RngCore};
use sha3::{Digest, Keccak256};

use crate::{ChannelAddress, PrivateScalar, ADDRESS_SIZE};

/// Generate a random in-range private scalar.
pub fn gen_private_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> PrivateScalar {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&SigningKey::random(rng).to_bytes());
    PrivateScalar::new(bytes)
}

/// Generate a random channel address.
pub fn gen_channel_address<R: RngCore + CryptoRng>(rng: &mut R) -> ChannelAddress {
    let mut bytes = [0u8; ADDRESS_SIZE];
    rng.fill_bytes(&mut bytes);
    ChannelAddress::new(bytes)
}

/// The Ethereum address controlled by `key`: the low 20 bytes of the
/// keccak-256 digest of the uncompressed public key.
pub fn signer_address(key: &PrivateScalar) -> [u8; ADDRESS_SIZE] {
    let signing_key = SigningKey::from_slice(key.as_bytes()).expect("valid scalar");
    let point = signing_key.verifying_key().to_encoded_point(false);
    let digest = Keccak256::digest(&point.as_bytes()[1..]);
    let mut address = [0u8; ADDRESS_SIZE];
    address.copy_from_slice(&digest[12..]);
    address
}
