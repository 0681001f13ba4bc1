use thiserror::Error;

/// Claim signing error.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// The decoded private key was not exactly 32 bytes.
    #[error("Private key must be exactly 32 bytes, got {length}")]
    InvalidKeyLength { length: usize },

    /// The decoded channel address was not exactly 20 bytes.
    #[error("Channel address must be exactly 20 bytes, got {length}")]
    InvalidAddressLength { length: usize },

    /// A textual input could not be decoded as hex.
    #[error("Invalid hex encoding: {0}")]
    InvalidHexEncoding(#[from] hex::FromHexError),

    /// The claim amount needs more than 256 bits and the pipeline was
    /// configured to reject rather than truncate.
    #[error("Claim amount of {bits} bits does not fit in a uint256")]
    AmountOverflow { bits: u64 },

    /// The signing backend rejected the key or digest. The private scalar
    /// is range-checked there, not during input validation.
    #[error("ECDSA signing failed: {reason}")]
    SigningFailure { reason: String },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
