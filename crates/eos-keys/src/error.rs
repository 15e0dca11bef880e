use thiserror::Error;

/// Public-key text parsing errors, one variant per distinguishable failure.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("length of public key should be 53, got {0}")]
    InvalidLength(usize),

    #[error("public key should be prefixed with EOS")]
    MissingPrefix,

    #[error("base58 decode failed: {0}")]
    Base58Decode(String),

    #[error("decoded public key should be 37 bytes, got {0}")]
    InvalidEncoding(usize),

    #[error("public key checksum mismatch")]
    ChecksumMismatch,
}
