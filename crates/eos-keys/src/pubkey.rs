//! Parse and encode the legacy 53-character key format.

use eos_chain::PublicKey;
use ripemd::{Digest, Ripemd160};

use crate::error::KeyError;

/// Literal prefix on every legacy key string.
pub const LEGACY_PREFIX: &str = "EOS";

/// Total length of the text form: 3-character prefix + 50 base-58 characters.
pub const ENCODED_LEN: usize = 53;

const KEY_LEN: usize = 33;
const CHECKSUM_LEN: usize = 4;
/// Decoded blob: key material followed by the checksum.
const PAYLOAD_LEN: usize = KEY_LEN + CHECKSUM_LEN;

/// Parse and validate a legacy `EOS...` public-key string.
///
/// Checks, in order: total length, prefix, base-58 alphabet, decoded length,
/// and the embedded RIPEMD-160 checksum (first 4 digest bytes over the
/// 33-byte key material must equal the trailing 4 payload bytes). No
/// curve-membership check is performed; the checksum is the integrity gate.
pub fn parse_public_key(text: &str) -> Result<PublicKey, KeyError> {
    if text.len() != ENCODED_LEN {
        return Err(KeyError::InvalidLength(text.len()));
    }
    let encoded = text
        .strip_prefix(LEGACY_PREFIX)
        .ok_or(KeyError::MissingPrefix)?;

    let payload = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| KeyError::Base58Decode(e.to_string()))?;
    if payload.len() != PAYLOAD_LEN {
        return Err(KeyError::InvalidEncoding(payload.len()));
    }

    let (key, checksum) = payload.split_at(KEY_LEN);
    let digest = Ripemd160::digest(key);
    if digest[..CHECKSUM_LEN] != *checksum {
        return Err(KeyError::ChecksumMismatch);
    }

    let mut data = [0u8; KEY_LEN];
    data.copy_from_slice(key);
    Ok(PublicKey::k1(data))
}

/// Encode 33 bytes of compressed key material as a legacy `EOS...` string.
///
/// Appends the first 4 bytes of the RIPEMD-160 digest as the checksum, so
/// any output of this function parses back successfully.
pub fn encode_public_key(data: &[u8; 33]) -> String {
    let digest = Ripemd160::digest(data);
    let mut payload = Vec::with_capacity(PAYLOAD_LEN);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&digest[..CHECKSUM_LEN]);
    format!("{LEGACY_PREFIX}{}", bs58::encode(payload).into_string())
}
