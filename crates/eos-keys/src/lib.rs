//! Legacy `EOS...` public-key text codec.
//!
//! Keys travel as 53-character strings: the literal `EOS` prefix followed by
//! 50 base-58 characters encoding 33 bytes of compressed key material plus a
//! 4-byte RIPEMD-160 checksum. Parsing validates every step and reports a
//! distinct error per failure mode; it never panics on untrusted input.

pub mod error;
pub mod pubkey;

pub use error::KeyError;
pub use pubkey::{encode_public_key, parse_public_key};
