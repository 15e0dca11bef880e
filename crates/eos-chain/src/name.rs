//! Base-32 packed account and action names.
//!
//! Names use the 32-character alphabet `.12345abcdefghijklmnopqrstuvwxyz`
//! packed five bits per character from the top of a `u64`. This crate
//! accepts names of up to 12 characters; the chain's 13th-character form is
//! never produced by the signup flow.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChainError;

const ALPHABET: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";

/// Longest name this codec accepts.
pub const MAX_NAME_LEN: usize = 12;

/// A base-32 packed on-chain name (account, action, or permission).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Name(u64);

const fn char_value(c: u8) -> u64 {
    match c {
        b'.' => 0,
        b'1'..=b'5' => (c - b'1' + 1) as u64,
        b'a'..=b'z' => (c - b'a' + 6) as u64,
        _ => panic!("name characters must be one of .12345a-z"),
    }
}

fn try_char_value(c: u8) -> Option<u64> {
    match c {
        b'.' | b'1'..=b'5' | b'a'..=b'z' => Some(char_value(c)),
        _ => None,
    }
}

impl Name {
    /// Build a name from a literal, panicking at compile time on invalid
    /// input when used in a `const` context.
    pub const fn from_static(s: &str) -> Self {
        let bytes = s.as_bytes();
        assert!(
            !bytes.is_empty() && bytes.len() <= MAX_NAME_LEN,
            "name must be 1-12 characters"
        );
        let mut value = 0u64;
        let mut i = 0;
        while i < bytes.len() {
            value |= char_value(bytes[i]) << (59 - 5 * i);
            i += 1;
        }
        Name(value)
    }

    /// The packed representation.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl FromStr for Name {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() > MAX_NAME_LEN {
            return Err(ChainError::InvalidName(format!(
                "must be 1-{MAX_NAME_LEN} characters, got {:?}",
                s
            )));
        }
        let mut value = 0u64;
        for (i, c) in s.bytes().enumerate() {
            let v = try_char_value(c).ok_or_else(|| {
                ChainError::InvalidName(format!(
                    "character {:?} not in .12345a-z in {:?}",
                    c as char, s
                ))
            })?;
            value |= v << (59 - 5 * i);
        }
        Ok(Name(value))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(13);
        for i in 0..13 {
            let v = if i == 12 {
                (self.0 & 0x0f) as usize
            } else {
                ((self.0 >> (59 - 5 * i)) & 0x1f) as usize
            };
            out.push(ALPHABET[v] as char);
        }
        f.write_str(out.trim_end_matches('.'))
    }
}
