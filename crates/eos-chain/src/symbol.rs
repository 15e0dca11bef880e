//! Packed asset symbols.
//!
//! A symbol is a decimal precision plus a 1-7 character uppercase code,
//! packed into a single `u64`: the low byte holds the precision and the
//! remaining bytes hold the code characters in order. `4,EOS` is the core
//! symbol's canonical text form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChainError;

/// Highest decimal precision a symbol may carry.
pub const MAX_PRECISION: u8 = 18;

/// An asset symbol: decimal precision + uppercase code, packed into a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(u64);

impl Symbol {
    /// Build a symbol, validating precision and code at runtime.
    pub fn new(precision: u8, code: &str) -> Result<Self, ChainError> {
        if precision > MAX_PRECISION {
            return Err(ChainError::InvalidSymbol(format!(
                "precision {precision} exceeds maximum {MAX_PRECISION}"
            )));
        }
        if code.is_empty() || code.len() > 7 {
            return Err(ChainError::InvalidSymbol(format!(
                "code must be 1-7 characters, got {:?}",
                code
            )));
        }
        let mut raw = precision as u64;
        for (i, b) in code.bytes().enumerate() {
            if !b.is_ascii_uppercase() {
                return Err(ChainError::InvalidSymbol(format!(
                    "code must be uppercase A-Z, got {:?}",
                    code
                )));
            }
            raw |= (b as u64) << (8 * (i + 1));
        }
        Ok(Symbol(raw))
    }

    /// Build a symbol from literals, panicking at compile time on invalid
    /// input when used in a `const` context.
    pub const fn from_static(precision: u8, code: &str) -> Self {
        let bytes = code.as_bytes();
        assert!(precision <= MAX_PRECISION, "symbol precision exceeds maximum");
        assert!(
            !bytes.is_empty() && bytes.len() <= 7,
            "symbol code must be 1-7 characters"
        );
        let mut raw = precision as u64;
        let mut i = 0;
        while i < bytes.len() {
            assert!(bytes[i].is_ascii_uppercase(), "symbol code must be uppercase A-Z");
            raw |= (bytes[i] as u64) << (8 * (i + 1));
            i += 1;
        }
        Symbol(raw)
    }

    /// The packed representation.
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// Decimal precision (number of fractional digits).
    pub fn precision(&self) -> u8 {
        (self.0 & 0xff) as u8
    }

    /// The symbol code, e.g. `"EOS"`.
    pub fn code(&self) -> String {
        let mut out = String::with_capacity(7);
        let mut rest = self.0 >> 8;
        while rest > 0 {
            let b = (rest & 0xff) as u8;
            if b == 0 {
                break;
            }
            out.push(b as char);
            rest >>= 8;
        }
        out
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision(), self.code())
    }
}

impl FromStr for Symbol {
    type Err = ChainError;

    /// Parse the `"<precision>,<CODE>"` form, e.g. `"4,EOS"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (precision, code) = s
            .split_once(',')
            .ok_or_else(|| ChainError::InvalidSymbol(format!("expected \"p,CODE\", got {s:?}")))?;
        let precision: u8 = precision
            .parse()
            .map_err(|_| ChainError::InvalidSymbol(format!("bad precision in {s:?}")))?;
        Symbol::new(precision, code)
    }
}
