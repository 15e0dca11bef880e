//! Fixed-point asset quantities.
//!
//! An [`Asset`] is an integer amount in the symbol's smallest unit plus the
//! symbol itself. Subtraction is symbol-checked so that quantities of
//! different assets can never be mixed silently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChainError;
use crate::symbol::Symbol;

/// Largest representable magnitude, matching the chain's `2^62 - 1` bound.
pub const MAX_AMOUNT: i64 = (1 << 62) - 1;

/// A fixed-point quantity of a single asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    /// Amount in the smallest unit (`10^-precision` of the whole asset).
    pub amount: i64,
    /// The asset's symbol.
    pub symbol: Symbol,
}

impl Asset {
    pub fn new(amount: i64, symbol: Symbol) -> Self {
        Asset { amount, symbol }
    }

    /// Whether the amount is within the chain's representable range.
    pub fn is_valid(&self) -> bool {
        self.amount >= -MAX_AMOUNT && self.amount <= MAX_AMOUNT
    }

    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Symbol-checked, overflow-checked subtraction.
    pub fn checked_sub(self, other: Asset) -> Result<Asset, ChainError> {
        if self.symbol != other.symbol {
            return Err(ChainError::SymbolMismatch {
                expected: self.symbol,
                found: other.symbol,
            });
        }
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(ChainError::AmountOverflow)?;
        Ok(Asset::new(amount, self.symbol))
    }

    /// Symbol-checked, overflow-checked addition.
    pub fn checked_add(self, other: Asset) -> Result<Asset, ChainError> {
        if self.symbol != other.symbol {
            return Err(ChainError::SymbolMismatch {
                expected: self.symbol,
                found: other.symbol,
            });
        }
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(ChainError::AmountOverflow)?;
        Ok(Asset::new(amount, self.symbol))
    }
}

impl fmt::Display for Asset {
    /// Canonical text form, e.g. `"2.5000 EOS"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.symbol.precision() as u32;
        if precision == 0 {
            return write!(f, "{} {}", self.amount, self.symbol.code());
        }
        let scale = 10i64.pow(precision);
        let whole = self.amount / scale;
        let frac = (self.amount % scale).abs();
        // A negative amount smaller than one whole unit loses its sign in
        // the integer division above.
        let sign = if self.amount < 0 && whole == 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{whole}.{frac:0width$} {}",
            self.symbol.code(),
            width = precision as usize
        )
    }
}

impl FromStr for Asset {
    type Err = ChainError;

    /// Parse the canonical text form, e.g. `"2.5000 EOS"`. The number of
    /// fractional digits determines the symbol's precision.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, code) = s
            .split_once(' ')
            .ok_or_else(|| ChainError::InvalidAsset(format!("expected \"amount CODE\", got {s:?}")))?;
        let (whole, frac) = match number.split_once('.') {
            Some((w, fr)) => (w, fr),
            None => (number, ""),
        };
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ChainError::InvalidAsset(format!(
                "bad fractional digits in {s:?}"
            )));
        }
        let combined = format!("{whole}{frac}");
        let amount: i64 = combined
            .parse()
            .map_err(|_| ChainError::InvalidAsset(format!("bad amount in {s:?}")))?;
        let symbol = Symbol::new(frac.len() as u8, code)?;
        Ok(Asset::new(amount, symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EOS: Symbol = Symbol::from_static(4, "EOS");

    #[test]
    fn display_core_asset() {
        assert_eq!(Asset::new(25_000, EOS).to_string(), "2.5000 EOS");
    }

    #[test]
    fn display_sub_unit_asset() {
        assert_eq!(Asset::new(900, EOS).to_string(), "0.0900 EOS");
    }

    #[test]
    fn display_negative_sub_unit_asset() {
        assert_eq!(Asset::new(-3_900, EOS).to_string(), "-0.3900 EOS");
    }

    #[test]
    fn display_zero_precision() {
        let sym = Symbol::from_static(0, "RAM");
        assert_eq!(Asset::new(4096, sym).to_string(), "4096 RAM");
    }

    #[test]
    fn parse_roundtrip() {
        let asset: Asset = "2.5000 EOS".parse().unwrap();
        assert_eq!(asset, Asset::new(25_000, EOS));
        assert_eq!(asset.to_string(), "2.5000 EOS");
    }

    #[test]
    fn parse_negative() {
        let asset: Asset = "-0.3900 EOS".parse().unwrap();
        assert_eq!(asset.amount, -3_900);
    }

    #[test]
    fn parse_missing_code_rejected() {
        assert!("2.5000".parse::<Asset>().is_err());
    }

    #[test]
    fn parse_bad_digits_rejected() {
        assert!("2.5x00 EOS".parse::<Asset>().is_err());
    }

    #[test]
    fn checked_sub_same_symbol() {
        let a = Asset::new(25_000, EOS);
        let b = Asset::new(19_600, EOS);
        assert_eq!(a.checked_sub(b).unwrap(), Asset::new(5_400, EOS));
    }

    #[test]
    fn checked_sub_can_go_negative() {
        let a = Asset::new(400, EOS);
        let b = Asset::new(500, EOS);
        assert_eq!(a.checked_sub(b).unwrap().amount, -100);
    }

    #[test]
    fn checked_sub_symbol_mismatch() {
        let a = Asset::new(100, EOS);
        let b = Asset::new(100, Symbol::from_static(4, "SYS"));
        assert!(matches!(
            a.checked_sub(b),
            Err(ChainError::SymbolMismatch { .. })
        ));
    }

    #[test]
    fn checked_sub_overflow() {
        let a = Asset::new(i64::MIN, EOS);
        let b = Asset::new(1, EOS);
        assert!(matches!(a.checked_sub(b), Err(ChainError::AmountOverflow)));
    }

    #[test]
    fn checked_add_symbol_mismatch() {
        let a = Asset::new(100, EOS);
        let b = Asset::new(100, Symbol::from_static(4, "SYS"));
        assert!(matches!(
            a.checked_add(b),
            Err(ChainError::SymbolMismatch { .. })
        ));
    }

    #[test]
    fn validity_bounds() {
        assert!(Asset::new(MAX_AMOUNT, EOS).is_valid());
        assert!(Asset::new(-MAX_AMOUNT, EOS).is_valid());
        assert!(!Asset::new(MAX_AMOUNT + 1, EOS).is_valid());
    }

    #[test]
    fn positivity() {
        assert!(Asset::new(1, EOS).is_positive());
        assert!(!Asset::new(0, EOS).is_positive());
        assert!(!Asset::new(-1, EOS).is_positive());
    }
}
