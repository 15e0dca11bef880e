use thiserror::Error;

use crate::symbol::Symbol;

/// Chain value type errors.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("invalid asset: {0}")]
    InvalidAsset(String),

    #[error("symbol mismatch: expected {expected}, found {found}")]
    SymbolMismatch { expected: Symbol, found: Symbol },

    #[error("asset amount overflow")]
    AmountOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_symbol() {
        let err = ChainError::InvalidSymbol("code too long".into());
        assert_eq!(err.to_string(), "invalid symbol: code too long");
    }

    #[test]
    fn display_invalid_name() {
        let err = ChainError::InvalidName("bad character".into());
        assert_eq!(err.to_string(), "invalid name: bad character");
    }

    #[test]
    fn display_symbol_mismatch() {
        let err = ChainError::SymbolMismatch {
            expected: Symbol::from_static(4, "EOS"),
            found: Symbol::from_static(4, "SYS"),
        };
        assert_eq!(err.to_string(), "symbol mismatch: expected 4,EOS, found 4,SYS");
    }

    #[test]
    fn display_amount_overflow() {
        let err = ChainError::AmountOverflow;
        assert_eq!(err.to_string(), "asset amount overflow");
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(ChainError::AmountOverflow);
        assert!(err.to_string().contains("overflow"));
    }
}
