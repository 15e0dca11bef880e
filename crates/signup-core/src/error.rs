use eos_chain::{Asset, ChainError, Symbol};
use eos_keys::KeyError;
use thiserror::Error;

/// Signup handler errors. All are synchronous and terminal: any one aborts
/// the invocation before actions are submitted.
#[derive(Debug, Error)]
pub enum SignupError {
    #[error("only the core symbol is accepted for signup, got {0}")]
    UnsupportedSymbol(Symbol),

    #[error("invalid deposit quantity: {0}")]
    InvalidAmount(String),

    #[error("account name and public key must be separated by space or dash")]
    MalformedMemo,

    #[error("length of account name should be 12, got {0}")]
    InvalidAccountLength(usize),

    #[error("invalid account name: {0}")]
    InvalidAccountName(String),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error("invalid market quote: {0}")]
    InvalidMarketQuote(String),

    #[error("market quote unavailable: {0}")]
    MarketUnavailable(String),

    #[error("not enough balance to buy ram, short by {0}")]
    InsufficientFunds(Asset),

    #[error("action submission failed: {0}")]
    Transport(String),
}
