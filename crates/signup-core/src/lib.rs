//! Deposit-triggered account signup.
//!
//! Turns an incoming core-asset transfer with a `<name> <EOS-key>` memo into
//! the ordered action sequence that creates the account, buys its RAM,
//! delegates NET/CPU stake, and refunds any remainder. Every stage fails
//! fast: a single malformed byte in the memo rejects the whole deposit
//! before any action is composed.
//!
//! The surrounding runtime supplies two capabilities: a
//! [`MarketQuoteSource`] for the RAM market snapshot and an [`ActionSink`]
//! that carries the composed actions into the enclosing transaction.

pub mod compose;
pub mod config;
pub mod error;
pub mod handler;
pub mod memo;
pub mod plan;
pub mod pricing;

pub use config::SignupConfig;
pub use error::SignupError;
pub use handler::{ActionSink, MarketQuoteSource, SignupHandler, TransferNotice};
pub use plan::AllocationPlan;
pub use pricing::MarketQuote;
