//! RAM unit pricing from a market snapshot.

use eos_chain::Asset;
use serde::{Deserialize, Serialize};

use crate::error::SignupError;

/// A two-balance market snapshot read from the external RAM market table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketQuote {
    /// The resource side of the market (RAM).
    pub base: Asset,
    /// The core-asset side of the market.
    pub quote: Asset,
}

/// Per-byte RAM price as the plain `quote/base` balance ratio.
///
/// The ratio over raw integer amounts is the defined contract here; it only
/// approximates the chain's real exchange algorithm and is deliberately not
/// corrected toward it. Degenerate snapshots (non-positive balances) are
/// rejected rather than producing non-finite prices.
pub fn unit_price(market: &MarketQuote) -> Result<f64, SignupError> {
    if market.base.amount <= 0 || market.quote.amount <= 0 {
        return Err(SignupError::InvalidMarketQuote(format!(
            "non-positive balance: base {}, quote {}",
            market.base, market.quote
        )));
    }
    Ok(market.quote.amount as f64 / market.base.amount as f64)
}
