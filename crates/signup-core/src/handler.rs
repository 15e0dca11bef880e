//! The deposit handler: one synchronous decision per incoming transfer.

use eos_chain::{Asset, Name, OutboundAction, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::compose;
use crate::config::SignupConfig;
use crate::error::SignupError;
use crate::memo;
use crate::plan;
use crate::pricing::{self, MarketQuote};

/// Table key of the RAM market quote.
pub const RAM_MARKET_SYMBOL: Symbol = Symbol::from_static(4, "RAMCORE");

/// Notification of an inbound value transfer, delivered by the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferNotice {
    pub from: Name,
    pub to: Name,
    pub quantity: Asset,
    pub memo: String,
}

/// Read-only lookup of a market quote by its table key. Supplied by the
/// runtime integration; the handler performs exactly one snapshot read per
/// invocation.
pub trait MarketQuoteSource {
    fn market_quote(&self, key: Symbol) -> Result<MarketQuote, SignupError>;
}

/// Ordered submission of outbound actions into the enclosing transaction.
/// The sink does not retry or roll back; all-or-nothing commit is the
/// runtime's guarantee.
pub trait ActionSink {
    fn submit(&mut self, action: OutboundAction) -> Result<(), SignupError>;
}

/// The signup handler bound to its own account and allocation constants.
#[derive(Debug, Clone)]
pub struct SignupHandler {
    account: Name,
    config: SignupConfig,
}

impl SignupHandler {
    pub fn new(account: Name, config: SignupConfig) -> Self {
        SignupHandler { account, config }
    }

    /// The account this handler receives deposits on.
    pub fn account(&self) -> Name {
        self.account
    }

    /// Process one deposit notification.
    ///
    /// Notices where this handler is not the recipient, or is itself the
    /// sender, are ignored. Everything else either submits the full signup
    /// sequence or fails before any action reaches the sink.
    pub fn on_transfer(
        &self,
        notice: &TransferNotice,
        quotes: &impl MarketQuoteSource,
        sink: &mut impl ActionSink,
    ) -> Result<(), SignupError> {
        if notice.from == self.account || notice.to != self.account {
            debug!(from = %notice.from, to = %notice.to, "ignoring transfer not addressed to us");
            return Ok(());
        }

        if notice.quantity.symbol != self.config.core_symbol {
            return Err(SignupError::UnsupportedSymbol(notice.quantity.symbol));
        }
        if !notice.quantity.is_valid() {
            return Err(SignupError::InvalidAmount("quantity out of range".into()));
        }
        if !notice.quantity.is_positive() {
            return Err(SignupError::InvalidAmount("quantity must be positive".into()));
        }

        let parsed = memo::parse_memo(&notice.memo)?;
        let key = eos_keys::parse_public_key(&parsed.key_text)?;

        let market = quotes.market_quote(RAM_MARKET_SYMBOL)?;
        let price = pricing::unit_price(&market)?;
        let plan = plan::allocate(notice.quantity, price, &self.config)?;
        debug!(
            account = %parsed.account,
            ram_price = price,
            ram = %plan.ram_purchase,
            residual = %plan.residual,
            "deposit allocated"
        );

        let actions = compose::signup_actions(self.account, parsed.account, key, &plan);
        let submitted = actions.len();
        for action in actions {
            sink.submit(action)?;
        }
        info!(account = %parsed.account, actions = submitted, "signup submitted");
        Ok(())
    }
}
