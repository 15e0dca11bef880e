//! Deposit allocation planning.

use eos_chain::Asset;

use crate::config::SignupConfig;
use crate::error::SignupError;

/// How a deposit is partitioned: RAM purchase, NET/CPU stakes, and whatever
/// is left over for the refund.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationPlan {
    pub ram_purchase: Asset,
    pub net_stake: Asset,
    pub cpu_stake: Asset,
    /// `deposit - net - cpu - ram`; never negative in a valid plan.
    pub residual: Asset,
}

/// Partition `deposit` into stakes, RAM cost, and residual.
///
/// The RAM cost is `ceil(unit_price * ram_bytes * (1 + fee))` in smallest
/// core units; ceiling rounding so the purchase is never under-funded. Pure
/// and deterministic.
pub fn allocate(
    deposit: Asset,
    unit_price: f64,
    config: &SignupConfig,
) -> Result<AllocationPlan, SignupError> {
    let core = config.core_symbol;
    let ram_cost =
        (unit_price * config.ram_bytes as f64 * (1.0 + config.ram_fee_rate)).ceil() as i64;

    let ram_purchase = Asset::new(ram_cost, core);
    let net_stake = Asset::new(config.net_stake, core);
    let cpu_stake = Asset::new(config.cpu_stake, core);

    let residual = deposit
        .checked_sub(net_stake)?
        .checked_sub(cpu_stake)?
        .checked_sub(ram_purchase)?;
    if residual.amount < 0 {
        return Err(SignupError::InsufficientFunds(Asset::new(
            -residual.amount,
            core,
        )));
    }

    Ok(AllocationPlan {
        ram_purchase,
        net_stake,
        cpu_stake,
        residual,
    })
}
