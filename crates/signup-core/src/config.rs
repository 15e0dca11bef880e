//! Signup allocation constants.

use eos_chain::Symbol;

/// Resource allocation constants for each signup. Fixed at construction;
/// the planning algorithm never depends on the specific values.
#[derive(Debug, Clone)]
pub struct SignupConfig {
    /// NET stake per new account, in smallest core units.
    pub net_stake: i64,
    /// CPU stake per new account, in smallest core units.
    pub cpu_stake: i64,
    /// RAM bytes purchased per new account.
    pub ram_bytes: u32,
    /// Fractional fee on RAM purchases (e.g. `0.005` for 0.5%).
    pub ram_fee_rate: f64,
    /// The only asset accepted for signup deposits.
    pub core_symbol: Symbol,
}

impl Default for SignupConfig {
    fn default() -> Self {
        SignupConfig {
            net_stake: 400,
            cpu_stake: 19_600,
            ram_bytes: 4_096,
            ram_fee_rate: 0.005,
            core_symbol: Symbol::from_static(4, "EOS"),
        }
    }
}
