//! Outbound actions and their typed payloads.

use serde::{Deserialize, Serialize};

use crate::asset::Asset;
use crate::authority::{Authority, PermissionLevel};
use crate::name::Name;

/// Payload of an outbound action, one variant per supported operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionData {
    /// `eosio::newaccount` — create an account under `creator`.
    NewAccount {
        creator: Name,
        name: Name,
        owner: Authority,
        active: Authority,
    },
    /// `eosio::buyram` — spend `quant` on RAM for `receiver`.
    BuyRam {
        payer: Name,
        receiver: Name,
        quant: Asset,
    },
    /// `eosio::delegatebw` — stake NET and CPU to `receiver`.
    DelegateBw {
        from: Name,
        receiver: Name,
        stake_net_quantity: Asset,
        stake_cpu_quantity: Asset,
        transfer: bool,
    },
    /// `eosio.token::transfer` — move tokens with a memo.
    Transfer {
        from: Name,
        to: Name,
        quantity: Asset,
        memo: String,
    },
}

/// A named instruction addressed to a system account, carrying its payload
/// and the authorization it is submitted under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundAction {
    /// The contract account the action is addressed to.
    pub account: Name,
    /// The operation name on that contract.
    pub name: Name,
    pub authorization: Vec<PermissionLevel>,
    pub data: ActionData,
}
