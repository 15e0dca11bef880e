//! Signup action composition.
//!
//! Builds the ordered action sequence for one signup. Composition is pure;
//! the handler submits the returned actions to the sink afterwards, so a
//! failure anywhere earlier in the pipeline emits nothing.

use eos_chain::{ActionData, Authority, Name, OutboundAction, PermissionLevel, PublicKey};

use crate::plan::AllocationPlan;

/// The system contract account.
pub const SYSTEM_ACCOUNT: Name = Name::from_static("eosio");
/// The core token contract account.
pub const TOKEN_ACCOUNT: Name = Name::from_static("eosio.token");
/// The permission every emitted action is authorized under.
pub const ACTIVE_PERMISSION: Name = Name::from_static("active");

const NEWACCOUNT: Name = Name::from_static("newaccount");
const BUYRAM: Name = Name::from_static("buyram");
const DELEGATEBW: Name = Name::from_static("delegatebw");
const TRANSFER: Name = Name::from_static("transfer");

/// Build the signup sequence, strictly ordered: `newaccount`, `buyram`,
/// `delegatebw`, and a refund `transfer` only when the residual is positive.
/// All actions are authorized by `creator@active`; both new-account roles
/// share one single-key authority.
pub fn signup_actions(
    creator: Name,
    new_account: Name,
    key: PublicKey,
    plan: &AllocationPlan,
) -> Vec<OutboundAction> {
    let auth = vec![PermissionLevel::new(creator, ACTIVE_PERMISSION)];

    let mut actions = Vec::with_capacity(4);
    actions.push(OutboundAction {
        account: SYSTEM_ACCOUNT,
        name: NEWACCOUNT,
        authorization: auth.clone(),
        data: ActionData::NewAccount {
            creator,
            name: new_account,
            owner: Authority::single_key(key),
            active: Authority::single_key(key),
        },
    });
    actions.push(OutboundAction {
        account: SYSTEM_ACCOUNT,
        name: BUYRAM,
        authorization: auth.clone(),
        data: ActionData::BuyRam {
            payer: creator,
            receiver: new_account,
            quant: plan.ram_purchase,
        },
    });
    actions.push(OutboundAction {
        account: SYSTEM_ACCOUNT,
        name: DELEGATEBW,
        authorization: auth.clone(),
        data: ActionData::DelegateBw {
            from: creator,
            receiver: new_account,
            stake_net_quantity: plan.net_stake,
            stake_cpu_quantity: plan.cpu_stake,
            transfer: true,
        },
    });
    if plan.residual.is_positive() {
        actions.push(OutboundAction {
            account: TOKEN_ACCOUNT,
            name: TRANSFER,
            authorization: auth,
            data: ActionData::Transfer {
                from: creator,
                to: new_account,
                quantity: plan.residual,
                memo: String::new(),
            },
        });
    }
    actions
}
