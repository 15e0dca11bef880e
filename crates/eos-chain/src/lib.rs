//! EOSIO-style chain value types.
//!
//! Provides the typed building blocks the signup handler works with:
//! base-32 packed account/action names, fixed-point assets with a packed
//! symbol, key authorities, and outbound action payloads. All arithmetic on
//! assets is symbol-checked and overflow-checked.

pub mod action;
pub mod asset;
pub mod authority;
pub mod error;
pub mod name;
pub mod symbol;

pub use action::{ActionData, OutboundAction};
pub use asset::Asset;
pub use authority::{
    Authority, KeyType, KeyWeight, PermissionLevel, PermissionLevelWeight, PublicKey, WaitWeight,
};
pub use error::ChainError;
pub use name::Name;
pub use symbol::Symbol;
