//! Types shared by the kiosk pallets.
//!
//! - [`Lifecycle`]: the Active / Paused / Cancelled state machine embedded by the
//!   token and airdrop pallets.
//! - [`TokenLedger`]: the value-movement interface the airdrop and the vending
//!   machine use to reach the token pallet.
//! - [`guard`]: precondition helpers applied at the top of every dispatchable.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod guard;
pub mod ledger;
pub mod lifecycle;

pub use ledger::TokenLedger;
pub use lifecycle::{Lifecycle, LifecycleError};
