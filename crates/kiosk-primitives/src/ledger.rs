//! Interface through which other pallets move token balances.

use sp_runtime::DispatchResult;

/// The token ledger as seen by the airdrop and the vending machine.
///
/// `transfer` applies every check the ledger applies to its own `transfer`
/// call (lifecycle, zero amount, balance), so a paused or killed ledger
/// refuses cross-pallet movements too.
pub trait TokenLedger<AccountId> {
    fn balance_of(who: &AccountId) -> u128;

    fn transfer(from: &AccountId, to: &AccountId, amount: u128) -> DispatchResult;

    /// `false` once the ledger has been killed and its balances cleared.
    fn is_live() -> bool;
}
