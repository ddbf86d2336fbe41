//! Genesis presets for development chains.

use crate::{
    AccountId, AirdropConfig, Balance, BalancesConfig, MachineConfig, RuntimeGenesisConfig,
    TokenConfig, GWEI,
};
use alloc::vec::Vec;

/// Tokens minted to the owner at genesis.
pub const INITIAL_SUPPLY: u128 = 100_000_000_000;
/// Currency endowed to every development account.
pub const ENDOWMENT: Balance = 1_000_000 * GWEI * GWEI;
pub const PURCHASE_PRICE: Balance = GWEI;
pub const SALE_PRICE: Balance = GWEI;

/// Deploys the token, airdrop and machine under `owner` and endows every
/// account in `endowed` with currency.
///
/// The airdrop pot and the machine stock start empty; the owner funds them
/// with ordinary token transfers.
pub fn development_genesis(owner: AccountId, endowed: Vec<AccountId>) -> RuntimeGenesisConfig {
    RuntimeGenesisConfig {
        balances: BalancesConfig {
            balances: endowed.into_iter().map(|who| (who, ENDOWMENT)).collect(),
            dev_accounts: None,
        },
        token: TokenConfig { owner: Some(owner.clone()), initial_supply: INITIAL_SUPPLY },
        airdrop: AirdropConfig { owner: Some(owner.clone()) },
        machine: MachineConfig {
            owner: Some(owner),
            purchase_price: PURCHASE_PRICE,
            sale_price: SALE_PRICE,
        },
        ..Default::default()
    }
}
