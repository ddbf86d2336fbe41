//! # Kiosk Vending Machine Pallet
//!
//! Sells tokens from a reserve at `purchase_price` (currency per token) and buys
//! them back at `sale_price`. The machine owns a pallet account that holds both
//! its token stock on the ledger and the currency it has collected.
//!
//! Two counters are kept apart from the raw balances:
//! - `TokensQuantity`: tokens earmarked for sale. Set by `restock_token`,
//!   lowered by `buy`, raised by `sell`.
//! - `ContractBalance`: currency taken in by `buy` and `restock_ether`, paid
//!   out by `sell` and `withdraw_ether`.
//!
//! The machine account is endowed with the currency's existential deposit at
//! genesis. That endowment is never counted in `ContractBalance`, and payouts
//! keep the account alive, so the counter is always backed by spendable funds.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{fungible, tokens::Preservation},
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use kiosk_primitives::{guard, TokenLedger};
use sp_runtime::{traits::AccountIdConversion, DispatchError};

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub const LOG_TARGET: &str = "runtime::kiosk-machine";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Ledger of the token being sold.
        type Ledger: TokenLedger<Self::AccountId>;

        /// Native currency paid for tokens.
        type Currency: fungible::Mutate<Self::AccountId, Balance = u128>;

        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Tokens available for sale
    #[pallet::storage]
    #[pallet::getter(fn tokens_quantity)]
    pub type TokensQuantity<T> = StorageValue<_, u128, ValueQuery>;

    /// Currency held on behalf of the machine, above its existential deposit
    #[pallet::storage]
    #[pallet::getter(fn contract_balance)]
    pub type ContractBalance<T> = StorageValue<_, u128, ValueQuery>;

    /// Currency units a buyer pays per token
    #[pallet::storage]
    #[pallet::getter(fn purchase_price)]
    pub type PurchasePrice<T> = StorageValue<_, u128, ValueQuery>;

    /// Currency units a seller receives per token
    #[pallet::storage]
    #[pallet::getter(fn sale_price)]
    pub type SalePrice<T> = StorageValue<_, u128, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        TokensRestocked { amount: u128 },
        Bought { buyer: T::AccountId, paid: u128, tokens: u128 },
        Sold { seller: T::AccountId, tokens: u128, received: u128 },
        EtherWithdrawn { to: T::AccountId, amount: u128 },
        EtherRestocked { from: T::AccountId, amount: u128 },
        PurchasePriceReset { price: u128 },
        SalePriceReset { price: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Sender is not owner!
        NotOwner,
        /// Cannot restock, sell or withdraw 0
        ZeroAmount,
        /// You need to send some Ether
        NoValueSent,
        /// Payment does not cover a single token
        PaymentBelowPrice,
        /// Cannot reset purchase price to 0
        ZeroPurchasePrice,
        /// Cannot reset sale price to 0
        ZeroSalePrice,
        /// Insufficient balance to restock
        InsufficientTokenBalance,
        /// Not enough tokens in the reserve
        NotEnoughReserve,
        /// Insufficient tokens to sell
        InsufficientTokensToSell,
        /// Insufficient gwei
        InsufficientCurrency,
        /// Insufficient balance to withdraw
        InsufficientContractBalance,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Earmark `amount` of the machine's ledger balance for sale.
        ///
        /// Replaces the reserve; it does not add to it.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::restock_token())]
        pub fn restock_token(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_owner(&owner)?;
            ensure!(amount > 0, Error::<T>::ZeroAmount);
            ensure!(
                T::Ledger::balance_of(&Self::account_id()) >= amount,
                Error::<T>::InsufficientTokenBalance
            );

            TokensQuantity::<T>::put(amount);

            log::debug!(target: LOG_TARGET, "reserve set to {amount}");
            Self::deposit_event(Event::TokensRestocked { amount });
            Ok(())
        }

        /// Pay `value` currency for `value / purchase_price` tokens.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::buy())]
        pub fn buy(origin: OriginFor<T>, value: u128) -> DispatchResult {
            let buyer = ensure_signed(origin)?;
            ensure!(value > 0, Error::<T>::NoValueSent);

            let tokens = value
                .checked_div(PurchasePrice::<T>::get())
                .ok_or(Error::<T>::ZeroPurchasePrice)?;
            ensure!(tokens > 0, Error::<T>::PaymentBelowPrice);
            let reserve = TokensQuantity::<T>::get();
            ensure!(tokens <= reserve, Error::<T>::NotEnoughReserve);
            let collected =
                ContractBalance::<T>::get().checked_add(value).ok_or(Error::<T>::Overflow)?;

            let machine = Self::account_id();
            <T::Currency as fungible::Mutate<_>>::transfer(
                &buyer,
                &machine,
                value,
                Preservation::Expendable,
            )?;
            ContractBalance::<T>::put(collected);
            TokensQuantity::<T>::put(reserve - tokens);
            T::Ledger::transfer(&machine, &buyer, tokens)?;

            log::debug!(target: LOG_TARGET, "sold {tokens} tokens for {value}");
            Self::deposit_event(Event::Bought { buyer, paid: value, tokens });
            Ok(())
        }

        /// Hand `tokens` back to the machine for `tokens * sale_price` currency.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::sell())]
        pub fn sell(origin: OriginFor<T>, tokens: u128) -> DispatchResult {
            let seller = ensure_signed(origin)?;
            ensure!(tokens > 0, Error::<T>::ZeroAmount);
            ensure!(
                T::Ledger::balance_of(&seller) >= tokens,
                Error::<T>::InsufficientTokensToSell
            );

            let cost = tokens.checked_mul(SalePrice::<T>::get()).ok_or(Error::<T>::Overflow)?;
            let collected = ContractBalance::<T>::get();
            ensure!(collected >= cost, Error::<T>::InsufficientCurrency);
            let reserve =
                TokensQuantity::<T>::get().checked_add(tokens).ok_or(Error::<T>::Overflow)?;

            let machine = Self::account_id();
            T::Ledger::transfer(&seller, &machine, tokens)?;
            <T::Currency as fungible::Mutate<_>>::transfer(
                &machine,
                &seller,
                cost,
                Preservation::Preserve,
            )?;
            ContractBalance::<T>::put(collected - cost);
            TokensQuantity::<T>::put(reserve);

            log::debug!(target: LOG_TARGET, "bought back {tokens} tokens for {cost}");
            Self::deposit_event(Event::Sold { seller, tokens, received: cost });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::withdraw_ether())]
        pub fn withdraw_ether(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_owner(&owner)?;
            ensure!(amount > 0, Error::<T>::ZeroAmount);
            let collected = ContractBalance::<T>::get();
            ensure!(collected >= amount, Error::<T>::InsufficientContractBalance);

            <T::Currency as fungible::Mutate<_>>::transfer(
                &Self::account_id(),
                &owner,
                amount,
                Preservation::Preserve,
            )?;
            ContractBalance::<T>::put(collected - amount);

            log::info!(target: LOG_TARGET, "owner withdrew {amount}");
            Self::deposit_event(Event::EtherWithdrawn { to: owner, amount });
            Ok(())
        }

        /// Top up the currency available for buy-backs. Open to any caller.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::restock_ether())]
        pub fn restock_ether(origin: OriginFor<T>, value: u128) -> DispatchResult {
            let from = ensure_signed(origin)?;
            ensure!(value > 0, Error::<T>::NoValueSent);
            let collected =
                ContractBalance::<T>::get().checked_add(value).ok_or(Error::<T>::Overflow)?;

            <T::Currency as fungible::Mutate<_>>::transfer(
                &from,
                &Self::account_id(),
                value,
                Preservation::Expendable,
            )?;
            ContractBalance::<T>::put(collected);

            Self::deposit_event(Event::EtherRestocked { from, amount: value });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::reset_price())]
        pub fn reset_purchase_price(origin: OriginFor<T>, price: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_owner(&owner)?;
            ensure!(price > 0, Error::<T>::ZeroPurchasePrice);

            PurchasePrice::<T>::put(price);

            log::info!(target: LOG_TARGET, "purchase price reset to {price}");
            Self::deposit_event(Event::PurchasePriceReset { price });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::reset_price())]
        pub fn reset_sale_price(origin: OriginFor<T>, price: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_owner(&owner)?;
            ensure!(price > 0, Error::<T>::ZeroSalePrice);

            SalePrice::<T>::put(price);

            log::info!(target: LOG_TARGET, "sale price reset to {price}");
            Self::deposit_event(Event::SalePriceReset { price });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Owner of the machine; a machine without one is not deployed
        pub owner: Option<T::AccountId>,
        pub purchase_price: u128,
        pub sale_price: u128,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref owner) = self.owner {
                assert!(self.purchase_price > 0, "Machine purchase price must be nonzero");
                assert!(self.sale_price > 0, "Machine sale price must be nonzero");

                Owner::<T>::put(owner);
                PurchasePrice::<T>::put(self.purchase_price);
                SalePrice::<T>::put(self.sale_price);

                let machine = Pallet::<T>::account_id();
                let min = <T::Currency as fungible::Inspect<_>>::minimum_balance();
                if <T::Currency as fungible::Inspect<_>>::balance(&machine) < min {
                    let _ = <T::Currency as fungible::Mutate<_>>::set_balance(&machine, min);
                }
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Account holding the machine's tokens and currency.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    fn ensure_owner(who: &T::AccountId) -> DispatchResult {
        guard::ensure_owner(who, Owner::<T>::get().as_ref()).map_err(|_| Error::<T>::NotOwner)?;
        Ok(())
    }

    /// The counters never promise more than the machine account holds.
    ///
    /// A killed ledger holds no balances at all; the reserve is then left as
    /// it was and no longer checked.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        use fungible::Inspect;

        if Owner::<T>::get().is_none() {
            return Ok(());
        }

        let machine = Self::account_id();
        let backing = ContractBalance::<T>::get()
            .checked_add(T::Currency::minimum_balance())
            .ok_or(DispatchError::Other("contract balance overflows"))?;
        ensure!(
            T::Currency::balance(&machine) >= backing,
            DispatchError::Other("contract balance exceeds held currency")
        );
        if T::Ledger::is_live() {
            ensure!(
                T::Ledger::balance_of(&machine) >= TokensQuantity::<T>::get(),
                DispatchError::Other("reserve exceeds held tokens")
            );
        }
        Ok(())
    }
}
