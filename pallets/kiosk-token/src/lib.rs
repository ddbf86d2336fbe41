//! # Kiosk Token Pallet
//!
//! A fungible token ledger owned by a single account. The owner mints, burns and
//! drives the [`Lifecycle`]; every holder transfers while the ledger is `Active`.
//!
//! The pallet also implements [`TokenLedger`], the interface through which the
//! airdrop and vending machine pallets move balances. Cross-pallet transfers go
//! through the same checks as the `transfer` call.
//!
//! Once cancelled, the owner may `kill` the ledger. Killing clears all balances
//! and leaves the pallet permanently inert.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use kiosk_primitives::{guard, Lifecycle, LifecycleError, TokenLedger};
use sp_runtime::DispatchError;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub const LOG_TARGET: &str = "runtime::kiosk-token";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// When `true`, `total_supply` and `balance_of` refuse to answer while the
        /// ledger is cancelled.
        #[pallet::constant]
        type GuardReadsWhenCancelled: Get<bool>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Account allowed to mint, burn, change state and kill.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Total token supply
    #[pallet::storage]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances, counted so `kill` can be weighed by its holders
    #[pallet::storage]
    pub type Balances<T: Config> =
        CountedStorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    #[pallet::storage]
    pub type State<T> = StorageValue<_, Lifecycle, ValueQuery>;

    /// Set by `kill`; never cleared.
    #[pallet::storage]
    pub type Killed<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// New tokens minted to the owner
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens burned from the owner
        Burned { from: T::AccountId, amount: u128 },
        StateChanged { from: Lifecycle, to: Lifecycle },
        /// Ledger torn down by the owner
        Killed { owner: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Sender is not owner!
        NotOwner,
        /// The contract is not active!
        NotActive,
        /// The contract is cancelled!
        Cancelled,
        /// Invalid status option!
        InvalidStateOption,
        /// The status is already ACTIVE
        AlreadyActive,
        /// The status is already PAUSED
        AlreadyPaused,
        /// The status is already CANCELLED
        AlreadyCancelled,
        /// Cannot move, mint or burn 0 tokens
        ZeroAmount,
        /// Not enough balance in the account
        InsufficientBalance,
        /// Burn amount exceeds balance
        BurnExceedsBalance,
        /// It's necessary to cancel the contract before to kill it
        NotCancelled,
        /// The contract has been killed
        ContractKilled,
        /// More balance entries exist than the holder witness allows
        HolderWitnessTooLow,
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
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(&sender, &to, amount)
        }

        /// Move `amount` from `from` to `to`.
        ///
        /// There is no allowance scheme: the caller must be `from`.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_live()?;
            Self::ensure_active()?;
            ensure!(caller == from, Error::<T>::NotOwner);
            Self::do_transfer(&from, &to, amount)
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_live()?;
            Self::ensure_owner(&owner)?;
            Self::ensure_active()?;
            ensure!(amount > 0, Error::<T>::ZeroAmount);

            let supply =
                TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
            TotalSupply::<T>::put(supply);
            Balances::<T>::mutate(&owner, |bal| *bal += amount);

            log::debug!(target: LOG_TARGET, "minted {amount}, supply now {supply}");
            Self::deposit_event(Event::Minted { to: owner, amount });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_live()?;
            Self::ensure_owner(&owner)?;
            Self::ensure_active()?;
            ensure!(amount > 0, Error::<T>::ZeroAmount);
            ensure!(Balances::<T>::get(&owner) >= amount, Error::<T>::BurnExceedsBalance);

            let supply =
                TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::Overflow)?;
            TotalSupply::<T>::put(supply);
            Balances::<T>::mutate(&owner, |bal| *bal -= amount);

            log::debug!(target: LOG_TARGET, "burned {amount}, supply now {supply}");
            Self::deposit_event(Event::Burned { from: owner, amount });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::change_state())]
        pub fn change_state(origin: OriginFor<T>, new_state: u8) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_live()?;
            Self::ensure_owner(&owner)?;

            let current = State::<T>::get();
            let next = current.transition(new_state).map_err(Error::<T>::from)?;
            State::<T>::put(next);

            log::info!(target: LOG_TARGET, "lifecycle {current:?} -> {next:?}");
            Self::deposit_event(Event::StateChanged { from: current, to: next });
            Ok(())
        }

        /// Tear the ledger down. Only allowed once cancelled.
        ///
        /// `holders` must be at least [`Pallet::holder_count`]; the call is
        /// charged for that many removals and refunded down to the actual count.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::kill(*holders))]
        pub fn kill(origin: OriginFor<T>, holders: u32) -> DispatchResultWithPostInfo {
            let owner = ensure_signed(origin)?;
            Self::ensure_live()?;
            Self::ensure_owner(&owner)?;
            ensure!(State::<T>::get().is_cancelled(), Error::<T>::NotCancelled);
            let count = Balances::<T>::count();
            ensure!(count <= holders, Error::<T>::HolderWitnessTooLow);

            let removed = Balances::<T>::clear(count, None);
            TotalSupply::<T>::kill();
            State::<T>::kill();
            Killed::<T>::put(true);

            log::info!(target: LOG_TARGET, "ledger killed, {} balances removed", removed.unique);
            Self::deposit_event(Event::Killed { owner });
            Ok(Some(T::WeightInfo::kill(count)).into())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Owner of the ledger; receives the whole initial supply
        pub owner: Option<T::AccountId>,
        pub initial_supply: u128,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            assert!(
                self.owner.is_some() || self.initial_supply == 0,
                "Initial supply needs an owner to hold it"
            );

            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
                Balances::<T>::insert(owner, self.initial_supply);
            }
            TotalSupply::<T>::put(self.initial_supply);
            State::<T>::put(Lifecycle::Active);
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn total_supply() -> Result<u128, DispatchError> {
        Self::ensure_readable()?;
        Ok(TotalSupply::<T>::get())
    }

    /// Balance of `who`, zero for unseen accounts.
    pub fn balance_of(who: &T::AccountId) -> Result<u128, DispatchError> {
        Self::ensure_readable()?;
        Ok(Balances::<T>::get(who))
    }

    /// Number of balance entries, the witness `kill` expects.
    pub fn holder_count() -> u32 {
        Balances::<T>::count()
    }

    pub fn state() -> Result<Lifecycle, DispatchError> {
        Self::ensure_live()?;
        Ok(State::<T>::get())
    }

    /// Checked balance movement shared by `transfer`, `transfer_from` and
    /// [`TokenLedger::transfer`].
    pub(crate) fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_live()?;
        Self::ensure_active()?;
        ensure!(amount > 0, Error::<T>::ZeroAmount);
        ensure!(Balances::<T>::get(from) >= amount, Error::<T>::InsufficientBalance);

        Balances::<T>::mutate(from, |bal| *bal -= amount);
        Balances::<T>::try_mutate(to, |bal| -> DispatchResult {
            *bal = bal.checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Ok(())
        })?;

        log::debug!(target: LOG_TARGET, "transfer of {amount}");
        Self::deposit_event(Event::Transferred { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    fn ensure_live() -> DispatchResult {
        ensure!(!Killed::<T>::get(), Error::<T>::ContractKilled);
        Ok(())
    }

    fn ensure_owner(who: &T::AccountId) -> DispatchResult {
        guard::ensure_owner(who, Owner::<T>::get().as_ref()).map_err(|_| Error::<T>::NotOwner)?;
        Ok(())
    }

    fn ensure_active() -> DispatchResult {
        State::<T>::get().ensure_active().map_err(Error::<T>::from)?;
        Ok(())
    }

    fn ensure_readable() -> DispatchResult {
        Self::ensure_live()?;
        if T::GuardReadsWhenCancelled::get() {
            State::<T>::get().ensure_not_cancelled().map_err(Error::<T>::from)?;
        }
        Ok(())
    }

    /// Sum of all balances equals the total supply.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, bal| acc.checked_add(bal))
            .ok_or(DispatchError::Other("balance sum overflows"))?;
        ensure!(
            sum == TotalSupply::<T>::get(),
            DispatchError::Other("sum of balances differs from total supply")
        );
        Ok(())
    }
}

impl<T: Config> From<LifecycleError> for Error<T> {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::InvalidOption => Error::<T>::InvalidStateOption,
            LifecycleError::AlreadyActive => Error::<T>::AlreadyActive,
            LifecycleError::AlreadyPaused => Error::<T>::AlreadyPaused,
            LifecycleError::AlreadyCancelled => Error::<T>::AlreadyCancelled,
            LifecycleError::NotActive => Error::<T>::NotActive,
            LifecycleError::Cancelled => Error::<T>::Cancelled,
        }
    }
}

impl<T: Config> TokenLedger<T::AccountId> for Pallet<T> {
    fn balance_of(who: &T::AccountId) -> u128 {
        Balances::<T>::get(who)
    }

    fn transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::do_transfer(from, to, amount)
    }

    fn is_live() -> bool {
        !Killed::<T>::get()
    }
}
