//! # Kiosk Airdrop Pallet
//!
//! Collects up to `MaxSubscribers` distinct accounts. The subscription that
//! fills the set pays the airdrop account's whole ledger balance out in equal
//! shares, in subscription order. Any remainder of the integer division stays
//! with the airdrop account.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, PalletId};
use frame_system::{ensure_signed, pallet_prelude::*};
use kiosk_primitives::{guard, Lifecycle, LifecycleError, TokenLedger};
use sp_runtime::{traits::AccountIdConversion, DispatchError};
use sp_std::prelude::*;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub const LOG_TARGET: &str = "runtime::kiosk-airdrop";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Ledger holding the tokens to distribute.
        type Ledger: TokenLedger<Self::AccountId>;

        /// Subscriber count that triggers the distribution.
        #[pallet::constant]
        type MaxSubscribers: Get<u32>;

        /// Derives the account that holds the airdrop's tokens.
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

    #[pallet::storage]
    pub type State<T> = StorageValue<_, Lifecycle, ValueQuery>;

    /// Subscribers in subscription order
    #[pallet::storage]
    pub type Subscribers<T: Config> =
        StorageValue<_, BoundedVec<T::AccountId, T::MaxSubscribers>, ValueQuery>;

    #[pallet::storage]
    pub type Killed<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        Subscribed { who: T::AccountId },
        /// Subscriber set filled; each subscriber received `share` tokens
        Distributed { share: u128, recipients: u32 },
        StateChanged { from: Lifecycle, to: Lifecycle },
        Killed { owner: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Sender is not owner!
        NotOwner,
        /// The contract is not active
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
        /// Address already registered
        AlreadyRegistered,
        /// Maximum number of addresses reached
        CapacityExceeded,
        /// It's necessary to cancel the contract before to kill it
        NotCancelled,
        /// The contract has been killed
        ContractKilled,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            let subscribers = Subscribers::<T>::get();
            for (i, who) in subscribers.iter().enumerate() {
                ensure!(
                    !subscribers[..i].contains(who),
                    DispatchError::Other("duplicate airdrop subscriber")
                );
            }
            Ok(())
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::subscribe(T::MaxSubscribers::get()))]
        pub fn subscribe(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_live()?;
            State::<T>::get().ensure_active().map_err(Error::<T>::from)?;

            let mut subscribers = Subscribers::<T>::get();
            ensure!(!subscribers.contains(&who), Error::<T>::AlreadyRegistered);
            subscribers.try_push(who.clone()).map_err(|_| Error::<T>::CapacityExceeded)?;
            Subscribers::<T>::put(&subscribers);

            log::debug!(target: LOG_TARGET, "subscriber {} of {}", subscribers.len(), T::MaxSubscribers::get());
            Self::deposit_event(Event::Subscribed { who });

            if subscribers.len() as u32 >= T::MaxSubscribers::get() {
                Self::distribute(&subscribers)?;
            }
            Ok(())
        }

        #[pallet::call_index(1)]
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

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::kill())]
        pub fn kill(origin: OriginFor<T>) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_live()?;
            Self::ensure_owner(&owner)?;
            ensure!(State::<T>::get().is_cancelled(), Error::<T>::NotCancelled);

            Subscribers::<T>::kill();
            State::<T>::kill();
            Killed::<T>::put(true);

            log::info!(target: LOG_TARGET, "airdrop killed");
            Self::deposit_event(Event::Killed { owner });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        pub owner: Option<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
            }
            State::<T>::put(Lifecycle::Active);
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Account whose ledger balance is distributed.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    pub fn get_state() -> Result<Lifecycle, DispatchError> {
        Self::ensure_readable()?;
        Ok(State::<T>::get())
    }

    pub fn get_subscribes() -> Result<Vec<T::AccountId>, DispatchError> {
        Self::ensure_readable()?;
        Ok(Subscribers::<T>::get().into_inner())
    }

    pub fn get_length_subscribes() -> Result<u32, DispatchError> {
        Self::ensure_readable()?;
        Ok(Subscribers::<T>::decode_len().unwrap_or(0) as u32)
    }

    fn distribute(recipients: &[T::AccountId]) -> DispatchResult {
        let airdrop = Self::account_id();
        let pot = T::Ledger::balance_of(&airdrop);
        let share = pot / recipients.len() as u128;

        // The ledger refuses zero transfers; a pot smaller than the set pays nothing.
        if share > 0 {
            for who in recipients {
                T::Ledger::transfer(&airdrop, who, share)?;
            }
        }

        log::info!(
            target: LOG_TARGET,
            "distributed {share} to {} subscribers, {} left over",
            recipients.len(),
            pot - share * recipients.len() as u128,
        );
        Self::deposit_event(Event::Distributed { share, recipients: recipients.len() as u32 });
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

    fn ensure_readable() -> DispatchResult {
        Self::ensure_live()?;
        State::<T>::get().ensure_not_cancelled().map_err(Error::<T>::from)?;
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
