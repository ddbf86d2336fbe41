//! Benchmarking setup for pallet-kiosk-token

use super::*;

#[allow(unused)]
use crate::Pallet as Token;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn fund<T: Config>(who: &T::AccountId, amount: u128) {
    Balances::<T>::insert(who, amount);
    TotalSupply::<T>::mutate(|supply| *supply += amount);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        fund::<T>(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn transfer_from() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        fund::<T>(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), caller.clone(), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn mint() {
        let owner: T::AccountId = whitelisted_caller();
        Owner::<T>::put(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), 1_000_000);

        assert_eq!(Balances::<T>::get(&owner), 1_000_000);
    }

    #[benchmark]
    fn burn() {
        let owner: T::AccountId = whitelisted_caller();
        Owner::<T>::put(&owner);
        fund::<T>(&owner, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), 1_000_000);

        assert_eq!(Balances::<T>::get(&owner), 9_000_000);
    }

    #[benchmark]
    fn change_state() {
        let owner: T::AccountId = whitelisted_caller();
        Owner::<T>::put(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), 1);

        assert_eq!(State::<T>::get(), Lifecycle::Paused);
    }

    #[benchmark]
    fn kill(h: Linear<0, 1_000>) {
        let owner: T::AccountId = whitelisted_caller();
        Owner::<T>::put(&owner);
        State::<T>::put(Lifecycle::Cancelled);
        let before = Balances::<T>::count();
        for i in 0..h {
            fund::<T>(&account("holder", i, 0), 1_000);
        }
        let holders = before + h;

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), holders);

        assert!(Killed::<T>::get());
        assert_eq!(Balances::<T>::count(), 0);
    }

    impl_benchmark_test_suite!(Token, crate::mock::new_test_ext(), crate::mock::Test);
}
