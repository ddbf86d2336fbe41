//! Weights for pallet-kiosk-airdrop.

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    /// Subscription that may trigger a distribution to `s` subscribers.
    fn subscribe(s: u32) -> Weight;
    fn change_state() -> Weight;
    fn kill() -> Weight;
}

impl WeightInfo for () {
    fn subscribe(s: u32) -> Weight {
        Weight::from_parts(15_000, 0)
            .saturating_add(RocksDbWeight::get().reads_writes(3, 1))
            .saturating_add(Weight::from_parts(10_000, 0).saturating_mul(s.into()))
            .saturating_add(RocksDbWeight::get().reads_writes(2, 2).saturating_mul(s.into()))
    }
    fn change_state() -> Weight {
        Weight::from_parts(10_000, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    fn kill() -> Weight {
        Weight::from_parts(10_000, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 3))
    }
}
