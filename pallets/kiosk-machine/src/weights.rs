//! Weights for pallet-kiosk-machine.

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn restock_token() -> Weight;
    fn buy() -> Weight;
    fn sell() -> Weight;
    fn withdraw_ether() -> Weight;
    fn restock_ether() -> Weight;
    fn reset_price() -> Weight;
}

impl WeightInfo for () {
    fn restock_token() -> Weight {
        Weight::from_parts(10_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn buy() -> Weight {
        Weight::from_parts(40_000, 0).saturating_add(RocksDbWeight::get().reads_writes(8, 6))
    }
    fn sell() -> Weight {
        Weight::from_parts(40_000, 0).saturating_add(RocksDbWeight::get().reads_writes(8, 6))
    }
    fn withdraw_ether() -> Weight {
        Weight::from_parts(25_000, 0).saturating_add(RocksDbWeight::get().reads_writes(4, 3))
    }
    fn restock_ether() -> Weight {
        Weight::from_parts(25_000, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 3))
    }
    fn reset_price() -> Weight {
        Weight::from_parts(10_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
}
