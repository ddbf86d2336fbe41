//! Weights for pallet-kiosk-token.
//!
//! Fixed estimates until the benchmarks in `benchmarking.rs` are run against
//! reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn change_state() -> Weight;
    fn kill(h: u32) -> Weight;
}

impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(10_000, 0).saturating_add(RocksDbWeight::get().reads_writes(4, 2))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(10_000, 0).saturating_add(RocksDbWeight::get().reads_writes(4, 2))
    }
    fn mint() -> Weight {
        Weight::from_parts(10_000, 0).saturating_add(RocksDbWeight::get().reads_writes(5, 2))
    }
    fn burn() -> Weight {
        Weight::from_parts(10_000, 0).saturating_add(RocksDbWeight::get().reads_writes(5, 2))
    }
    fn change_state() -> Weight {
        Weight::from_parts(10_000, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    /// One write per removed holder on top of the flag and counter updates.
    fn kill(h: u32) -> Weight {
        Weight::from_parts(50_000, 0)
            .saturating_add(Weight::from_parts(5_000, 0).saturating_mul(h.into()))
            .saturating_add(RocksDbWeight::get().reads_writes(4, 4))
            .saturating_add(RocksDbWeight::get().writes(h.into()))
    }
}
