//! Runtime composing the kiosk pallets: a token ledger, an airdrop paying out
//! of it and a vending machine selling it for the native currency.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod genesis;

#[cfg(test)]
mod tests;

use frame_support::{
    construct_runtime, derive_impl, parameter_types,
    traits::{ConstBool, ConstU128, ConstU32},
    PalletId,
};
use sp_runtime::{
    generic,
    traits::{BlakeTwo256, IdentifyAccount, Verify},
    MultiAddress, MultiSignature,
};

pub type Signature = MultiSignature;
pub type AccountId = <<Signature as Verify>::Signer as IdentifyAccount>::AccountId;
pub type Balance = u128;
pub type Nonce = u32;
pub type BlockNumber = u32;

pub type Header = generic::Header<BlockNumber, BlakeTwo256>;
pub type Address = MultiAddress<AccountId, ()>;

pub type TxExtension = (
    frame_system::CheckNonZeroSender<Runtime>,
    frame_system::CheckNonce<Runtime>,
    frame_system::CheckWeight<Runtime>,
);

pub type UncheckedExtrinsic =
    generic::UncheckedExtrinsic<Address, RuntimeCall, Signature, TxExtension>;
pub type Block = generic::Block<Header, UncheckedExtrinsic>;

/// Smallest currency units per gwei.
pub const GWEI: Balance = 1_000_000_000;
pub const EXISTENTIAL_DEPOSIT: Balance = 1;

construct_runtime!(
    pub enum Runtime {
        System: frame_system,
        Balances: pallet_balances,
        Token: pallet_kiosk_token,
        Airdrop: pallet_kiosk_airdrop,
        Machine: pallet_kiosk_machine,
    }
);

#[derive_impl(frame_system::config_preludes::SolochainDefaultConfig)]
impl frame_system::Config for Runtime {
    type Block = Block;
    type AccountId = AccountId;
    type Nonce = Nonce;
    type AccountData = pallet_balances::AccountData<Balance>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Runtime {
    type Balance = Balance;
    type ExistentialDeposit = ConstU128<EXISTENTIAL_DEPOSIT>;
    type AccountStore = System;
}

parameter_types! {
    pub const AirdropPalletId: PalletId = PalletId(*b"airdrop_");
    pub const MachinePalletId: PalletId = PalletId(*b"vendmach");
}

impl pallet_kiosk_token::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type GuardReadsWhenCancelled = ConstBool<false>;
    type WeightInfo = ();
}

impl pallet_kiosk_airdrop::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type Ledger = Token;
    type MaxSubscribers = ConstU32<5>;
    type PalletId = AirdropPalletId;
    type WeightInfo = ();
}

impl pallet_kiosk_machine::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type Ledger = Token;
    type Currency = Balances;
    type PalletId = MachinePalletId;
    type WeightInfo = ();
}
