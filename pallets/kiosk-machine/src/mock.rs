use crate as pallet_kiosk_machine;
use frame_support::{
    derive_impl, parameter_types,
    traits::ConstBool,
    PalletId,
};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Balances: pallet_balances,
        Token: pallet_kiosk_token,
        Machine: pallet_kiosk_machine,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
    type AccountData = pallet_balances::AccountData<u128>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
    type Balance = u128;
    type ExistentialDeposit = ExistentialDeposit;
    type AccountStore = System;
}

pub const OWNER: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CHARLIE: u64 = 4;

/// Smallest currency units per gwei.
pub const GWEI: u128 = 1_000_000_000;
/// Smallest currency units per ether.
pub const ETHER: u128 = 1_000_000_000 * GWEI;

pub const TOKEN_SUPPLY: u128 = 10_000_000_000;
pub const MACHINE_STOCK: u128 = 1_000_000_000;
pub const PURCHASE_PRICE: u128 = GWEI;
pub const SALE_PRICE: u128 = GWEI;
pub const ENDOWMENT: u128 = 100 * ETHER;

parameter_types! {
    pub const MachinePalletId: PalletId = PalletId(*b"vendmach");
    pub static ExistentialDeposit: u128 = 1;
}

impl pallet_kiosk_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type GuardReadsWhenCancelled = ConstBool<false>;
    type WeightInfo = ();
}

impl pallet_kiosk_machine::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Ledger = Token;
    type Currency = Balances;
    type PalletId = MachinePalletId;
    type WeightInfo = ();
}

/// Token and machine deployed by `OWNER`, with `MACHINE_STOCK` tokens already
/// sent to the machine account (the reserve itself is still empty).
pub fn new_test_ext() -> sp_io::TestExternalities {
    new_test_ext_with_existential_deposit(1)
}

pub fn new_test_ext_with_existential_deposit(ed: u128) -> sp_io::TestExternalities {
    ExistentialDeposit::set(ed);

    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_balances::GenesisConfig::<Test> {
        balances: vec![
            (OWNER, ENDOWMENT),
            (ALICE, ENDOWMENT),
            (BOB, ENDOWMENT),
            (CHARLIE, ENDOWMENT),
        ],
        dev_accounts: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_kiosk_token::GenesisConfig::<Test> { owner: Some(OWNER), initial_supply: TOKEN_SUPPLY }
        .assimilate_storage(&mut t)
        .unwrap();

    pallet_kiosk_machine::GenesisConfig::<Test> {
        owner: Some(OWNER),
        purchase_price: PURCHASE_PRICE,
        sale_price: SALE_PRICE,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        Token::transfer(RuntimeOrigin::signed(OWNER), Machine::account_id(), MACHINE_STOCK)
            .unwrap();
    });
    ext
}

pub fn token_balance(who: u64) -> u128 {
    Token::balance_of(&who).unwrap()
}

pub fn currency_balance(who: u64) -> u128 {
    Balances::free_balance(who)
}
