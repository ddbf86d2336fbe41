use crate as pallet_kiosk_airdrop;
use frame_support::{derive_impl, parameter_types, traits::ConstU32, PalletId};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Token: pallet_kiosk_token,
        Airdrop: pallet_kiosk_airdrop,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
    type AccountData = ();
}

pub const OWNER: u64 = 1;
/// Five distinct subscribers, enough to fill the set.
pub const SUBSCRIBERS: [u64; 5] = [11, 12, 13, 14, 15];
pub const LATECOMER: u64 = 16;

pub const TOKEN_SUPPLY: u128 = 100_000_000_000;
pub const AIRDROP_POT: u128 = 1_000_000;

parameter_types! {
    pub const AirdropPalletId: PalletId = PalletId(*b"airdrop_");
}

impl pallet_kiosk_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type GuardReadsWhenCancelled = frame_support::traits::ConstBool<false>;
    type WeightInfo = ();
}

impl pallet_kiosk_airdrop::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Ledger = Token;
    type MaxSubscribers = ConstU32<5>;
    type PalletId = AirdropPalletId;
    type WeightInfo = ();
}

/// Token and airdrop deployed by `OWNER`, with `AIRDROP_POT` already sent to
/// the airdrop account.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_kiosk_token::GenesisConfig::<Test> { owner: Some(OWNER), initial_supply: TOKEN_SUPPLY }
        .assimilate_storage(&mut t)
        .unwrap();
    pallet_kiosk_airdrop::GenesisConfig::<Test> { owner: Some(OWNER) }
        .assimilate_storage(&mut t)
        .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        Token::transfer(RuntimeOrigin::signed(OWNER), Airdrop::account_id(), AIRDROP_POT).unwrap();
    });
    ext
}

pub fn token_balance(who: u64) -> u128 {
    Token::balance_of(&who).unwrap()
}
