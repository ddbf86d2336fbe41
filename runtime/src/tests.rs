//! Integration tests running the kiosk pallets against each other inside the
//! full runtime.
//!
//! # Test Categories
//!
//! 1. **Genesis**: deployment under a single owner
//! 2. **Airdrop**: funding the pot and paying out five subscribers
//! 3. **Machine**: buying and selling against the native currency
//! 4. **Atomicity**: ledger refusals rolling back currency movements

use crate::{genesis::*, *};
use frame_support::{assert_noop, assert_ok};
use kiosk_primitives::Lifecycle;
use sp_keyring::sr25519::Keyring as AccountKeyring;
use sp_runtime::BuildStorage;

fn owner() -> AccountId {
    AccountKeyring::Alice.to_account_id()
}

/// Every keyring account except the owner.
fn users() -> Vec<AccountId> {
    [
        AccountKeyring::Bob,
        AccountKeyring::Charlie,
        AccountKeyring::Dave,
        AccountKeyring::Eve,
        AccountKeyring::Ferdie,
    ]
    .iter()
    .map(|k| k.to_account_id())
    .collect()
}

fn new_test_ext() -> sp_io::TestExternalities {
    let mut endowed = users();
    endowed.push(owner());

    let t = development_genesis(owner(), endowed).build_storage().unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

fn token_balance(who: &AccountId) -> u128 {
    Token::balance_of(who).unwrap()
}

/// Sends `stock` tokens to the machine and puts `reserve` of them on sale.
fn stock_machine(stock: u128, reserve: u128) {
    assert_ok!(Token::transfer(RuntimeOrigin::signed(owner()), Machine::account_id(), stock));
    assert_ok!(Machine::restock_token(RuntimeOrigin::signed(owner()), reserve));
}

// ============================================================================
// Genesis
// ============================================================================

#[test]
fn genesis_deploys_all_pallets_under_owner() {
    new_test_ext().execute_with(|| {
        assert_eq!(Token::owner(), Some(owner()));
        assert_eq!(Airdrop::owner(), Some(owner()));
        assert_eq!(Machine::owner(), Some(owner()));

        assert_eq!(Token::total_supply(), Ok(INITIAL_SUPPLY));
        assert_eq!(token_balance(&owner()), INITIAL_SUPPLY);
        assert_eq!(Token::state(), Ok(Lifecycle::Active));
        assert_eq!(Machine::purchase_price(), PURCHASE_PRICE);
        assert_eq!(Balances::free_balance(owner()), ENDOWMENT);
    });
}

#[test]
fn pallet_accounts_are_distinct() {
    new_test_ext().execute_with(|| {
        let airdrop = Airdrop::account_id();
        let machine = Machine::account_id();

        assert_ne!(airdrop, machine);
        assert_eq!(Balances::free_balance(&machine), EXISTENTIAL_DEPOSIT);
        assert!(!users().contains(&airdrop));
        assert!(!users().contains(&machine));
    });
}

// ============================================================================
// Airdrop
// ============================================================================

#[test]
fn airdrop_pays_five_subscribers_equally() {
    new_test_ext().execute_with(|| {
        assert_ok!(Token::transfer(
            RuntimeOrigin::signed(owner()),
            Airdrop::account_id(),
            1_000_000
        ));

        for who in users() {
            assert_ok!(Airdrop::subscribe(RuntimeOrigin::signed(who)));
        }

        for who in users() {
            assert_eq!(token_balance(&who), 200_000);
        }
        assert_eq!(token_balance(&Airdrop::account_id()), 0);
        assert_eq!(Airdrop::get_length_subscribes(), Ok(5));
        assert_eq!(token_balance(&owner()), INITIAL_SUPPLY - 1_000_000);
        System::assert_last_event(
            pallet_kiosk_airdrop::Event::Distributed { share: 200_000, recipients: 5 }.into(),
        );
    });
}

#[test]
fn airdrop_stays_closed_once_paid_out() {
    new_test_ext().execute_with(|| {
        assert_ok!(Token::transfer(RuntimeOrigin::signed(owner()), Airdrop::account_id(), 500));
        for who in users() {
            assert_ok!(Airdrop::subscribe(RuntimeOrigin::signed(who)));
        }

        assert_noop!(
            Airdrop::subscribe(RuntimeOrigin::signed(owner())),
            pallet_kiosk_airdrop::Error::<Runtime>::CapacityExceeded
        );
    });
}

#[test]
fn paused_token_blocks_the_final_subscription() {
    new_test_ext().execute_with(|| {
        assert_ok!(Token::transfer(
            RuntimeOrigin::signed(owner()),
            Airdrop::account_id(),
            1_000_000
        ));
        let users = users();
        for who in &users[..4] {
            assert_ok!(Airdrop::subscribe(RuntimeOrigin::signed(who.clone())));
        }
        assert_ok!(Token::change_state(RuntimeOrigin::signed(owner()), 1));

        assert_noop!(
            Airdrop::subscribe(RuntimeOrigin::signed(users[4].clone())),
            pallet_kiosk_token::Error::<Runtime>::NotActive
        );
        assert_eq!(Airdrop::get_length_subscribes(), Ok(4));

        assert_ok!(Token::change_state(RuntimeOrigin::signed(owner()), 0));
        assert_ok!(Airdrop::subscribe(RuntimeOrigin::signed(users[4].clone())));
        assert_eq!(token_balance(&users[4]), 200_000);
    });
}

// ============================================================================
// Machine
// ============================================================================

#[test]
fn machine_sells_and_buys_back_tokens() {
    new_test_ext().execute_with(|| {
        let bob = AccountKeyring::Bob.to_account_id();
        stock_machine(1_000_000_000, 100_000);

        assert_ok!(Machine::buy(RuntimeOrigin::signed(bob.clone()), 30 * GWEI));
        assert_eq!(token_balance(&bob), 30);
        assert_eq!(Machine::tokens_quantity(), 100_000 - 30);
        assert_eq!(Balances::free_balance(&bob), ENDOWMENT - 30 * GWEI);

        assert_ok!(Machine::sell(RuntimeOrigin::signed(bob.clone()), 15));
        assert_eq!(token_balance(&bob), 15);
        assert_eq!(Machine::tokens_quantity(), 100_000 - 15);
        assert_eq!(Machine::contract_balance(), 15 * GWEI);
        assert_eq!(Balances::free_balance(&bob), ENDOWMENT - 15 * GWEI);
    });
}

#[test]
fn owner_collects_machine_takings() {
    new_test_ext().execute_with(|| {
        stock_machine(1_000_000_000, 100_000);
        for who in users() {
            assert_ok!(Machine::buy(RuntimeOrigin::signed(who), 1_000 * GWEI));
        }
        let takings = Machine::contract_balance();
        assert_eq!(takings, 5_000 * GWEI);

        assert_ok!(Machine::withdraw_ether(RuntimeOrigin::signed(owner()), takings));

        assert_eq!(Machine::contract_balance(), 0);
        assert_eq!(Balances::free_balance(owner()), ENDOWMENT + takings);
    });
}

// ============================================================================
// Atomicity
// ============================================================================

#[test]
fn paused_token_reverts_machine_purchase() {
    new_test_ext().execute_with(|| {
        let bob = AccountKeyring::Bob.to_account_id();
        stock_machine(1_000_000_000, 100_000);
        assert_ok!(Token::change_state(RuntimeOrigin::signed(owner()), 1));

        assert_noop!(
            Machine::buy(RuntimeOrigin::signed(bob.clone()), 30 * GWEI),
            pallet_kiosk_token::Error::<Runtime>::NotActive
        );
        assert_eq!(Balances::free_balance(&bob), ENDOWMENT);
        assert_eq!(Machine::contract_balance(), 0);
    });
}

#[test]
fn killed_token_stops_machine() {
    new_test_ext().execute_with(|| {
        let bob = AccountKeyring::Bob.to_account_id();
        stock_machine(1_000_000_000, 100_000);
        assert_ok!(Token::change_state(RuntimeOrigin::signed(owner()), 2));
        assert_ok!(Token::kill(RuntimeOrigin::signed(owner()), Token::holder_count()));

        assert_noop!(
            Machine::buy(RuntimeOrigin::signed(bob), 30 * GWEI),
            pallet_kiosk_token::Error::<Runtime>::ContractKilled
        );
        assert_noop!(
            Machine::restock_token(RuntimeOrigin::signed(owner()), 1),
            pallet_kiosk_machine::Error::<Runtime>::InsufficientTokenBalance
        );
    });
}
