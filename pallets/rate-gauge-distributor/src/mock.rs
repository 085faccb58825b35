extern crate alloc;

use crate as pallet_rate_gauge_distributor;
use crate::{RewardGauge, RewardLedger};
use alloc::vec::Vec;
use core::time::Duration;
use polkadot_sdk::frame_support::traits::fungible::Mutate;
use polkadot_sdk::frame_support::traits::tokens::Preservation;
use polkadot_sdk::frame_support::{
  Blake2_128Concat, PalletId, construct_runtime, derive_impl, storage_alias,
  traits::{ConstU32, ConstU64, ConstU128, Currency, Get, UnixTime},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchError, DispatchResult,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::ecosystem::params::{PRECISION, RATE_DISTRIBUTOR_UPDATE_THRESHOLD};
use primitives::ecosystem::pallet_ids::RATE_GAUGE_DISTRIBUTOR_PALLET_ID;
use std::cell::{Cell, RefCell};

pub type AccountId = u64;
pub type Balance = u128;

pub const OPERATOR: AccountId = 1;
pub const DEPOSITOR: AccountId = 2;
pub const STRANGER: AccountId = 3;
pub const KEEPER: AccountId = 4;
pub const GAUGE_A: AccountId = 10;
pub const GAUGE_B: AccountId = 11;
pub const GAUGE_C: AccountId = 12;

/// Unix time at which every test starts
pub const START: u64 = 1_700_000_000;
pub const DAY: u64 = 86_400;
pub const HOUR: u64 = 3_600;

pub const RATE_A: Balance = 2_000 * PRECISION;
pub const RATE_B: Balance = 1_000 * PRECISION;
pub const INITIAL_REWARDS: Balance = 10_000 * PRECISION;
pub const DEPOSITOR_FUNDS: Balance = 5_000 * PRECISION;

thread_local! {
    static NOW: Cell<u64> = const { Cell::new(0) };

    // Gauges whose deposit_reward fails before pulling anything
    static REJECTING_GAUGES: RefCell<Vec<AccountId>> = const { RefCell::new(Vec::new()) };

    // Gauge that calls perform_upkeep again from inside deposit_reward
    static REENTRANT_GAUGE: Cell<Option<AccountId>> = const { Cell::new(None) };
    static REENTRY_RESULTS: RefCell<Vec<DispatchResult>> = const { RefCell::new(Vec::new()) };
}

pub fn set_now(secs: u64) {
  NOW.with(|n| n.set(secs));
}

pub fn advance_time(secs: u64) {
  NOW.with(|n| n.set(n.get() + secs));
}

pub fn now() -> u64 {
  NOW.with(|n| n.get())
}

pub fn reject_deposits(gauge: AccountId) {
  REJECTING_GAUGES.with(|g| g.borrow_mut().push(gauge));
}

pub fn reenter_from(gauge: AccountId) {
  REENTRANT_GAUGE.with(|g| g.set(Some(gauge)));
}

pub fn reentry_results() -> Vec<DispatchResult> {
  REENTRY_RESULTS.with(|r| r.borrow().clone())
}

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    RateGaugeDistributor: pallet_rate_gauge_distributor,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<Balance>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = Balance;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

// Allowances live in storage so failed extrinsics roll them back
#[storage_alias]
pub type MockAllowances = StorageDoubleMap<
  RewardTokenMock,
  Blake2_128Concat,
  AccountId,
  Blake2_128Concat,
  AccountId,
  Balance,
  polkadot_sdk::frame_support::pallet_prelude::ValueQuery,
>;

/// Reward token backed by the native balance plus allowance bookkeeping.
pub struct MockLedger;
impl RewardLedger<AccountId, Balance> for MockLedger {
  fn balance(who: &AccountId) -> Balance {
    Balances::free_balance(who)
  }

  fn transfer(from: &AccountId, to: &AccountId, amount: Balance) -> DispatchResult {
    <Balances as Mutate<AccountId>>::transfer(from, to, amount, Preservation::Expendable)?;
    Ok(())
  }

  fn allowance(owner: &AccountId, spender: &AccountId) -> Balance {
    MockAllowances::get(owner, spender)
  }

  fn approve(owner: &AccountId, spender: &AccountId, amount: Balance) -> DispatchResult {
    if amount == 0 {
      MockAllowances::remove(owner, spender);
    } else {
      MockAllowances::insert(owner, spender, amount);
    }
    Ok(())
  }

  fn transfer_from(
    spender: &AccountId,
    owner: &AccountId,
    to: &AccountId,
    amount: Balance,
  ) -> DispatchResult {
    let allowance = MockAllowances::get(owner, spender);
    if allowance < amount {
      return Err(DispatchError::Other("Insufficient allowance"));
    }
    if allowance != Balance::MAX {
      MockAllowances::insert(owner, spender, allowance - amount);
    }
    Self::transfer(owner, to, amount)
  }
}

/// Gauge that pulls its reward into its own account.
pub struct MockGauge;
impl RewardGauge<AccountId, Balance> for MockGauge {
  fn deposit_reward(gauge: &AccountId, distributor: &AccountId, amount: Balance) -> DispatchResult {
    if REJECTING_GAUGES.with(|g| g.borrow().contains(gauge)) {
      return Err(DispatchError::Other("Gauge rejected deposit"));
    }
    if REENTRANT_GAUGE.with(|g| g.get()) == Some(*gauge) {
      let result = RateGaugeDistributor::perform_upkeep(RuntimeOrigin::signed(*gauge), Vec::new());
      REENTRY_RESULTS.with(|r| r.borrow_mut().push(result));
    }
    MockLedger::transfer_from(gauge, distributor, gauge, amount)
  }
}

pub struct MockUnixTime;
impl UnixTime for MockUnixTime {
  fn now() -> Duration {
    Duration::from_secs(now())
  }
}

pub struct PalletIdStub;
impl Get<PalletId> for PalletIdStub {
  fn get() -> PalletId {
    PalletId(*RATE_GAUGE_DISTRIBUTOR_PALLET_ID)
  }
}

impl pallet_rate_gauge_distributor::Config for Test {
  type Ledger = MockLedger;
  type Gauge = MockGauge;
  type UnixTime = MockUnixTime;
  type RuntimeCall = RuntimeCall;
  type PalletId = PalletIdStub;
  type MaxGauges = ConstU32<4>;
  type DefaultUpdateThreshold = ConstU64<{ RATE_DISTRIBUTOR_UPDATE_THRESHOLD }>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = RateGaugeDistributorBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct RateGaugeDistributorBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<AccountId, Balance> for RateGaugeDistributorBenchmarkHelper {
  fn fund(who: &AccountId, amount: Balance) -> DispatchResult {
    let _ = Balances::deposit_creating(who, amount);
    Ok(())
  }
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  pallet_rate_gauge_distributor::GenesisConfig::<Test> {
    gauges: alloc::vec![(GAUGE_A, RATE_A), (GAUGE_B, RATE_B)],
    update_threshold: None,
    operator: Some(OPERATOR),
    depositor: Some(DEPOSITOR),
  }
  .assimilate_storage(&mut t)
  .unwrap();

  // Reset State
  NOW.with(|n| n.set(START));
  REJECTING_GAUGES.with(|g| g.borrow_mut().clear());
  REENTRANT_GAUGE.with(|g| g.set(None));
  REENTRY_RESULTS.with(|r| r.borrow_mut().clear());

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| {
    System::set_block_number(1);
    let _ = Balances::deposit_creating(&RateGaugeDistributor::account_id(), INITIAL_REWARDS);
    let _ = Balances::deposit_creating(&DEPOSITOR, DEPOSITOR_FUNDS);
  });
  ext
}
