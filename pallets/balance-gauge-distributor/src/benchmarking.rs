#![cfg(feature = "runtime-benchmarks")]

extern crate alloc;

use crate::*;
use alloc::{boxed::Box, vec::Vec};
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_system::RawOrigin;
use primitives::{DistributionClock, ecosystem::params::PRECISION};

#[benchmarks]
mod benches {
  use super::*;

  fn install_operator<T: Config>() -> T::AccountId {
    let operator: T::AccountId = account("operator", 0, 0);
    Operator::<T>::put(&operator);
    operator
  }

  #[benchmark]
  fn perform_upkeep() {
    let caller: T::AccountId = whitelisted_caller();
    let gauge: T::AccountId = account("gauge", 0, 0);
    Gauge::<T>::put(&gauge);
    Clock::<T>::put(DistributionClock::new(0));
    T::BenchmarkHelper::fund_staked(&Pallet::<T>::account_id(), 1_000 * PRECISION)
      .expect("Failed to fund distributor");

    #[extrinsic_call]
    perform_upkeep(RawOrigin::Signed(caller), Vec::new());

    assert_eq!(Pallet::<T>::staked_balance(), 0);
  }

  #[benchmark]
  fn on_token_transfer() {
    let depositor: T::AccountId = whitelisted_caller();
    Depositor::<T>::put(&depositor);
    let amount = 1_000 * PRECISION;
    T::BenchmarkHelper::fund_staked(&depositor, amount * 2).expect("Failed to fund depositor");

    #[extrinsic_call]
    on_token_transfer(RawOrigin::Signed(depositor), amount, Vec::new());

    assert_eq!(Pallet::<T>::staked_balance(), amount);
  }

  #[benchmark]
  fn set_update_threshold() {
    let operator = install_operator::<T>();

    #[extrinsic_call]
    set_update_threshold(RawOrigin::Signed(operator), 3_600);

    assert_eq!(Pallet::<T>::update_threshold(), 3_600);
  }

  #[benchmark]
  fn set_gauge() {
    let operator = install_operator::<T>();
    let gauge: T::AccountId = account("gauge", 1, 0);

    #[extrinsic_call]
    set_gauge(RawOrigin::Signed(operator), gauge.clone());

    assert_eq!(Gauge::<T>::get(), Some(gauge));
  }

  #[benchmark]
  fn execute() {
    let operator = install_operator::<T>();
    let call: <T as Config>::RuntimeCall =
      polkadot_sdk::frame_system::Call::<T>::remark { remark: Vec::new() }.into();

    #[extrinsic_call]
    execute(RawOrigin::Signed(operator), Box::new(call));
  }

  #[benchmark]
  fn set_operator() {
    let operator = install_operator::<T>();
    let successor: T::AccountId = account("successor", 0, 0);

    #[extrinsic_call]
    set_operator(RawOrigin::Signed(operator), successor.clone());

    assert_eq!(Operator::<T>::get(), Some(successor));
  }

  #[benchmark]
  fn set_depositor() {
    let operator = install_operator::<T>();
    let depositor: T::AccountId = account("depositor", 0, 0);

    #[extrinsic_call]
    set_depositor(RawOrigin::Signed(operator), depositor.clone());

    assert_eq!(Depositor::<T>::get(), Some(depositor));
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
