#![cfg(feature = "runtime-benchmarks")]

extern crate alloc;

use crate::*;
use alloc::{boxed::Box, vec::Vec};
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_system::RawOrigin;
use primitives::{Balance, DistributionClock, ecosystem::params::PRECISION};

#[benchmarks]
mod benches {
  use super::*;

  fn install_operator<T: Config>() -> T::AccountId {
    let operator: T::AccountId = account("operator", 0, 0);
    Operator::<T>::put(&operator);
    operator
  }

  fn fill_gauges<T: Config>(operator: &T::AccountId, count: u32) {
    Gauges::<T>::kill();
    for i in 0..count {
      let gauge: T::AccountId = account("gauge", i, 0);
      Pallet::<T>::add_gauge(
        RawOrigin::Signed(operator.clone()).into(),
        gauge,
        1_000 * PRECISION,
      )
      .expect("Failed to add gauge");
    }
  }

  #[benchmark]
  fn perform_upkeep(g: Linear<0, { T::MaxGauges::get() }>) {
    let caller: T::AccountId = whitelisted_caller();
    let operator = install_operator::<T>();
    fill_gauges::<T>(&operator, g);
    T::BenchmarkHelper::fund(
      &Pallet::<T>::account_id(),
      1_000 * PRECISION * (g as u128 + 1),
    )
    .expect("Failed to fund distributor");
    Clock::<T>::put(DistributionClock::new(0));

    #[extrinsic_call]
    perform_upkeep(RawOrigin::Signed(caller), Vec::new());

    assert_eq!(Gauges::<T>::get().len() as u32, g);
  }

  #[benchmark]
  fn add_gauge() {
    let operator = install_operator::<T>();
    fill_gauges::<T>(&operator, T::MaxGauges::get().saturating_sub(1));
    let gauge: T::AccountId = account("new_gauge", 0, 0);

    #[extrinsic_call]
    add_gauge(RawOrigin::Signed(operator), gauge.clone(), 1_000 * PRECISION);

    assert_eq!(Pallet::<T>::allowance(&gauge), Balance::MAX);
  }

  #[benchmark]
  fn remove_gauge() {
    let operator = install_operator::<T>();
    fill_gauges::<T>(&operator, T::MaxGauges::get());

    #[extrinsic_call]
    remove_gauge(RawOrigin::Signed(operator), 0);

    assert_eq!(
      Gauges::<T>::get().len() as u32,
      T::MaxGauges::get().saturating_sub(1)
    );
  }

  #[benchmark]
  fn set_weekly_rate() {
    let operator = install_operator::<T>();
    fill_gauges::<T>(&operator, 1);

    #[extrinsic_call]
    set_weekly_rate(RawOrigin::Signed(operator), 0, 2_000 * PRECISION);

    assert_eq!(Gauges::<T>::get()[0].weekly_rate, 2_000 * PRECISION);
  }

  #[benchmark]
  fn set_update_threshold() {
    let operator = install_operator::<T>();

    #[extrinsic_call]
    set_update_threshold(RawOrigin::Signed(operator), 3_600);

    assert_eq!(Pallet::<T>::update_threshold(), 3_600);
  }

  #[benchmark]
  fn on_token_transfer() {
    let depositor: T::AccountId = whitelisted_caller();
    Depositor::<T>::put(&depositor);
    let amount = 1_000 * PRECISION;
    T::BenchmarkHelper::fund(&depositor, amount * 2).expect("Failed to fund depositor");

    #[extrinsic_call]
    on_token_transfer(RawOrigin::Signed(depositor), amount, Vec::new());
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
