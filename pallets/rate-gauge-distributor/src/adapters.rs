//! Adapter traits for the rate gauge distributor
//!
//! The reward token and the gauges live outside this pallet. Two traits describe the
//! operations the distributor needs from them, keeping the pallet independent of the
//! runtime's token implementation.

use frame::prelude::*;

/// Fungible reward token with ERC20-style pull allowances.
///
/// Every mutation must be atomic: on error nothing has moved.
pub trait RewardLedger<AccountId, Balance> {
  /// Balance held by `who`.
  fn balance(who: &AccountId) -> Balance;

  /// Push `amount` from `from` to `to`.
  fn transfer(from: &AccountId, to: &AccountId, amount: Balance) -> DispatchResult;

  /// Amount `spender` may still pull from `owner`.
  fn allowance(owner: &AccountId, spender: &AccountId) -> Balance;

  /// Set (not increase) the amount `spender` may pull from `owner`.
  ///
  /// `Balance::MAX` is an unlimited allowance that pulls never decrement.
  fn approve(owner: &AccountId, spender: &AccountId, amount: Balance) -> DispatchResult;

  /// `spender` pulls `amount` out of `owner` into `to`, consuming allowance.
  fn transfer_from(
    spender: &AccountId,
    owner: &AccountId,
    to: &AccountId,
    amount: Balance,
  ) -> DispatchResult;
}

/// Downstream reward sink.
///
/// A gauge collects its reward by pulling `amount` from `distributor` through the
/// allowance the distributor granted it.
pub trait RewardGauge<AccountId, Balance> {
  fn deposit_reward(gauge: &AccountId, distributor: &AccountId, amount: Balance) -> DispatchResult;
}
