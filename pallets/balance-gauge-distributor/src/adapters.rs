//! Adapter traits for the balance gauge distributor
//!
//! The liquid staking wrapper and the gauge are external. The pallet only needs to turn its
//! staked balance into the wrapped representation and hand the result to one gauge.

use frame::prelude::*;

/// Converts the rebasing staked asset into its non-rebasing wrapped form.
pub trait LiquidWrapper<AccountId, Balance> {
  /// Burn `amount` staked tokens held by `who` and credit `who` with the wrapped equivalent.
  ///
  /// Returns the wrapped amount minted. Must be atomic: on error nothing has moved.
  fn wrap(who: &AccountId, amount: Balance) -> Result<Balance, DispatchError>;
}

/// Downstream reward sink receiving wrapped tokens.
pub trait RewardGauge<AccountId, Balance> {
  /// Move `amount` wrapped tokens from `distributor` into `gauge` and account them as rewards.
  fn deposit_reward(gauge: &AccountId, distributor: &AccountId, amount: Balance) -> DispatchResult;
}
