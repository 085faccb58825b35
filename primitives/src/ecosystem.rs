//! Ecosystem Constants for the Gauge Reward Distributors
//!
//! This module centralizes the system-level constants shared by both distributor pallets:
//! pallet IDs used to derive the custodial accounts, and the default scheduling parameters.
//!
//! Runtime configurations and test mocks import these instead of repeating literals.

/// Balance type alias for consistency across the distributors
pub type Balance = u128;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// These IDs are used by Polkadot SDK's `PalletId::into_account_truncating()`
/// to deterministically generate the account that holds undistributed rewards.
pub mod pallet_ids {
  /// Rate gauge distributor (weekly per-gauge reward rates)
  pub const RATE_GAUGE_DISTRIBUTOR_PALLET_ID: &[u8; 8] = b"gaugert0";

  /// Balance gauge distributor (flat payout of the held liquid staking balance)
  pub const BALANCE_GAUGE_DISTRIBUTOR_PALLET_ID: &[u8; 8] = b"gaugebl0";
}

/// Scheduling and sizing parameters.
pub mod params {
  use super::Balance;

  /// Precision scalar for token amounts (10^12).
  pub const PRECISION: Balance = 1_000_000_000_000;

  /// Seconds in one reward period. Weekly rates are quoted per this many seconds.
  pub const SECONDS_PER_WEEK: u64 = 7 * 86_400;

  /// Default minimum interval between rate distributions (one week minus one hour).
  pub const RATE_DISTRIBUTOR_UPDATE_THRESHOLD: u64 = SECONDS_PER_WEEK - 3_600;

  /// Default minimum interval between flat balance distributions (one week).
  pub const BALANCE_DISTRIBUTOR_UPDATE_THRESHOLD: u64 = SECONDS_PER_WEEK;

  /// Maximum number of gauges tracked by the rate distributor.
  pub const MAX_GAUGES: u32 = 32;
}
