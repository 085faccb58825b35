//! Distribution clock and weekly proration arithmetic shared by the distributors.
//!
//! Both distributor variants gate their action on the time elapsed since the last
//! successful distribution. The rate variant additionally converts a weekly reward
//! rate into the amount owed for the elapsed interval.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_arithmetic::{Rounding, helpers_128bit::multiply_by_rational_with_rounding};

use crate::ecosystem::{Balance, params::SECONDS_PER_WEEK};

/// Timestamp of the last distribution plus the minimum interval between distributions.
///
/// All values are unix seconds. `last_updated` is zero until the first distribution.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub struct DistributionClock {
  /// Timestamp of the last successful distribution
  pub last_updated: u64,
  /// Minimum seconds that must pass before the next distribution
  pub update_threshold: u64,
}

impl DistributionClock {
  pub const fn new(update_threshold: u64) -> Self {
    Self {
      last_updated: 0,
      update_threshold,
    }
  }

  /// Seconds since the last distribution. A clock reading behind `last_updated` counts as zero.
  pub fn elapsed(&self, now: u64) -> u64 {
    now.saturating_sub(self.last_updated)
  }

  /// Whether at least `update_threshold` seconds have passed since the last distribution.
  pub fn threshold_met(&self, now: u64) -> bool {
    self.elapsed(now) >= self.update_threshold
  }

  /// Record a distribution executed at `now`. Never moves `last_updated` backwards.
  pub fn advance(&mut self, now: u64) {
    self.last_updated = self.last_updated.max(now);
  }
}

/// Amount owed to a gauge paid `weekly_rate` per week after `elapsed` seconds.
///
/// Anything at or beyond one full week pays exactly one weekly rate. Shorter intervals are
/// paid pro rata, truncating toward zero.
pub fn prorated_reward(weekly_rate: Balance, elapsed: u64) -> Balance {
  if elapsed >= SECONDS_PER_WEEK {
    return weekly_rate;
  }
  // elapsed < SECONDS_PER_WEEK, so the result is bounded by weekly_rate and cannot overflow
  multiply_by_rational_with_rounding(
    weekly_rate,
    elapsed as u128,
    SECONDS_PER_WEEK as u128,
    Rounding::Down,
  )
  .unwrap_or(weekly_rate)
}
