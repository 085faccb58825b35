//! Rate Gauge Distributor Pallet
//!
//! Streams a reward token out of the pallet account into a registry of gauges. Every gauge
//! carries its own weekly rate; each distribution pays that rate prorated over the seconds
//! elapsed since the previous distribution, capped at one full week.
//!
//! Distribution follows the keeper upkeep pattern: [`Pallet::check_upkeep`] is a read-only
//! eligibility probe and [`Pallet::perform_upkeep`] is the extrinsic that pays out. Gauges
//! collect their share by pulling through an unlimited allowance granted when they are added.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod adapters;
pub use adapters::{RewardGauge, RewardLedger};

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub const LOG_TARGET: &str = "runtime::rate-gauge-distributor";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId, Balance> {
  /// Give `who` enough reward tokens to pay every gauge
  fn fund(who: &AccountId, amount: Balance) -> frame::deps::sp_runtime::DispatchResult;
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, RewardGauge, RewardLedger, WeightInfo};
  use alloc::{boxed::Box, vec::Vec};
  use frame::deps::{
    frame_support::{
      dispatch::{GetDispatchInfo, PostDispatchInfo},
      traits::UnixTime,
    },
    sp_runtime::{
      DispatchError,
      traits::{AccountIdConversion, Dispatchable, Zero},
    },
  };
  use frame::prelude::*;
  use primitives::{Balance, DistributionClock, prorated_reward};

  /// Registry entry: a gauge and the amount it earns per full week.
  #[derive(
    Clone, Debug, Decode, DecodeWithMemTracking, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen,
  )]
  pub struct GaugeInfo<AccountId> {
    pub gauge: AccountId,
    pub weekly_rate: Balance,
  }

  pub type GaugesOf<T> = BoundedVec<
    GaugeInfo<<T as frame_system::Config>::AccountId>,
    <T as Config>::MaxGauges,
  >;

  /// Configuration trait for the rate gauge distributor pallet
  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Reward token ledger holding the distributor balance and gauge allowances
    type Ledger: RewardLedger<Self::AccountId, Balance>;

    /// Gauges that collect their share from the distributor
    type Gauge: RewardGauge<Self::AccountId, Balance>;

    /// Wall clock used for elapsed-time accounting
    type UnixTime: UnixTime;

    /// Calls the operator may forward from the distributor account
    type RuntimeCall: Parameter
      + Dispatchable<RuntimeOrigin = Self::RuntimeOrigin, PostInfo = PostDispatchInfo>
      + GetDispatchInfo
      + From<frame_system::Call<Self>>;

    /// The pallet ID deriving the account that holds undistributed rewards
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Maximum number of registry entries
    #[pallet::constant]
    type MaxGauges: Get<u32>;

    /// Minimum seconds between distributions until the operator changes it
    #[pallet::constant]
    type DefaultUpdateThreshold: Get<u64>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId, Balance>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  #[pallet::type_value]
  pub fn DefaultClock<T: Config>() -> DistributionClock {
    DistributionClock::new(T::DefaultUpdateThreshold::get())
  }

  /// Gauges in distribution order
  #[pallet::storage]
  #[pallet::getter(fn gauges)]
  pub type Gauges<T: Config> = StorageValue<_, GaugesOf<T>, ValueQuery>;

  /// Last distribution timestamp and minimum interval
  #[pallet::storage]
  #[pallet::getter(fn clock)]
  pub type Clock<T: Config> = StorageValue<_, DistributionClock, ValueQuery, DefaultClock<T>>;

  /// Account allowed to manage gauges, thresholds and forward calls
  #[pallet::storage]
  #[pallet::getter(fn operator)]
  pub type Operator<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Account allowed to push rewards in through `on_token_transfer`
  #[pallet::storage]
  #[pallet::getter(fn depositor)]
  pub type Depositor<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Rewards handed to gauges since genesis
  #[pallet::storage]
  #[pallet::getter(fn total_distributed)]
  pub type TotalDistributed<T: Config> = StorageValue<_, Balance, ValueQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A gauge was appended to the registry
    GaugeAdded {
      index: u32,
      gauge: T::AccountId,
      weekly_rate: Balance,
    },
    /// A gauge was removed; later entries shifted down by one
    GaugeRemoved { index: u32, gauge: T::AccountId },
    /// A gauge's weekly rate was replaced
    WeeklyRateUpdated {
      index: u32,
      gauge: T::AccountId,
      old_rate: Balance,
      new_rate: Balance,
    },
    /// Minimum interval between distributions changed
    UpdateThresholdSet {
      old_threshold: u64,
      new_threshold: u64,
    },
    /// A gauge collected its share of a distribution
    GaugeRewarded { gauge: T::AccountId, amount: Balance },
    /// A distribution completed
    UpkeepPerformed {
      timestamp: u64,
      elapsed: u64,
      total: Balance,
    },
    /// The depositor pushed rewards into the distributor
    RewardsDeposited { from: T::AccountId, amount: Balance },
    /// The operator forwarded a call from the distributor account
    CallExecuted { operator: T::AccountId },
    /// Operator role handed over
    OperatorChanged { old: T::AccountId, new: T::AccountId },
    /// Depositor role reassigned
    DepositorChanged {
      old: Option<T::AccountId>,
      new: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Caller is not the operator (or not the depositor for deposits)
    Unauthorized,
    /// No gauge at the given registry index
    IndexOutOfRange,
    /// Not enough time has passed since the last distribution
    UpdateThresholdNotMet,
    /// The reward ledger or a gauge rejected a transfer
    TransferFailed,
    /// Registry already holds `MaxGauges` entries
    TooManyGauges,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Pay every gauge its prorated weekly rate for the time since the last distribution.
    ///
    /// Open to any signed account. `perform_data` is accepted for keeper compatibility and ignored.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::perform_upkeep(T::MaxGauges::get()))]
    pub fn perform_upkeep(origin: OriginFor<T>, _perform_data: Vec<u8>) -> DispatchResult {
      ensure_signed(origin)?;
      let now = Self::now();
      let mut clock = Clock::<T>::get();
      ensure!(clock.threshold_met(now), Error::<T>::UpdateThresholdNotMet);
      let elapsed = clock.elapsed(now);
      // Clock moves before any gauge is called
      clock.advance(now);
      Clock::<T>::put(clock);

      let distributor = Self::account_id();
      let mut total: Balance = Zero::zero();
      for entry in Gauges::<T>::get() {
        let amount = prorated_reward(entry.weekly_rate, elapsed);
        if amount.is_zero() {
          continue;
        }
        T::Gauge::deposit_reward(&entry.gauge, &distributor, amount).map_err(|e| {
          log::warn!(
            target: LOG_TARGET,
            "gauge {:?} failed to collect {}: {:?}",
            entry.gauge,
            amount,
            e
          );
          Error::<T>::TransferFailed
        })?;
        total = total.saturating_add(amount);
        Self::deposit_event(Event::GaugeRewarded {
          gauge: entry.gauge,
          amount,
        });
      }
      TotalDistributed::<T>::mutate(|distributed| *distributed = distributed.saturating_add(total));
      log::debug!(
        target: LOG_TARGET,
        "distributed {} over {}s at {}",
        total,
        elapsed,
        now
      );
      Self::deposit_event(Event::UpkeepPerformed {
        timestamp: now,
        elapsed,
        total,
      });
      Ok(())
    }

    /// Append a gauge and grant it an unlimited allowance (operator only).
    ///
    /// The same account may be added more than once; each entry earns its own rate.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::add_gauge())]
    pub fn add_gauge(
      origin: OriginFor<T>,
      gauge: T::AccountId,
      weekly_rate: Balance,
    ) -> DispatchResult {
      Self::ensure_operator(origin)?;
      let index = Gauges::<T>::try_mutate(|gauges| -> Result<u32, DispatchError> {
        gauges
          .try_push(GaugeInfo {
            gauge: gauge.clone(),
            weekly_rate,
          })
          .map_err(|_| Error::<T>::TooManyGauges)?;
        Ok((gauges.len() - 1) as u32)
      })?;
      Self::approve(&gauge, Balance::MAX)?;
      Self::deposit_event(Event::GaugeAdded {
        index,
        gauge,
        weekly_rate,
      });
      Ok(())
    }

    /// Revoke the allowance of the gauge at `index` and remove it, keeping the order of the
    /// others (operator only).
    ///
    /// The allowance is per account, so other entries for the same account lose it too.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::remove_gauge())]
    pub fn remove_gauge(origin: OriginFor<T>, index: u32) -> DispatchResult {
      Self::ensure_operator(origin)?;
      let mut gauges = Gauges::<T>::get();
      ensure!(
        (index as usize) < gauges.len(),
        Error::<T>::IndexOutOfRange
      );
      let removed = gauges.remove(index as usize);
      Self::approve(&removed.gauge, Zero::zero())?;
      Gauges::<T>::put(gauges);
      Self::deposit_event(Event::GaugeRemoved {
        index,
        gauge: removed.gauge,
      });
      Ok(())
    }

    /// Replace the weekly rate of the gauge at `index` (operator only).
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::set_weekly_rate())]
    pub fn set_weekly_rate(
      origin: OriginFor<T>,
      index: u32,
      weekly_rate: Balance,
    ) -> DispatchResult {
      Self::ensure_operator(origin)?;
      let (gauge, old_rate) = Gauges::<T>::try_mutate(|gauges| -> Result<_, DispatchError> {
        let entry = gauges
          .get_mut(index as usize)
          .ok_or(Error::<T>::IndexOutOfRange)?;
        let old_rate = core::mem::replace(&mut entry.weekly_rate, weekly_rate);
        Ok((entry.gauge.clone(), old_rate))
      })?;
      Self::deposit_event(Event::WeeklyRateUpdated {
        index,
        gauge,
        old_rate,
        new_rate: weekly_rate,
      });
      Ok(())
    }

    /// Change the minimum number of seconds between distributions (operator only).
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::set_update_threshold())]
    pub fn set_update_threshold(origin: OriginFor<T>, update_threshold: u64) -> DispatchResult {
      Self::ensure_operator(origin)?;
      let old_threshold = Clock::<T>::mutate(|clock| {
        core::mem::replace(&mut clock.update_threshold, update_threshold)
      });
      Self::deposit_event(Event::UpdateThresholdSet {
        old_threshold,
        new_threshold: update_threshold,
      });
      Ok(())
    }

    /// Push `amount` reward tokens from the depositor into the distributor.
    ///
    /// Only the configured depositor may call this; `data` is ignored.
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::on_token_transfer())]
    pub fn on_token_transfer(
      origin: OriginFor<T>,
      amount: Balance,
      _data: Vec<u8>,
    ) -> DispatchResult {
      let sender = ensure_signed(origin).map_err(|_| Error::<T>::Unauthorized)?;
      ensure!(
        Depositor::<T>::get().as_ref() == Some(&sender),
        Error::<T>::Unauthorized
      );
      T::Ledger::transfer(&sender, &Self::account_id(), amount).map_err(|e| {
        log::warn!(target: LOG_TARGET, "deposit of {} failed: {:?}", amount, e);
        Error::<T>::TransferFailed
      })?;
      Self::deposit_event(Event::RewardsDeposited {
        from: sender,
        amount,
      });
      Ok(())
    }

    /// Dispatch `call` with the distributor account as signed origin (operator only).
    ///
    /// Errors of the inner call are returned unchanged.
    #[pallet::call_index(6)]
    #[pallet::weight({
      let dispatch_info = call.get_dispatch_info();
      (
        T::WeightInfo::execute().saturating_add(dispatch_info.call_weight),
        dispatch_info.class,
      )
    })]
    pub fn execute(
      origin: OriginFor<T>,
      call: Box<<T as Config>::RuntimeCall>,
    ) -> DispatchResult {
      let operator = Self::ensure_operator(origin)?;
      let distributor: <T as frame_system::Config>::RuntimeOrigin =
        frame_system::RawOrigin::Signed(Self::account_id()).into();
      (*call)
        .dispatch(distributor)
        .map(|_| ())
        .map_err(|e| e.error)?;
      Self::deposit_event(Event::CallExecuted { operator });
      Ok(())
    }

    /// Hand the operator role to another account (operator only).
    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::set_operator())]
    pub fn set_operator(origin: OriginFor<T>, operator: T::AccountId) -> DispatchResult {
      let old = Self::ensure_operator(origin)?;
      Operator::<T>::put(&operator);
      Self::deposit_event(Event::OperatorChanged { old, new: operator });
      Ok(())
    }

    /// Set the account allowed to deposit rewards (operator only).
    #[pallet::call_index(8)]
    #[pallet::weight(T::WeightInfo::set_depositor())]
    pub fn set_depositor(origin: OriginFor<T>, depositor: T::AccountId) -> DispatchResult {
      Self::ensure_operator(origin)?;
      let old = Depositor::<T>::get();
      Depositor::<T>::put(&depositor);
      Self::deposit_event(Event::DepositorChanged {
        old,
        new: depositor,
      });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// Whether `perform_upkeep` would pass its threshold check right now.
    ///
    /// Always returns empty perform data; `check_data` is ignored.
    pub fn check_upkeep(_check_data: &[u8]) -> (bool, Vec<u8>) {
      (Clock::<T>::get().threshold_met(Self::now()), Vec::new())
    }

    pub fn last_updated() -> u64 {
      Clock::<T>::get().last_updated
    }

    pub fn update_threshold() -> u64 {
      Clock::<T>::get().update_threshold
    }

    /// Reward tokens currently held by the distributor
    pub fn reward_balance() -> Balance {
      T::Ledger::balance(&Self::account_id())
    }

    /// What `gauge` may still pull from the distributor
    pub fn allowance(gauge: &T::AccountId) -> Balance {
      T::Ledger::allowance(&Self::account_id(), gauge)
    }

    fn now() -> u64 {
      T::UnixTime::now().as_secs()
    }

    fn ensure_operator(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
      let who = ensure_signed(origin).map_err(|_| Error::<T>::Unauthorized)?;
      ensure!(
        Operator::<T>::get().as_ref() == Some(&who),
        Error::<T>::Unauthorized
      );
      Ok(who)
    }

    fn approve(gauge: &T::AccountId, amount: Balance) -> DispatchResult {
      T::Ledger::approve(&Self::account_id(), gauge, amount).map_err(|e| {
        log::warn!(
          target: LOG_TARGET,
          "allowance update for {:?} failed: {:?}",
          gauge,
          e
        );
        Error::<T>::TransferFailed.into()
      })
    }
  }

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    /// Initial gauges and weekly rates, in distribution order
    pub gauges: Vec<(T::AccountId, Balance)>,
    /// Overrides `DefaultUpdateThreshold` when set
    pub update_threshold: Option<u64>,
    pub operator: Option<T::AccountId>,
    pub depositor: Option<T::AccountId>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      let distributor = Pallet::<T>::account_id();
      let gauges: GaugesOf<T> = self
        .gauges
        .iter()
        .map(|(gauge, weekly_rate)| GaugeInfo {
          gauge: gauge.clone(),
          weekly_rate: *weekly_rate,
        })
        .collect::<Vec<_>>()
        .try_into()
        .expect("Genesis gauges exceed MaxGauges");
      for entry in gauges.iter() {
        T::Ledger::approve(&distributor, &entry.gauge, Balance::MAX)
          .expect("Genesis gauge allowance must be grantable");
      }
      Gauges::<T>::put(gauges);
      if let Some(update_threshold) = self.update_threshold {
        Clock::<T>::put(DistributionClock::new(update_threshold));
      }
      if let Some(operator) = &self.operator {
        Operator::<T>::put(operator);
      }
      if let Some(depositor) = &self.depositor {
        Depositor::<T>::put(depositor);
      }
      // Distributor account survives a zero reward balance
      frame_system::Pallet::<T>::inc_providers(&distributor);
    }
  }
}
