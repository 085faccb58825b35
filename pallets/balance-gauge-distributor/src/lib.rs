//! Balance Gauge Distributor Pallet
//!
//! Holds a rebasing liquid staking asset and, once per update interval, wraps everything it
//! holds into the non-rebasing wrapped asset and pushes the result to a single gauge.
//!
//! There is no rate: the payout is whatever staked balance accumulated since the previous
//! distribution. Keepers poll [`Pallet::check_upkeep`] and submit [`Pallet::perform_upkeep`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod adapters;
pub use adapters::{LiquidWrapper, RewardGauge};

pub mod weights;
pub use weights::WeightInfo;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub const LOG_TARGET: &str = "runtime::balance-gauge-distributor";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId, Balance> {
  /// Credit `who` with `amount` of the staked asset
  fn fund_staked(who: &AccountId, amount: Balance) -> frame::deps::sp_runtime::DispatchResult;
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, LiquidWrapper, RewardGauge, WeightInfo};
  use alloc::{boxed::Box, vec::Vec};
  use frame::deps::{
    frame_support::{
      dispatch::{GetDispatchInfo, PostDispatchInfo},
      traits::{
        UnixTime,
        fungibles::{Inspect as FungiblesInspect, Mutate as FungiblesMutate},
        tokens::Preservation,
      },
    },
    sp_runtime::{
      DispatchError,
      traits::{AccountIdConversion, Dispatchable, Zero},
    },
  };
  use frame::prelude::*;
  use primitives::{Balance, DistributionClock};

  /// Configuration trait for the balance gauge distributor pallet
  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Fungibles holding both the staked and the wrapped asset
    type Assets: FungiblesInspect<Self::AccountId, AssetId = u32, Balance = Balance>
      + FungiblesMutate<Self::AccountId, AssetId = u32, Balance = Balance>;

    /// Rebasing liquid staking asset deposited into the distributor
    #[pallet::constant]
    type StakedAsset: Get<u32>;

    /// Non-rebasing wrapped asset paid to the gauge
    #[pallet::constant]
    type WrappedAsset: Get<u32>;

    /// Converts staked into wrapped tokens
    type Wrapper: LiquidWrapper<Self::AccountId, Balance>;

    /// Gauge receiving the wrapped tokens
    type Gauge: RewardGauge<Self::AccountId, Balance>;

    /// Wall clock used for the update interval
    type UnixTime: UnixTime;

    /// Calls the operator may forward from the distributor account
    type RuntimeCall: Parameter
      + Dispatchable<RuntimeOrigin = Self::RuntimeOrigin, PostInfo = PostDispatchInfo>
      + GetDispatchInfo
      + From<frame_system::Call<Self>>;

    /// The pallet ID deriving the account that holds undistributed tokens
    #[pallet::constant]
    type PalletId: Get<PalletId>;

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

  /// The single gauge receiving every distribution
  #[pallet::storage]
  #[pallet::getter(fn gauge)]
  pub type Gauge<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  #[pallet::storage]
  #[pallet::getter(fn clock)]
  pub type Clock<T: Config> = StorageValue<_, DistributionClock, ValueQuery, DefaultClock<T>>;

  #[pallet::storage]
  #[pallet::getter(fn operator)]
  pub type Operator<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  #[pallet::storage]
  #[pallet::getter(fn depositor)]
  pub type Depositor<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Wrapped tokens handed to the gauge since genesis
  #[pallet::storage]
  #[pallet::getter(fn total_distributed)]
  pub type TotalDistributed<T: Config> = StorageValue<_, Balance, ValueQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// The held staked balance was wrapped and paid to the gauge
    RewardsDistributed {
      gauge: T::AccountId,
      staked_amount: Balance,
      wrapped_amount: Balance,
      timestamp: u64,
    },
    /// The depositor pushed staked tokens in
    RewardsDeposited { from: T::AccountId, amount: Balance },
    UpdateThresholdSet {
      old_threshold: u64,
      new_threshold: u64,
    },
    GaugeSet {
      old: Option<T::AccountId>,
      new: T::AccountId,
    },
    /// The operator forwarded a call from the distributor account
    CallExecuted { operator: T::AccountId },
    OperatorChanged { old: T::AccountId, new: T::AccountId },
    DepositorChanged {
      old: Option<T::AccountId>,
      new: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Caller is not the operator (or not the depositor for deposits)
    Unauthorized,
    /// Interval not elapsed, nothing to distribute, or no gauge configured
    UpdateConditionsNotMet,
    /// Wrapping or the gauge transfer failed
    TransferFailed,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Wrap the whole staked balance and pay it to the gauge.
    ///
    /// Open to any signed account. `perform_data` is ignored.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::perform_upkeep())]
    pub fn perform_upkeep(origin: OriginFor<T>, _perform_data: Vec<u8>) -> DispatchResult {
      ensure_signed(origin)?;
      let now = Self::now();
      let gauge = Gauge::<T>::get().ok_or(Error::<T>::UpdateConditionsNotMet)?;
      let staked_amount = Self::staked_balance();
      let mut clock = Clock::<T>::get();
      ensure!(
        clock.threshold_met(now) && !staked_amount.is_zero(),
        Error::<T>::UpdateConditionsNotMet
      );
      // Clock moves before the wrapper or the gauge is called
      clock.advance(now);
      Clock::<T>::put(clock);

      let distributor = Self::account_id();
      let minted = T::Wrapper::wrap(&distributor, staked_amount)
        .map_err(|e| Self::adapter_failure("wrap", e))?;
      let wrapped_amount = T::Assets::balance(T::WrappedAsset::get(), &distributor);
      if !wrapped_amount.is_zero() {
        T::Gauge::deposit_reward(&gauge, &distributor, wrapped_amount)
          .map_err(|e| Self::adapter_failure("gauge deposit", e))?;
      }
      TotalDistributed::<T>::mutate(|total| *total = total.saturating_add(wrapped_amount));

      log::debug!(
        target: LOG_TARGET,
        "wrapped {} staked into {} and paid {} at {}",
        staked_amount,
        minted,
        wrapped_amount,
        now
      );
      Self::deposit_event(Event::RewardsDistributed {
        gauge,
        staked_amount,
        wrapped_amount,
        timestamp: now,
      });
      Ok(())
    }

    /// Push `amount` staked tokens from the depositor into the distributor.
    ///
    /// Only the configured depositor may call this; `data` is ignored.
    #[pallet::call_index(1)]
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
      T::Assets::transfer(
        T::StakedAsset::get(),
        &sender,
        &Self::account_id(),
        amount,
        Preservation::Expendable,
      )
      .map_err(|e| Self::adapter_failure("deposit", e))?;
      Self::deposit_event(Event::RewardsDeposited {
        from: sender,
        amount,
      });
      Ok(())
    }

    /// Change the minimum number of seconds between distributions (operator only).
    #[pallet::call_index(2)]
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

    /// Point distributions at a different gauge (operator only).
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::set_gauge())]
    pub fn set_gauge(origin: OriginFor<T>, gauge: T::AccountId) -> DispatchResult {
      Self::ensure_operator(origin)?;
      let old = Gauge::<T>::get();
      Gauge::<T>::put(&gauge);
      Self::deposit_event(Event::GaugeSet { old, new: gauge });
      Ok(())
    }

    /// Dispatch `call` with the distributor account as signed origin (operator only).
    ///
    /// Errors of the inner call are returned unchanged.
    #[pallet::call_index(4)]
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
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::set_operator())]
    pub fn set_operator(origin: OriginFor<T>, operator: T::AccountId) -> DispatchResult {
      let old = Self::ensure_operator(origin)?;
      Operator::<T>::put(&operator);
      Self::deposit_event(Event::OperatorChanged { old, new: operator });
      Ok(())
    }

    /// Set the account allowed to deposit staked tokens (operator only).
    #[pallet::call_index(6)]
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

    /// Whether `perform_upkeep` would succeed its eligibility checks right now.
    ///
    /// Requires a configured gauge, an elapsed interval and a positive staked balance.
    pub fn check_upkeep(_check_data: &[u8]) -> (bool, Vec<u8>) {
      let due = Gauge::<T>::get().is_some()
        && Clock::<T>::get().threshold_met(Self::now())
        && !Self::staked_balance().is_zero();
      (due, Vec::new())
    }

    pub fn last_updated() -> u64 {
      Clock::<T>::get().last_updated
    }

    pub fn update_threshold() -> u64 {
      Clock::<T>::get().update_threshold
    }

    /// Staked tokens waiting for the next distribution
    pub fn staked_balance() -> Balance {
      T::Assets::balance(T::StakedAsset::get(), &Self::account_id())
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

    fn adapter_failure(step: &str, error: DispatchError) -> Error<T> {
      log::warn!(target: LOG_TARGET, "{} failed: {:?}", step, error);
      Error::<T>::TransferFailed
    }
  }

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    pub gauge: Option<T::AccountId>,
    /// Overrides `DefaultUpdateThreshold` when set
    pub update_threshold: Option<u64>,
    pub operator: Option<T::AccountId>,
    pub depositor: Option<T::AccountId>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      if let Some(gauge) = &self.gauge {
        Gauge::<T>::put(gauge);
      }
      if let Some(update_threshold) = self.update_threshold {
        Clock::<T>::put(DistributionClock::new(update_threshold));
      }
      if let Some(operator) = &self.operator {
        Operator::<T>::put(operator);
      }
      if let Some(depositor) = &self.depositor {
        Depositor::<T>::put(depositor);
      }
      // Distributor account survives holding no tokens between distributions
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
    }
  }
}
