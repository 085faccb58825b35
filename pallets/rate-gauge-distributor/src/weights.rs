#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn perform_upkeep(g: u32, ) -> Weight;
	fn add_gauge() -> Weight;
	fn remove_gauge() -> Weight;
	fn set_weekly_rate() -> Weight;
	fn set_update_threshold() -> Weight;
	fn on_token_transfer() -> Weight;
	fn execute() -> Weight;
	fn set_operator() -> Weight;
	fn set_depositor() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: `RateGaugeDistributor::Clock` (r:1 w:1)
	/// Storage: `RateGaugeDistributor::Gauges` (r:1 w:0)
	/// Storage: `RateGaugeDistributor::TotalDistributed` (r:1 w:1)
	/// The range of component `g` is `[0, 32]`.
	fn perform_upkeep(g: u32, ) -> Weight {
		Weight::from_parts(25_000_000, 3_500)
			.saturating_add(Weight::from_parts(38_000_000, 2_600).saturating_mul(g.into()))
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(g.into())))
			.saturating_add(T::DbWeight::get().writes(2))
			.saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(g.into())))
	}
	fn add_gauge() -> Weight {
		Weight::from_parts(30_000_000, 3_500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn remove_gauge() -> Weight {
		Weight::from_parts(30_000_000, 3_500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn set_weekly_rate() -> Weight {
		Weight::from_parts(15_000_000, 3_500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_update_threshold() -> Weight {
		Weight::from_parts(10_000_000, 1_500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn on_token_transfer() -> Weight {
		Weight::from_parts(40_000_000, 3_600)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn execute() -> Weight {
		Weight::from_parts(12_000_000, 1_500)
			.saturating_add(T::DbWeight::get().reads(1))
	}
	fn set_operator() -> Weight {
		Weight::from_parts(10_000_000, 1_500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_depositor() -> Weight {
		Weight::from_parts(10_000_000, 1_500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn perform_upkeep(g: u32, ) -> Weight {
		Weight::from_parts(25_000_000, 3_500)
			.saturating_add(Weight::from_parts(38_000_000, 2_600).saturating_mul(g.into()))
			.saturating_add(RocksDbWeight::get().reads(3))
			.saturating_add(RocksDbWeight::get().writes(2))
	}
	fn add_gauge() -> Weight {
		Weight::from_parts(30_000_000, 3_500)
	}
	fn remove_gauge() -> Weight {
		Weight::from_parts(30_000_000, 3_500)
	}
	fn set_weekly_rate() -> Weight {
		Weight::from_parts(15_000_000, 3_500)
	}
	fn set_update_threshold() -> Weight {
		Weight::from_parts(10_000_000, 1_500)
	}
	fn on_token_transfer() -> Weight {
		Weight::from_parts(40_000_000, 3_600)
	}
	fn execute() -> Weight {
		Weight::from_parts(12_000_000, 1_500)
	}
	fn set_operator() -> Weight {
		Weight::from_parts(10_000_000, 1_500)
	}
	fn set_depositor() -> Weight {
		Weight::from_parts(10_000_000, 1_500)
	}
}
