#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn perform_upkeep() -> Weight;
	fn on_token_transfer() -> Weight;
	fn set_update_threshold() -> Weight;
	fn set_gauge() -> Weight;
	fn execute() -> Weight;
	fn set_operator() -> Weight;
	fn set_depositor() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: `BalanceGaugeDistributor::Clock` (r:1 w:1)
	/// Storage: `BalanceGaugeDistributor::Gauge` (r:1 w:0)
	/// Storage: `BalanceGaugeDistributor::TotalDistributed` (r:1 w:1)
	/// Storage: `Assets::Asset` (r:2 w:2)
	/// Storage: `Assets::Account` (r:3 w:3)
	fn perform_upkeep() -> Weight {
		Weight::from_parts(95_000_000, 8_200)
			.saturating_add(T::DbWeight::get().reads(8))
			.saturating_add(T::DbWeight::get().writes(7))
	}
	/// Storage: `BalanceGaugeDistributor::Depositor` (r:1 w:0)
	/// Storage: `Assets::Asset` (r:1 w:1)
	/// Storage: `Assets::Account` (r:2 w:2)
	fn on_token_transfer() -> Weight {
		Weight::from_parts(45_000_000, 6_200)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	fn set_update_threshold() -> Weight {
		Weight::from_parts(10_000_000, 1_500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_gauge() -> Weight {
		Weight::from_parts(10_000_000, 1_500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
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
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn perform_upkeep() -> Weight {
		Weight::from_parts(95_000_000, 8_200)
			.saturating_add(RocksDbWeight::get().reads(8))
			.saturating_add(RocksDbWeight::get().writes(7))
	}
	fn on_token_transfer() -> Weight {
		Weight::from_parts(45_000_000, 6_200)
	}
	fn set_update_threshold() -> Weight {
		Weight::from_parts(10_000_000, 1_500)
	}
	fn set_gauge() -> Weight {
		Weight::from_parts(10_000_000, 1_500)
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
