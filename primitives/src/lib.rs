#![cfg_attr(not(feature = "std"), no_std)]

pub mod ecosystem;
pub mod schedule;

pub use ecosystem::*;
pub use schedule::*;
