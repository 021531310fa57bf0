#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod board;
pub mod config;
pub mod hal;
pub mod hw;
pub mod support;

#[cfg(feature = "disco-f746ng")]
pub use board::disco_f746ng;
#[cfg(feature = "hybo-h735vg")]
pub use board::hybo_h735vg;

pub use board::{Board, Peripherals};
pub use support::clocking::CoreClocks;
