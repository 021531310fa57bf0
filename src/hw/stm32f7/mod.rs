mod chip_specs;
pub use chip_specs::Stm32f746Specs;

pub mod clock_config_216;

mod rcc;
pub use rcc::{ClockControl, PllFactors, PllSource, SystemClockSource};
