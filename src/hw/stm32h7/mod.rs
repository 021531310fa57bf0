mod chip_specs;
pub use chip_specs::Stm32h735Specs;

pub mod clock_config_550;

mod rcc;
pub use rcc::{PllFactors, PllInputRange, PllSource, Rcc, SystemClockSource, VoltageScaling};
