use crate::support::clocking::ApbPrescaler;
use fugit::HertzU32 as Hertz;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PllSource {
    InternalClock,
    ExternalClock,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemClockSource {
    InternalClock,
    ExternalClock,
    Pll,
}

/// Main PLL: `f_out = f_in / m * n / p`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PllFactors {
    pub m: u8,
    pub n: u16,
    pub p: u8,
}

impl PllFactors {
    pub const fn vco_input(&self, input: Hertz) -> Hertz {
        Hertz::from_raw(input.raw() / self.m as u32)
    }

    pub const fn vco_output(&self, input: Hertz) -> Hertz {
        Hertz::from_raw(self.vco_input(input).raw() * self.n as u32)
    }

    pub const fn output(&self, input: Hertz) -> Hertz {
        Hertz::from_raw(self.vco_output(input).raw() / self.p as u32)
    }
}

/// STM32F7 RCC + flash interface, as far as board bring-up touches it.
pub trait ClockControl {
    fn enable_external_clock(&mut self);

    fn enable_pll(&mut self, source: PllSource, factors: &PllFactors);

    fn set_flash_latency(&mut self, wait_states: u8);

    fn set_apb1_prescaler(&mut self, prescaler: ApbPrescaler);

    fn set_apb2_prescaler(&mut self, prescaler: ApbPrescaler);

    fn enable_system_clock(&mut self, source: SystemClockSource);
}
