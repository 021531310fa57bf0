use fugit::HertzU32 as Hertz;

use crate::support::clocking::{AhbPrescaler, ApbPrescaler};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VoltageScaling {
    /// Required above 520MHz
    Scale0,
    Scale1,
    Scale2,
    Scale3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PllSource {
    Hsi,
    Csi,
    Hse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemClockSource {
    Hsi,
    Csi,
    Hse,
    Pll1P,
}

/// PLLxRGE: the band the reference (after `/M`) falls into
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PllInputRange {
    MHz1_2,
    MHz2_4,
    MHz4_8,
    MHz8_16,
}

impl PllInputRange {
    pub const fn contains(self, reference: Hertz) -> bool {
        let (min, max) = match self {
            PllInputRange::MHz1_2 => (1_000_000, 2_000_000),
            PllInputRange::MHz2_4 => (2_000_000, 4_000_000),
            PllInputRange::MHz4_8 => (4_000_000, 8_000_000),
            PllInputRange::MHz8_16 => (8_000_000, 16_000_000),
        };
        reference.raw() >= min && reference.raw() <= max
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PllFactors {
    pub range: PllInputRange,
    pub pll_m: u8,
    pub pll_n: u16,
    pub pll_p: u8,
    pub pll_q: u8,
    pub pll_r: u8,
}

impl PllFactors {
    pub const fn vco_input(&self, input: Hertz) -> Hertz {
        Hertz::from_raw(input.raw() / self.pll_m as u32)
    }

    pub const fn vco_output(&self, input: Hertz) -> Hertz {
        Hertz::from_raw(self.vco_input(input).raw() * self.pll_n as u32)
    }

    pub const fn p_output(&self, input: Hertz) -> Hertz {
        Hertz::from_raw(self.vco_output(input).raw() / self.pll_p as u32)
    }

    pub const fn q_output(&self, input: Hertz) -> Hertz {
        Hertz::from_raw(self.vco_output(input).raw() / self.pll_q as u32)
    }

    pub const fn r_output(&self, input: Hertz) -> Hertz {
        Hertz::from_raw(self.vco_output(input).raw() / self.pll_r as u32)
    }
}

/// STM32H7 RCC, PWR and flash interface, as far as board bring-up touches it.
pub trait Rcc {
    fn set_voltage_scaling(&mut self, scaling: VoltageScaling);

    fn enable_external_crystal(&mut self);

    fn enable_pll1(&mut self, source: PllSource, factors: &PllFactors);

    fn set_flash_latency(&mut self, wait_states: u8);

    fn set_ahb_prescaler(&mut self, prescaler: AhbPrescaler);

    fn set_apb1_prescaler(&mut self, prescaler: ApbPrescaler);

    fn set_apb2_prescaler(&mut self, prescaler: ApbPrescaler);

    fn set_apb3_prescaler(&mut self, prescaler: ApbPrescaler);

    fn set_apb4_prescaler(&mut self, prescaler: ApbPrescaler);

    fn enable_system_clock(&mut self, source: SystemClockSource);
}
