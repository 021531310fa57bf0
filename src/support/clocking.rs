use core::convert::Infallible;

use fugit::HertzU32 as Hertz;

/// Clock configuration of a board: which factors go into the clock controller `R`, and what
/// comes out of it.
pub trait ClockConfigProvider<R: ?Sized> {
    fn core_frequency() -> Hertz;

    /// Apply the configuration. The hardware is assumed to accept it, so this always succeeds.
    fn enable(rcc: &mut R) -> Result<CoreClocks, Infallible>;
}

//-----------------------------------------------------------------------------

/// Core clock bookkeeping, handed to anything that needs to time itself against the CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoreClocks {
    fcpu: Hertz,
    fcpu_khz: u32,
    fcpu_mhz: u16,
    ns_per_loop: u16,
}

impl CoreClocks {
    pub const fn new(fcpu: Hertz) -> Self {
        let mhz = fcpu.raw() / 1_000_000;
        Self {
            fcpu,
            fcpu_khz: fcpu.raw() / 1_000,
            fcpu_mhz: mhz as u16,
            // round(1000 / MHz)
            ns_per_loop: ((1_000 + mhz / 2) / mhz) as u16,
        }
    }

    pub const fn fcpu(&self) -> Hertz {
        self.fcpu
    }

    pub const fn fcpu_khz(&self) -> u32 {
        self.fcpu_khz
    }

    pub const fn fcpu_mhz(&self) -> u16 {
        self.fcpu_mhz
    }

    pub const fn ns_per_loop(&self) -> u16 {
        self.ns_per_loop
    }
}

//-----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AhbPrescaler {
    Div1,
    Div2,
    Div4,
    Div8,
    Div16,
    Div64,
    Div128,
    Div256,
    Div512,
}

impl AhbPrescaler {
    pub const fn divisor(self) -> u32 {
        match self {
            AhbPrescaler::Div1 => 1,
            AhbPrescaler::Div2 => 2,
            AhbPrescaler::Div4 => 4,
            AhbPrescaler::Div8 => 8,
            AhbPrescaler::Div16 => 16,
            AhbPrescaler::Div64 => 64,
            AhbPrescaler::Div128 => 128,
            AhbPrescaler::Div256 => 256,
            AhbPrescaler::Div512 => 512,
        }
    }

    pub const fn apply(self, input: Hertz) -> Hertz {
        Hertz::from_raw(input.raw() / self.divisor())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ApbPrescaler {
    Div1,
    Div2,
    Div4,
    Div8,
    Div16,
}

impl ApbPrescaler {
    pub const fn divisor(self) -> u32 {
        match self {
            ApbPrescaler::Div1 => 1,
            ApbPrescaler::Div2 => 2,
            ApbPrescaler::Div4 => 4,
            ApbPrescaler::Div8 => 8,
            ApbPrescaler::Div16 => 16,
        }
    }

    pub const fn apply(self, input: Hertz) -> Hertz {
        Hertz::from_raw(input.raw() / self.divisor())
    }
}

//-----------------------------------------------------------------------------

// /M *N /P
pub const fn pll_output(input: Hertz, m: u32, n: u32, p: u32) -> Hertz {
    Hertz::from_raw(input.raw() / m * n / p)
}

// stm32_cube: if APB devider > 1, timers freq APB*2
pub const fn timer_clock(apb: Hertz, prescaler: ApbPrescaler) -> Hertz {
    match prescaler {
        ApbPrescaler::Div1 => apb,
        _ => Hertz::from_raw(apb.raw() * 2),
    }
}

/// Wait states for `hclk`. `steps[ws]` is the highest frequency allowed with `ws` wait states.
pub const fn flash_latency(hclk: Hertz, steps: &[u32]) -> u8 {
    let mut ws = 0;
    while ws < steps.len() {
        if hclk.raw() <= steps[ws] {
            return ws as u8;
        }
        ws += 1;
    }
    steps.len() as u8
}

pub const fn within(value: Hertz, min: Hertz, max: Hertz) -> bool {
    value.raw() >= min.raw() && value.raw() <= max.raw()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pll_arithmetic() {
        assert_eq!(pll_output(Hertz::MHz(25), 25, 432, 2), Hertz::MHz(216));
        assert_eq!(pll_output(Hertz::MHz(16), 8, 275, 1), Hertz::MHz(550));
    }

    #[test]
    fn prescalers() {
        assert_eq!(AhbPrescaler::Div512.divisor(), 512);
        assert_eq!(ApbPrescaler::Div8.apply(Hertz::MHz(216)), Hertz::MHz(27));
        assert_eq!(
            ApbPrescaler::Div2.apply(Hertz::MHz(275)),
            Hertz::from_raw(137_500_000)
        );
    }

    #[test]
    fn timers_double_behind_divided_bus() {
        assert_eq!(timer_clock(Hertz::MHz(27), ApbPrescaler::Div8), Hertz::MHz(54));
        assert_eq!(timer_clock(Hertz::MHz(27), ApbPrescaler::Div1), Hertz::MHz(27));
    }

    #[test]
    fn wait_states_from_table() {
        const STEPS: &[u32] = &[30_000_000, 60_000_000, 90_000_000];

        assert_eq!(flash_latency(Hertz::MHz(16), STEPS), 0);
        assert_eq!(flash_latency(Hertz::MHz(30), STEPS), 0);
        assert_eq!(flash_latency(Hertz::MHz(31), STEPS), 1);
        assert_eq!(flash_latency(Hertz::MHz(90), STEPS), 2);
        assert_eq!(flash_latency(Hertz::MHz(91), STEPS), 3);
    }

    #[test]
    fn core_clocks_bookkeeping() {
        let c = CoreClocks::new(Hertz::MHz(216));
        assert_eq!(c.fcpu_khz(), 216_000);
        assert_eq!(c.fcpu_mhz(), 216);
        assert_eq!(c.ns_per_loop(), 5);

        let c = CoreClocks::new(Hertz::MHz(550));
        assert_eq!(c.fcpu_mhz(), 550);
        assert_eq!(c.ns_per_loop(), 2);
    }
}
