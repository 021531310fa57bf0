//! STM32F74x/75x specifications

use fugit::HertzU32 as Hertz;

use crate::hw::clock_constants::{FlashConstants, PllConstants, SystemClockConstants};

pub enum Stm32f746Specs {}

impl Stm32f746Specs {
    /// PLLP can only divide by 2, 4, 6 or 8
    pub const fn valid_pll_p(p: u32) -> bool {
        matches!(p, 2 | 4 | 6 | 8)
    }
}

impl PllConstants for Stm32f746Specs {
    const M_MIN: u32 = 2;
    const M_MAX: u32 = 63;
    const N_MIN: u32 = 50;
    const N_MAX: u32 = 432;

    const VCO_INPUT_MIN: Hertz = Hertz::MHz(1);
    const VCO_INPUT_MAX: Hertz = Hertz::MHz(2);

    const VCO_OUTPUT_MIN: Hertz = Hertz::MHz(100);
    const VCO_OUTPUT_MAX: Hertz = Hertz::MHz(432);
}

impl SystemClockConstants for Stm32f746Specs {
    const SYS_CLOCK_FREQUENCY_LIMIT: Hertz = Hertz::MHz(216);
    const AHB_FREQUENCY_LIMIT: Hertz = Hertz::MHz(216);
    const APB1_FREQUENCY_LIMIT: Hertz = Hertz::MHz(45);
    const APB2_FREQUENCY_LIMIT: Hertz = Hertz::MHz(90);
}

// 2.7 V - 3.6 V supply
impl FlashConstants for Stm32f746Specs {
    const WAIT_STATE_STEPS: &'static [u32] = &[
        30_000_000,
        60_000_000,
        90_000_000,
        120_000_000,
        150_000_000,
        180_000_000,
        210_000_000,
        216_000_000,
    ];
}
