//! STM32H723/733/725/735 specifications

use fugit::HertzU32 as Hertz;

use crate::hw::clock_constants::{FlashConstants, PllConstants, SystemClockConstants};

pub enum Stm32h735Specs {}

impl Stm32h735Specs {
    /// rcc_hclk, the core domain clock after D1CPRE
    pub const HCLK_FREQUENCY_LIMIT: Hertz = Hertz::MHz(550);
    pub const APB3_FREQUENCY_LIMIT: Hertz = Hertz::from_raw(137_500_000);
    pub const APB4_FREQUENCY_LIMIT: Hertz = Hertz::from_raw(137_500_000);

    pub const P_MAX: u32 = 128;

    /// DIVP1 accepts 1 or an even value
    pub const fn valid_pll1_p(p: u32) -> bool {
        p >= 1 && p <= Self::P_MAX && (p == 1 || p % 2 == 0)
    }
}

// wide VCO range
impl PllConstants for Stm32h735Specs {
    const M_MIN: u32 = 1;
    const M_MAX: u32 = 63;
    const N_MIN: u32 = 4;
    const N_MAX: u32 = 512;

    const VCO_INPUT_MIN: Hertz = Hertz::MHz(1);
    const VCO_INPUT_MAX: Hertz = Hertz::MHz(16);

    const VCO_OUTPUT_MIN: Hertz = Hertz::MHz(192);
    const VCO_OUTPUT_MAX: Hertz = Hertz::MHz(836);
}

// VOS0
impl SystemClockConstants for Stm32h735Specs {
    const SYS_CLOCK_FREQUENCY_LIMIT: Hertz = Hertz::MHz(550);
    const AHB_FREQUENCY_LIMIT: Hertz = Hertz::MHz(275);
    const APB1_FREQUENCY_LIMIT: Hertz = Hertz::from_raw(137_500_000);
    const APB2_FREQUENCY_LIMIT: Hertz = Hertz::from_raw(137_500_000);
}

// VOS0, AXI clock
impl FlashConstants for Stm32h735Specs {
    const WAIT_STATE_STEPS: &'static [u32] = &[70_000_000, 140_000_000, 210_000_000, 275_000_000];
}
