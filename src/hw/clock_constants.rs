//! Documented frequency limits per chip. Boards check their clock trees against these at
//! compile time.

use fugit::HertzU32 as Hertz;

pub trait PllConstants {
    const M_MIN: u32;
    const M_MAX: u32;
    const N_MIN: u32;
    const N_MAX: u32;

    /// Reference after the `/M` divider
    const VCO_INPUT_MIN: Hertz;
    const VCO_INPUT_MAX: Hertz;

    const VCO_OUTPUT_MIN: Hertz;
    const VCO_OUTPUT_MAX: Hertz;
}

pub trait SystemClockConstants {
    const SYS_CLOCK_FREQUENCY_LIMIT: Hertz;
    const AHB_FREQUENCY_LIMIT: Hertz;
    const APB1_FREQUENCY_LIMIT: Hertz;
    const APB2_FREQUENCY_LIMIT: Hertz;
}

pub trait FlashConstants {
    /// `WAIT_STATE_STEPS[ws]`: highest HCLK in Hz running with `ws` wait states
    const WAIT_STATE_STEPS: &'static [u32];
}
