use fugit::HertzU32 as Hertz;

use super::{PllFactors, PllInputRange, PllSource, VoltageScaling};
use crate::support::clocking::{AhbPrescaler, ApbPrescaler};

pub(crate) const XTAL_FREQ: Hertz = Hertz::MHz(16);

pub(crate) const VOLTAGE_SCALING: VoltageScaling = VoltageScaling::Scale0;

// /M *N /P
pub(crate) const PLL_SOURCE: PllSource = PllSource::Hse;
pub(crate) const PLL1: PllFactors = PllFactors {
    range: PllInputRange::MHz1_2,
    pll_m: 8,   //  16 MHz / 8   =   2 MHz
    pll_n: 275, //   2 MHz * 275 = 550 MHz
    pll_p: 1,   // 550 MHz / 1   = 550 MHz
    pll_q: 2,   // 550 MHz / 2   = 275 MHz
    pll_r: 2,   // 550 MHz / 2   = 275 MHz
};

pub(crate) const CORE_DEVIDER: AhbPrescaler = AhbPrescaler::Div1; // D1CPRE
pub(crate) const AHB_DEVIDER: AhbPrescaler = AhbPrescaler::Div2; // HPRE, max. 275MHz

// max. 137.5MHz on Apb clocks
pub(crate) const APB1_DEVIDER: ApbPrescaler = ApbPrescaler::Div2; // D2PPRE1
pub(crate) const APB2_DEVIDER: ApbPrescaler = ApbPrescaler::Div2; // D2PPRE2
pub(crate) const APB3_DEVIDER: ApbPrescaler = ApbPrescaler::Div2; // D1PPRE
pub(crate) const APB4_DEVIDER: ApbPrescaler = ApbPrescaler::Div2; // D3PPRE
