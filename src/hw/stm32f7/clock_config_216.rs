use fugit::HertzU32 as Hertz;

use super::{PllFactors, PllSource};
use crate::support::clocking::ApbPrescaler;

pub(crate) const XTAL_FREQ: Hertz = Hertz::MHz(25);

// /M *N /P
pub(crate) const PLL_SOURCE: PllSource = PllSource::ExternalClock;
pub(crate) const PLL: PllFactors = PllFactors {
    m: 25,  // 25MHz / 25 -> 1MHz
    n: 432, // 1MHz * 432 -> 432MHz
    p: 2,   // 432MHz / 2 -> 216MHz
};

// AHB / 4 = 54MHz > 45MHz limit
pub(crate) const APB1_DEVIDER: ApbPrescaler = ApbPrescaler::Div8;
// AHB / 2 = 108MHz > 90MHz limit
pub(crate) const APB2_DEVIDER: ApbPrescaler = ApbPrescaler::Div4;
