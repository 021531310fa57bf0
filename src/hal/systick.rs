use cortex_m::peripheral::{syst::SystClkSource, SYST};
use fugit::HertzU32 as Hertz;

/// SysTick counter is 24 bit wide
pub const SYST_RELOAD_MAX: u32 = 0x00FF_FFFF;

pub trait SysTick {
    /// Start the periodic tick, interrupt every `reload + 1` core cycles.
    fn start(&mut self, reload: u32);
}

pub const fn reload_for(core: Hertz, rate_hz: u32) -> u32 {
    core.raw() / rate_hz - 1
}

pub struct CortexMSysTick {
    syst: SYST,
}

impl CortexMSysTick {
    pub fn new(syst: SYST) -> Self {
        Self { syst }
    }

    pub fn free(self) -> SYST {
        self.syst
    }
}

impl SysTick for CortexMSysTick {
    fn start(&mut self, reload: u32) {
        self.syst.disable_counter();
        self.syst.set_clock_source(SystClkSource::Core);
        self.syst.set_reload(reload);
        self.syst.clear_current();
        self.syst.enable_interrupt();
        self.syst.enable_counter();
    }
}
