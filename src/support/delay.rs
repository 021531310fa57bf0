use cortex_m::asm;
use embedded_hal::blocking::delay::{DelayMs, DelayUs};

use super::clocking::CoreClocks;

/// Busy-wait delay calibrated from the core clock handed over by the board.
#[derive(Clone, Copy, Debug)]
pub struct LoopDelay {
    clocks: CoreClocks,
}

impl LoopDelay {
    pub const fn new(clocks: CoreClocks) -> Self {
        Self { clocks }
    }

    pub const fn clocks(&self) -> &CoreClocks {
        &self.clocks
    }

    pub const fn cycles_for_us(&self, us: u32) -> u32 {
        (self.clocks.fcpu_mhz() as u32).saturating_mul(us)
    }

    // rounded up, never shorter than asked for
    pub const fn cycles_for_ns(&self, ns: u32) -> u32 {
        let per_loop = self.clocks.ns_per_loop() as u32;
        ns.saturating_add(per_loop - 1) / per_loop
    }

    pub fn delay_ns(&mut self, ns: u32) {
        asm::delay(self.cycles_for_ns(ns));
    }
}

impl DelayUs<u32> for LoopDelay {
    fn delay_us(&mut self, us: u32) {
        asm::delay(self.cycles_for_us(us));
    }
}

impl DelayMs<u32> for LoopDelay {
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}
