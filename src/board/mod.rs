//! Board definitions: clock tree, pin roles and the bring-up sequence.

use crate::{
    config,
    hal::{reload_for, Pin, SysTick, Uart, UartConfig},
    support::clocking::{ClockConfigProvider, CoreClocks},
};

#[cfg(feature = "disco-f746ng")]
pub mod disco_f746ng;

#[cfg(feature = "hybo-h735vg")]
pub mod hybo_h735vg;

/// Everything `initialize` takes ownership of.
pub struct Peripherals<R, S, U, G> {
    pub rcc: R,
    pub systick: S,
    pub uart: U,
    pub gpio: G,
}

/// A brought-up board. `clocks` is what timing code downstream must be given.
pub struct Board<R, S, L, G> {
    pub clocks: CoreClocks,
    pub rcc: R,
    pub systick: S,
    pub logger: L,
    pub gpio: G,
}

//-----------------------------------------------------------------------------

// clocks first, then the tick that depends on them
#[allow(dead_code)]
pub(crate) fn start_core<C, R, S>(rcc: &mut R, systick: &mut S) -> CoreClocks
where
    C: ClockConfigProvider<R>,
    S: SysTick,
{
    let clocks = C::enable(rcc).unwrap_or_else(|e| match e {});
    info!("Clocks: fcpu = {} kHz", clocks.fcpu_khz());

    let reload = reload_for(clocks.fcpu(), config::SYSTICK_RATE_HZ);
    systick.start(reload);
    debug!("SysTick: reload = {}", reload);

    clocks
}

#[allow(dead_code)]
pub(crate) fn start_debug_uart<U: Uart>(uart: &mut U, tx: Pin, rx: Pin, config: &UartConfig) {
    uart.connect(tx, rx);
    uart.initialize(config);
    info!(
        "Debug UART: {} Bd, BRR = {}",
        config.baudrate, config.brr
    );
}
