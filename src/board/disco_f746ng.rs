//! STM32F746G-DISCO

use core::convert::Infallible;

use fugit::HertzU32 as Hertz;
use static_assertions::const_assert;

use crate::{
    config,
    hal::{
        all_distinct, reload_for, Gpio, InputTrigger, InputType, Pin, PinState, Port, SysTick,
        Uart, SYST_RELOAD_MAX,
    },
    hw::{
        clock_constants::{FlashConstants, PllConstants, SystemClockConstants},
        stm32f7::{clock_config_216::*, ClockControl, Stm32f746Specs, SystemClockSource},
    },
    support::{
        clocking::{flash_latency, timer_clock, within, ClockConfigProvider, CoreClocks},
        BlockIfFull, IoDeviceWrapper, SoftwareGpioPort,
    },
    Board, Peripherals,
};

/// STM32F7 running at 216MHz from the external 25MHz clock
pub struct SystemClock;

impl SystemClock {
    pub const FREQUENCY: Hertz = PLL.output(XTAL_FREQ);
    pub const AHB: Hertz = Self::FREQUENCY;
    pub const APB1: Hertz = APB1_DEVIDER.apply(Self::FREQUENCY);
    pub const APB2: Hertz = APB2_DEVIDER.apply(Self::FREQUENCY);

    pub const ADC1: Hertz = Self::APB2;
    pub const ADC2: Hertz = Self::APB2;
    pub const ADC3: Hertz = Self::APB2;

    pub const SPI1: Hertz = Self::APB2;
    pub const SPI2: Hertz = Self::APB1;
    pub const SPI3: Hertz = Self::APB1;
    pub const SPI4: Hertz = Self::APB2;

    pub const USART1: Hertz = Self::APB2;
    pub const USART2: Hertz = Self::APB1;
    pub const USART3: Hertz = Self::APB1;
    pub const UART4: Hertz = Self::APB1;
    pub const UART5: Hertz = Self::APB1;
    pub const USART6: Hertz = Self::APB2;
    pub const UART7: Hertz = Self::APB1;
    pub const UART8: Hertz = Self::APB1;

    pub const CAN1: Hertz = Self::APB1;
    pub const CAN2: Hertz = Self::APB1;

    pub const I2C1: Hertz = Self::APB1;
    pub const I2C2: Hertz = Self::APB1;
    pub const I2C3: Hertz = Self::APB1;
    pub const I2C4: Hertz = Self::APB1;

    pub const APB1_TIMER: Hertz = timer_clock(Self::APB1, APB1_DEVIDER);
    pub const APB2_TIMER: Hertz = timer_clock(Self::APB2, APB2_DEVIDER);
    pub const TIMER1: Hertz = Self::APB2_TIMER;
    pub const TIMER2: Hertz = Self::APB1_TIMER;
    pub const TIMER3: Hertz = Self::APB1_TIMER;
    pub const TIMER4: Hertz = Self::APB1_TIMER;
    pub const TIMER5: Hertz = Self::APB1_TIMER;
    pub const TIMER6: Hertz = Self::APB1_TIMER;
    pub const TIMER7: Hertz = Self::APB1_TIMER;
    pub const TIMER8: Hertz = Self::APB2_TIMER;
    pub const TIMER10: Hertz = Self::APB2_TIMER;
    pub const TIMER11: Hertz = Self::APB2_TIMER;
    pub const TIMER12: Hertz = Self::APB1_TIMER;
    pub const TIMER13: Hertz = Self::APB1_TIMER;
    pub const TIMER14: Hertz = Self::APB1_TIMER;

    pub const FLASH_LATENCY: u8 =
        flash_latency(Self::FREQUENCY, Stm32f746Specs::WAIT_STATE_STEPS);
}

impl<R: ClockControl> ClockConfigProvider<R> for SystemClock {
    fn core_frequency() -> Hertz {
        Self::FREQUENCY
    }

    fn enable(rcc: &mut R) -> Result<CoreClocks, Infallible> {
        rcc.enable_external_clock(); // 25 MHz
        rcc.enable_pll(PLL_SOURCE, &PLL);
        rcc.set_flash_latency(Self::FLASH_LATENCY);
        rcc.set_apb1_prescaler(APB1_DEVIDER);
        rcc.set_apb2_prescaler(APB2_DEVIDER);
        rcc.enable_system_clock(SystemClockSource::Pll);

        Ok(CoreClocks::new(Self::FREQUENCY))
    }
}

const_assert!(Stm32f746Specs::valid_pll_p(PLL.p as u32));
const_assert!(PLL.m as u32 >= Stm32f746Specs::M_MIN && PLL.m as u32 <= Stm32f746Specs::M_MAX);
const_assert!(PLL.n as u32 >= Stm32f746Specs::N_MIN && PLL.n as u32 <= Stm32f746Specs::N_MAX);
const_assert!(within(
    PLL.vco_input(XTAL_FREQ),
    Stm32f746Specs::VCO_INPUT_MIN,
    Stm32f746Specs::VCO_INPUT_MAX
));
const_assert!(within(
    PLL.vco_output(XTAL_FREQ),
    Stm32f746Specs::VCO_OUTPUT_MIN,
    Stm32f746Specs::VCO_OUTPUT_MAX
));
const_assert!(SystemClock::FREQUENCY.raw() <= Stm32f746Specs::SYS_CLOCK_FREQUENCY_LIMIT.raw());
const_assert!(SystemClock::AHB.raw() <= Stm32f746Specs::AHB_FREQUENCY_LIMIT.raw());
const_assert!(SystemClock::APB1.raw() <= Stm32f746Specs::APB1_FREQUENCY_LIMIT.raw());
const_assert!(SystemClock::APB2.raw() <= Stm32f746Specs::APB2_FREQUENCY_LIMIT.raw());
const_assert!((SystemClock::FLASH_LATENCY as usize) < Stm32f746Specs::WAIT_STATE_STEPS.len());
const_assert!(reload_for(SystemClock::FREQUENCY, config::SYSTICK_RATE_HZ) <= SYST_RELOAD_MAX);

//-----------------------------------------------------------------------------

pub const BUTTON: Pin = Pin::new(Port::I, 11); // User Button
pub const LED_D13: Pin = Pin::new(Port::I, 1); // User LED 1 (Arduino D13)

pub const LEDS: SoftwareGpioPort<1> = SoftwareGpioPort::new([LED_D13]);

pub mod stlink {
    use crate::hal::{Pin, Port, UartConfig, UartId};

    use super::SystemClock;

    pub const TX: Pin = Pin::new(Port::A, 9);
    pub const RX: Pin = Pin::new(Port::B, 7);
    pub const UART: UartId = UartId::Usart1;

    pub const BAUDRATE: u32 = 115_200;
    pub const CONFIG: UartConfig = UartConfig::new(SystemClock::USART1, BAUDRATE);
}

const ROLES: [Pin; 4] = [BUTTON, LED_D13, stlink::TX, stlink::RX];
const_assert!(all_distinct(&ROLES));
const_assert!(stlink::CONFIG.is_valid());

/// Arduino Uno R3 footprint. These are connector positions, not roles: `D13` is the user LED.
pub mod arduino {
    use crate::hal::{Pin, Port};

    pub const A0: Pin = Pin::new(Port::A, 0);
    pub const A1: Pin = Pin::new(Port::F, 10);
    pub const A2: Pin = Pin::new(Port::F, 9);
    pub const A3: Pin = Pin::new(Port::F, 8);
    pub const A4: Pin = Pin::new(Port::F, 7);
    pub const A5: Pin = Pin::new(Port::F, 6);

    pub const D0: Pin = Pin::new(Port::C, 7);
    pub const D1: Pin = Pin::new(Port::C, 6);
    pub const D2: Pin = Pin::new(Port::G, 6);
    pub const D3: Pin = Pin::new(Port::B, 4);
    pub const D4: Pin = Pin::new(Port::G, 7);
    pub const D5: Pin = Pin::new(Port::A, 8);
    pub const D6: Pin = Pin::new(Port::H, 6);
    pub const D7: Pin = Pin::new(Port::I, 3);
    pub const D8: Pin = Pin::new(Port::I, 2);
    pub const D9: Pin = Pin::new(Port::A, 15);
    pub const D10: Pin = Pin::new(Port::I, 0);
    pub const D11: Pin = Pin::new(Port::B, 15);
    pub const D12: Pin = Pin::new(Port::B, 14);
    pub const D13: Pin = Pin::new(Port::I, 1);
    pub const D14: Pin = Pin::new(Port::B, 9);
    pub const D15: Pin = Pin::new(Port::B, 8);

    pub const ANALOG: [Pin; 6] = [A0, A1, A2, A3, A4, A5];
    pub const DIGITAL: [Pin; 16] = [
        D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12, D13, D14, D15,
    ];

    static_assertions::const_assert!(crate::hal::all_distinct(&[
        A0, A1, A2, A3, A4, A5, D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12, D13, D14,
        D15,
    ]));
}

//-----------------------------------------------------------------------------

pub type LoggerDevice<U> = IoDeviceWrapper<U, BlockIfFull, { config::LOGGER_BUFFER_SIZE }>;

pub fn initialize<R, S, U, G>(p: Peripherals<R, S, U, G>) -> Board<R, S, LoggerDevice<U>, G>
where
    R: ClockControl,
    S: SysTick,
    U: Uart,
    G: Gpio,
{
    let Peripherals {
        mut rcc,
        mut systick,
        mut uart,
        mut gpio,
    } = p;

    let clocks = super::start_core::<SystemClock, _, _>(&mut rcc, &mut systick);

    super::start_debug_uart(&mut uart, stlink::TX, stlink::RX, &stlink::CONFIG);

    LEDS.set_output(&mut gpio, PinState::Low);

    gpio.set_input(BUTTON, InputType::Floating);
    gpio.set_input_trigger(BUTTON, InputTrigger::RisingEdge);
    gpio.enable_external_interrupt(BUTTON);

    info!("DISCO-F746NG ready");

    Board {
        clocks,
        rcc,
        systick,
        logger: LoggerDevice::new(uart),
        gpio,
    }
}
