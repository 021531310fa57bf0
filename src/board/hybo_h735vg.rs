//! STM32H735VG on the ITFS lidar board
//!
//! There are no on-board buttons or LEDs. Button and LEDs are assigned to pins the ITFS hardware
//! leaves free, so firmware using them still builds and runs:
//!
//! * unused MCU pins: PA1, PA2, PA11, PC11, PC12
//! * AUX/USER connector GPIO: PD12 (ITFS GP0), PD15 (ITFS GP1)

use core::convert::Infallible;

use fugit::HertzU32 as Hertz;
use static_assertions::const_assert;

use crate::{
    config,
    hal::{
        all_distinct, reload_for, Gpio, InputType, Pin, PinState, Port, SysTick, Uart,
        SYST_RELOAD_MAX,
    },
    hw::{
        clock_constants::{FlashConstants, PllConstants, SystemClockConstants},
        stm32h7::{clock_config_550::*, Rcc, Stm32h735Specs, SystemClockSource},
    },
    support::{
        clocking::{flash_latency, timer_clock, within, ClockConfigProvider, CoreClocks},
        BlockIfFull, IoDeviceWrapper, SoftwareGpioPort,
    },
    Board, Peripherals,
};

/// STM32H735VG running at 550MHz from PLL clock generated from 16 MHz HSE
pub struct SystemClock;

impl SystemClock {
    // Max 550MHz
    pub const SYS_CLK: Hertz = PLL1.p_output(XTAL_FREQ);
    // Max 550MHz
    pub const HCLK: Hertz = CORE_DEVIDER.apply(Self::SYS_CLK);
    pub const FREQUENCY: Hertz = Self::HCLK;
    // Max 275MHz
    pub const AHB: Hertz = AHB_DEVIDER.apply(Self::HCLK);
    pub const AHB1: Hertz = Self::AHB;
    pub const AHB2: Hertz = Self::AHB;
    pub const AHB3: Hertz = Self::AHB;
    pub const AHB4: Hertz = Self::AHB;
    // Max 137.5MHz
    pub const APB1: Hertz = APB1_DEVIDER.apply(Self::AHB);
    pub const APB2: Hertz = APB2_DEVIDER.apply(Self::AHB);
    pub const APB3: Hertz = APB3_DEVIDER.apply(Self::AHB);
    pub const APB4: Hertz = APB4_DEVIDER.apply(Self::AHB);

    pub const PLL1_Q: Hertz = PLL1.q_output(XTAL_FREQ);
    pub const PLL1_R: Hertz = PLL1.r_output(XTAL_FREQ);

    pub const ADC1: Hertz = Self::AHB1;
    pub const ADC2: Hertz = Self::AHB1;
    pub const ADC3: Hertz = Self::AHB4;

    pub const DAC1: Hertz = Self::APB1;

    pub const SPI1: Hertz = Self::APB2;
    pub const SPI2: Hertz = Self::APB1;
    pub const SPI3: Hertz = Self::APB1;
    pub const SPI4: Hertz = Self::APB2;
    pub const SPI5: Hertz = Self::APB2;
    pub const SPI6: Hertz = Self::APB4;

    pub const USART1: Hertz = Self::APB2;
    pub const USART2: Hertz = Self::APB1;
    pub const USART3: Hertz = Self::APB1;
    pub const UART4: Hertz = Self::APB1;
    pub const UART5: Hertz = Self::APB1;
    pub const USART6: Hertz = Self::APB2;
    pub const UART7: Hertz = Self::APB1;
    pub const UART8: Hertz = Self::APB1;
    pub const UART9: Hertz = Self::APB2;
    pub const USART10: Hertz = Self::APB2;

    pub const LPUART1: Hertz = Self::APB4;

    pub const CAN1: Hertz = Self::APB1;
    pub const CAN2: Hertz = Self::APB1;

    pub const I2C1: Hertz = Self::APB1;
    pub const I2C2: Hertz = Self::APB1;
    pub const I2C3: Hertz = Self::APB1;
    pub const I2C4: Hertz = Self::APB4;
    pub const I2C5: Hertz = Self::APB1;

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
    pub const TIMER12: Hertz = Self::APB1_TIMER;
    pub const TIMER13: Hertz = Self::APB1_TIMER;
    pub const TIMER14: Hertz = Self::APB1_TIMER;
    pub const TIMER15: Hertz = Self::APB2_TIMER;
    pub const TIMER16: Hertz = Self::APB2_TIMER;
    pub const TIMER17: Hertz = Self::APB2_TIMER;
    pub const TIMER23: Hertz = Self::APB1_TIMER;
    pub const TIMER24: Hertz = Self::APB1_TIMER;

    pub const USB: Hertz = Self::AHB1;

    // flash runs from the AXI clock
    pub const FLASH_LATENCY: u8 = flash_latency(Self::AHB, Stm32h735Specs::WAIT_STATE_STEPS);
}

impl<R: Rcc> ClockConfigProvider<R> for SystemClock {
    fn core_frequency() -> Hertz {
        Self::FREQUENCY
    }

    fn enable(rcc: &mut R) -> Result<CoreClocks, Infallible> {
        // Switch core supply voltage to maximum level
        // Required for running at 550 MHz
        rcc.set_voltage_scaling(VOLTAGE_SCALING);

        rcc.enable_external_crystal(); // 16 MHz
        rcc.enable_pll1(PLL_SOURCE, &PLL1);
        rcc.set_flash_latency(Self::FLASH_LATENCY);

        rcc.set_ahb_prescaler(AHB_DEVIDER);
        rcc.set_apb1_prescaler(APB1_DEVIDER);
        rcc.set_apb2_prescaler(APB2_DEVIDER);
        rcc.set_apb3_prescaler(APB3_DEVIDER);
        rcc.set_apb4_prescaler(APB4_DEVIDER);

        rcc.enable_system_clock(SystemClockSource::Pll1P);

        Ok(CoreClocks::new(Self::FREQUENCY))
    }
}

const_assert!(Stm32h735Specs::valid_pll1_p(PLL1.pll_p as u32));
const_assert!(
    PLL1.pll_m as u32 >= Stm32h735Specs::M_MIN && PLL1.pll_m as u32 <= Stm32h735Specs::M_MAX
);
const_assert!(
    PLL1.pll_n as u32 >= Stm32h735Specs::N_MIN && PLL1.pll_n as u32 <= Stm32h735Specs::N_MAX
);
const_assert!(PLL1.range.contains(PLL1.vco_input(XTAL_FREQ)));
const_assert!(within(
    PLL1.vco_input(XTAL_FREQ),
    Stm32h735Specs::VCO_INPUT_MIN,
    Stm32h735Specs::VCO_INPUT_MAX
));
const_assert!(within(
    PLL1.vco_output(XTAL_FREQ),
    Stm32h735Specs::VCO_OUTPUT_MIN,
    Stm32h735Specs::VCO_OUTPUT_MAX
));
const_assert!(SystemClock::SYS_CLK.raw() <= Stm32h735Specs::SYS_CLOCK_FREQUENCY_LIMIT.raw());
const_assert!(SystemClock::HCLK.raw() <= Stm32h735Specs::HCLK_FREQUENCY_LIMIT.raw());
const_assert!(SystemClock::AHB.raw() <= Stm32h735Specs::AHB_FREQUENCY_LIMIT.raw());
const_assert!(SystemClock::APB1.raw() <= Stm32h735Specs::APB1_FREQUENCY_LIMIT.raw());
const_assert!(SystemClock::APB2.raw() <= Stm32h735Specs::APB2_FREQUENCY_LIMIT.raw());
const_assert!(SystemClock::APB3.raw() <= Stm32h735Specs::APB3_FREQUENCY_LIMIT.raw());
const_assert!(SystemClock::APB4.raw() <= Stm32h735Specs::APB4_FREQUENCY_LIMIT.raw());
const_assert!((SystemClock::FLASH_LATENCY as usize) < Stm32h735Specs::WAIT_STATE_STEPS.len());
const_assert!(reload_for(SystemClock::FREQUENCY, config::SYSTICK_RATE_HZ) <= SYST_RELOAD_MAX);

//-----------------------------------------------------------------------------

pub const BUTTON: Pin = Pin::new(Port::D, 12);

pub const LED_GREEN: Pin = Pin::new(Port::D, 15);
pub const LED_YELLOW: Pin = Pin::new(Port::A, 1);
pub const LED_RED: Pin = Pin::new(Port::A, 2);
pub const LEDS: SoftwareGpioPort<3> = SoftwareGpioPort::new([LED_RED, LED_YELLOW, LED_GREEN]);

pub mod stlink {
    use crate::hal::{Parity, Pin, Port, UartConfig, UartId, WordLength};

    use super::SystemClock;

    pub const TX: Pin = Pin::new(Port::D, 8);
    pub const RX: Pin = Pin::new(Port::D, 9);
    pub const UART: UartId = UartId::Usart3;

    pub const BAUDRATE: u32 = 38_400;
    pub const CONFIG: UartConfig = UartConfig::new(SystemClock::USART3, BAUDRATE)
        .parity(Parity::Even)
        .word_length(WordLength::Bit9);
}

const ROLES: [Pin; 6] = [BUTTON, LED_GREEN, LED_YELLOW, LED_RED, stlink::TX, stlink::RX];
const_assert!(all_distinct(&ROLES));
const_assert!(stlink::CONFIG.is_valid());

//-----------------------------------------------------------------------------

pub type LoggerDevice<U> = IoDeviceWrapper<U, BlockIfFull, { config::LOGGER_BUFFER_SIZE }>;

pub fn initialize<R, S, U, G>(p: Peripherals<R, S, U, G>) -> Board<R, S, LoggerDevice<U>, G>
where
    R: Rcc,
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

    gpio.set_output(LED_GREEN, PinState::Low);
    gpio.set_output(LED_YELLOW, PinState::Low);
    gpio.set_output(LED_RED, PinState::Low);

    gpio.set_input(BUTTON, InputType::Floating);

    info!("HYBO-H735VG ready");

    Board {
        clocks,
        rcc,
        systick,
        logger: LoggerDevice::new(uart),
        gpio,
    }
}
