//! Seams into the chip HAL.
//!
//! The drivers behind these traits (GPIO, UART, SysTick, clock control) live outside of this
//! crate. Boards only describe *what* to configure and in which order.

mod gpio;
pub use gpio::{Gpio, InputTrigger, InputType, PinState};

mod pin;
pub use pin::{all_distinct, Pin, Port};

mod systick;
pub use systick::{reload_for, CortexMSysTick, SysTick, SYST_RELOAD_MAX};

mod uart;
pub use uart::{usart_divisor, Parity, StopBits, Uart, UartConfig, UartId, WordLength};

#[cfg(test)]
pub(crate) mod mock;
