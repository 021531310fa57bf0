use embedded_hal::serial;
use fugit::HertzU32 as Hertz;

use super::Pin;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartId {
    Usart1,
    Usart2,
    Usart3,
    Uart4,
    Uart5,
    Usart6,
    Uart7,
    Uart8,
    Uart9,
    Usart10,
    LpUart1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    Disabled,
    Even,
    Odd,
}

/// Frame length including the parity bit, as the USART `M` bits count it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WordLength {
    Bit7,
    Bit8,
    Bit9,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    Stop1,
    Stop2,
}

/// USART BRR value for oversampling by 16, rounded to nearest.
pub const fn usart_divisor(kernel_clock: Hertz, baudrate: u32) -> u32 {
    (kernel_clock.raw() + baudrate / 2) / baudrate
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    pub kernel_clock: Hertz,
    pub baudrate: u32,
    pub brr: u32,
    pub parity: Parity,
    pub word_length: WordLength,
    pub stop_bits: StopBits,
}

impl UartConfig {
    /// 8N1 at `baudrate`, divisor precomputed from the peripheral kernel clock.
    pub const fn new(kernel_clock: Hertz, baudrate: u32) -> Self {
        Self {
            kernel_clock,
            baudrate,
            brr: usart_divisor(kernel_clock, baudrate),
            parity: Parity::Disabled,
            word_length: WordLength::Bit8,
            stop_bits: StopBits::Stop1,
        }
    }

    pub const fn parity(self, parity: Parity) -> Self {
        Self { parity, ..self }
    }

    pub const fn word_length(self, word_length: WordLength) -> Self {
        Self {
            word_length,
            ..self
        }
    }

    pub const fn stop_bits(self, stop_bits: StopBits) -> Self {
        Self { stop_bits, ..self }
    }

    pub const fn actual_baudrate(&self) -> u32 {
        self.kernel_clock.raw() / self.brr
    }

    pub const fn baudrate_error_permille(&self) -> u32 {
        let actual = self.actual_baudrate();
        let diff = if actual > self.baudrate {
            actual - self.baudrate
        } else {
            self.baudrate - actual
        };
        diff * 1000 / self.baudrate
    }

    /// Divisor fits the 16-bit BRR and the resulting baudrate is within tolerance.
    pub const fn is_valid(&self) -> bool {
        self.brr >= config::USART_OVERSAMPLING
            && self.brr <= u16::MAX as u32
            && self.baudrate_error_permille() <= config::BAUDRATE_TOLERANCE_PERMILLE
    }
}

/// UART as the board sees it: pin muxing and line setup on top of the byte-level `serial::Write`.
pub trait Uart: serial::Write<u8> {
    fn connect(&mut self, tx: Pin, rx: Pin);

    fn initialize(&mut self, config: &UartConfig);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisor_rounds_to_nearest() {
        // 54 MHz / 115200 = 468.75
        assert_eq!(usart_divisor(Hertz::MHz(54), 115_200), 469);
        // 137.5 MHz / 38400 = 3580.7
        assert_eq!(usart_divisor(Hertz::from_raw(137_500_000), 38_400), 3581);
    }

    #[test]
    fn builder_keeps_divisor() {
        let cfg = UartConfig::new(Hertz::MHz(54), 115_200)
            .parity(Parity::Even)
            .word_length(WordLength::Bit9)
            .stop_bits(StopBits::Stop2);

        assert_eq!(cfg.brr, 469);
        assert_eq!(cfg.parity, Parity::Even);
        assert_eq!(cfg.word_length, WordLength::Bit9);
        assert_eq!(cfg.stop_bits, StopBits::Stop2);
    }

    #[test]
    fn default_frame_is_8n1() {
        let cfg = UartConfig::new(Hertz::MHz(54), 115_200);

        assert_eq!(cfg.parity, Parity::Disabled);
        assert_eq!(cfg.word_length, WordLength::Bit8);
        assert_eq!(cfg.stop_bits, StopBits::Stop1);
    }

    #[test]
    fn tolerance_check() {
        let good = UartConfig::new(Hertz::MHz(54), 115_200);
        assert_eq!(good.actual_baudrate(), 115_138);
        assert_eq!(good.baudrate_error_permille(), 0);
        assert!(good.is_valid());

        // 1 MHz / 115200 = 8.68 -> 9 -> 111111 Bd, 3.5% off, and below oversampling minimum
        let bad = UartConfig::new(Hertz::MHz(1), 115_200);
        assert_eq!(bad.baudrate_error_permille(), 35);
        assert!(!bad.is_valid());
    }
}
