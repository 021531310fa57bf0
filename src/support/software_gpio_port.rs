use crate::hal::{Gpio, Pin, PinState};

/// A handful of unrelated pins driven as one port. The first pin is the most significant bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoftwareGpioPort<const N: usize> {
    pins: [Pin; N],
}

impl<const N: usize> SoftwareGpioPort<N> {
    pub const WIDTH: usize = N;

    pub const fn new(pins: [Pin; N]) -> Self {
        assert!(N <= 16);
        Self { pins }
    }

    pub const fn pins(&self) -> &[Pin; N] {
        &self.pins
    }

    pub const fn mask(&self) -> u16 {
        if N == 16 {
            u16::MAX
        } else {
            (1 << N) - 1
        }
    }

    const fn bit(i: usize) -> u16 {
        1 << (N - 1 - i)
    }

    pub fn set_output<G: Gpio>(&self, gpio: &mut G, state: PinState) {
        for pin in self.pins {
            gpio.set_output(pin, state);
        }
    }

    pub fn write<G: Gpio>(&self, gpio: &mut G, data: u16) {
        for (i, pin) in self.pins.iter().enumerate() {
            gpio.set(*pin, PinState::from(data & Self::bit(i) != 0));
        }
    }

    pub fn read<G: Gpio>(&self, gpio: &mut G) -> u16 {
        self.pins
            .iter()
            .enumerate()
            .filter(|(_, pin)| gpio.read(**pin))
            .fold(0, |acc, (i, _)| acc | Self::bit(i))
    }

    pub fn toggle<G: Gpio>(&self, gpio: &mut G) {
        for pin in self.pins {
            gpio.toggle(pin);
        }
    }
}
