pub use embedded_hal::digital::v2::PinState;

use super::Pin;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputType {
    Floating,
    PullUp,
    PullDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputTrigger {
    RisingEdge,
    FallingEdge,
    BothEdges,
}

pub trait Gpio {
    /// Switch `pin` to push-pull output, driving `state` first.
    fn set_output(&mut self, pin: Pin, state: PinState);

    fn set(&mut self, pin: Pin, state: PinState);

    fn toggle(&mut self, pin: Pin);

    fn set_input(&mut self, pin: Pin, input: InputType);

    fn read(&mut self, pin: Pin) -> bool;

    fn set_input_trigger(&mut self, pin: Pin, trigger: InputTrigger);

    fn enable_external_interrupt(&mut self, pin: Pin);
}
