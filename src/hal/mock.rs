//! Recording test doubles for the HAL seams. Every call lands in one shared [`Journal`], so
//! tests can check the order in which a board touches the hardware.

use std::{
    cell::{Cell, RefCell},
    convert::Infallible,
    rc::Rc,
    vec::Vec,
};

use embedded_hal::serial;

use super::{Gpio, InputTrigger, InputType, Pin, PinState, Port, SysTick, Uart, UartConfig};
use crate::support::clocking::ApbPrescaler;

#[cfg(feature = "stm32h7xx")]
use crate::support::clocking::AhbPrescaler;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GpioCall {
    SetOutput(Pin, PinState),
    Set(Pin, PinState),
    Toggle(Pin),
    SetInput(Pin, InputType),
    Read(Pin),
    SetInputTrigger(Pin, InputTrigger),
    EnableExternalInterrupt(Pin),
}

#[cfg(feature = "stm32f7xx")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum F7Call {
    EnableExternalClock,
    EnablePll(crate::hw::stm32f7::PllSource, crate::hw::stm32f7::PllFactors),
    SetFlashLatency(u8),
    SetApb1Prescaler(ApbPrescaler),
    SetApb2Prescaler(ApbPrescaler),
    EnableSystemClock(crate::hw::stm32f7::SystemClockSource),
}

#[cfg(feature = "stm32h7xx")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum H7Call {
    SetVoltageScaling(crate::hw::stm32h7::VoltageScaling),
    EnableExternalCrystal,
    EnablePll1(crate::hw::stm32h7::PllSource, crate::hw::stm32h7::PllFactors),
    SetFlashLatency(u8),
    SetAhbPrescaler(AhbPrescaler),
    SetApb1Prescaler(ApbPrescaler),
    SetApb2Prescaler(ApbPrescaler),
    SetApb3Prescaler(ApbPrescaler),
    SetApb4Prescaler(ApbPrescaler),
    EnableSystemClock(crate::hw::stm32h7::SystemClockSource),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    #[cfg(feature = "stm32f7xx")]
    F7(F7Call),
    #[cfg(feature = "stm32h7xx")]
    H7(H7Call),
    SysTickStart(u32),
    UartConnect { tx: Pin, rx: Pin },
    UartInitialize(UartConfig),
    Gpio(GpioCall),
}

impl Call {
    pub fn is_clock(&self) -> bool {
        match self {
            #[cfg(feature = "stm32f7xx")]
            Call::F7(_) => true,
            #[cfg(feature = "stm32h7xx")]
            Call::H7(_) => true,
            _ => false,
        }
    }
}

#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Call>>>);

impl Journal {
    pub fn record(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }
}

//-----------------------------------------------------------------------------

pub struct MockRcc {
    journal: Journal,
}

impl MockRcc {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

#[cfg(feature = "stm32f7xx")]
impl crate::hw::stm32f7::ClockControl for MockRcc {
    fn enable_external_clock(&mut self) {
        self.journal.record(Call::F7(F7Call::EnableExternalClock));
    }

    fn enable_pll(
        &mut self,
        source: crate::hw::stm32f7::PllSource,
        factors: &crate::hw::stm32f7::PllFactors,
    ) {
        self.journal
            .record(Call::F7(F7Call::EnablePll(source, *factors)));
    }

    fn set_flash_latency(&mut self, wait_states: u8) {
        self.journal
            .record(Call::F7(F7Call::SetFlashLatency(wait_states)));
    }

    fn set_apb1_prescaler(&mut self, prescaler: ApbPrescaler) {
        self.journal
            .record(Call::F7(F7Call::SetApb1Prescaler(prescaler)));
    }

    fn set_apb2_prescaler(&mut self, prescaler: ApbPrescaler) {
        self.journal
            .record(Call::F7(F7Call::SetApb2Prescaler(prescaler)));
    }

    fn enable_system_clock(&mut self, source: crate::hw::stm32f7::SystemClockSource) {
        self.journal
            .record(Call::F7(F7Call::EnableSystemClock(source)));
    }
}

#[cfg(feature = "stm32h7xx")]
impl crate::hw::stm32h7::Rcc for MockRcc {
    fn set_voltage_scaling(&mut self, scaling: crate::hw::stm32h7::VoltageScaling) {
        self.journal
            .record(Call::H7(H7Call::SetVoltageScaling(scaling)));
    }

    fn enable_external_crystal(&mut self) {
        self.journal.record(Call::H7(H7Call::EnableExternalCrystal));
    }

    fn enable_pll1(
        &mut self,
        source: crate::hw::stm32h7::PllSource,
        factors: &crate::hw::stm32h7::PllFactors,
    ) {
        self.journal
            .record(Call::H7(H7Call::EnablePll1(source, *factors)));
    }

    fn set_flash_latency(&mut self, wait_states: u8) {
        self.journal
            .record(Call::H7(H7Call::SetFlashLatency(wait_states)));
    }

    fn set_ahb_prescaler(&mut self, prescaler: AhbPrescaler) {
        self.journal
            .record(Call::H7(H7Call::SetAhbPrescaler(prescaler)));
    }

    fn set_apb1_prescaler(&mut self, prescaler: ApbPrescaler) {
        self.journal
            .record(Call::H7(H7Call::SetApb1Prescaler(prescaler)));
    }

    fn set_apb2_prescaler(&mut self, prescaler: ApbPrescaler) {
        self.journal
            .record(Call::H7(H7Call::SetApb2Prescaler(prescaler)));
    }

    fn set_apb3_prescaler(&mut self, prescaler: ApbPrescaler) {
        self.journal
            .record(Call::H7(H7Call::SetApb3Prescaler(prescaler)));
    }

    fn set_apb4_prescaler(&mut self, prescaler: ApbPrescaler) {
        self.journal
            .record(Call::H7(H7Call::SetApb4Prescaler(prescaler)));
    }

    fn enable_system_clock(&mut self, source: crate::hw::stm32h7::SystemClockSource) {
        self.journal
            .record(Call::H7(H7Call::EnableSystemClock(source)));
    }
}

//-----------------------------------------------------------------------------

pub struct MockSysTick {
    journal: Journal,
}

impl MockSysTick {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl SysTick for MockSysTick {
    fn start(&mut self, reload: u32) {
        self.journal.record(Call::SysTickStart(reload));
    }
}

//-----------------------------------------------------------------------------

/// Transmitted bytes go to [`MockUart::sent`], not to the journal.
pub struct MockUart {
    journal: Journal,
    sent: Rc<RefCell<Vec<u8>>>,
    stalled: Rc<Cell<bool>>,
    busy_every_other: bool,
    busy_now: bool,
}

impl MockUart {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            sent: Rc::default(),
            stalled: Rc::default(),
            busy_every_other: false,
            busy_now: false,
        }
    }

    /// Every second `write` reports `WouldBlock`, starting with the first.
    pub fn busy_every_other_write(mut self) -> Self {
        self.busy_every_other = true;
        self.busy_now = true;
        self
    }

    /// `WouldBlock` on every write until the stall handle is cleared.
    pub fn stalled(self) -> Self {
        self.stalled.set(true);
        self
    }

    pub fn stall_handle(&self) -> Rc<Cell<bool>> {
        self.stalled.clone()
    }

    pub fn sent(&self) -> Rc<RefCell<Vec<u8>>> {
        self.sent.clone()
    }
}

impl serial::Write<u8> for MockUart {
    type Error = Infallible;

    fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
        if self.stalled.get() {
            return Err(nb::Error::WouldBlock);
        }
        if self.busy_every_other {
            let busy = self.busy_now;
            self.busy_now = !busy;
            if busy {
                return Err(nb::Error::WouldBlock);
            }
        }
        self.sent.borrow_mut().push(word);
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        Ok(())
    }
}

impl Uart for MockUart {
    fn connect(&mut self, tx: Pin, rx: Pin) {
        self.journal.record(Call::UartConnect { tx, rx });
    }

    fn initialize(&mut self, config: &UartConfig) {
        self.journal.record(Call::UartInitialize(*config));
    }
}

//-----------------------------------------------------------------------------

/// Keeps an output latch per port so reads see what was written.
pub struct MockGpio {
    journal: Journal,
    latch: [u16; Port::COUNT],
}

impl MockGpio {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            latch: [0; Port::COUNT],
        }
    }

    fn drive(&mut self, pin: Pin, state: PinState) {
        let port = &mut self.latch[pin.port() as usize];
        match state {
            PinState::High => *port |= pin.mask(),
            PinState::Low => *port &= !pin.mask(),
        }
    }
}

impl Gpio for MockGpio {
    fn set_output(&mut self, pin: Pin, state: PinState) {
        self.journal
            .record(Call::Gpio(GpioCall::SetOutput(pin, state)));
        self.drive(pin, state);
    }

    fn set(&mut self, pin: Pin, state: PinState) {
        self.journal.record(Call::Gpio(GpioCall::Set(pin, state)));
        self.drive(pin, state);
    }

    fn toggle(&mut self, pin: Pin) {
        self.journal.record(Call::Gpio(GpioCall::Toggle(pin)));
        self.latch[pin.port() as usize] ^= pin.mask();
    }

    fn set_input(&mut self, pin: Pin, input: InputType) {
        self.journal
            .record(Call::Gpio(GpioCall::SetInput(pin, input)));
    }

    fn read(&mut self, pin: Pin) -> bool {
        self.journal.record(Call::Gpio(GpioCall::Read(pin)));
        self.latch[pin.port() as usize] & pin.mask() != 0
    }

    fn set_input_trigger(&mut self, pin: Pin, trigger: InputTrigger) {
        self.journal
            .record(Call::Gpio(GpioCall::SetInputTrigger(pin, trigger)));
    }

    fn enable_external_interrupt(&mut self, pin: Pin) {
        self.journal
            .record(Call::Gpio(GpioCall::EnableExternalInterrupt(pin)));
    }
}
