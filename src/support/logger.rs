use core::{fmt, marker::PhantomData};

use embedded_hal::serial;
use heapless::Deque;

/// What to do with a byte when the tx buffer is full.
pub trait OverflowPolicy {
    const BLOCK_IF_FULL: bool;
}

/// Spin on the UART until there is room again. Nothing is lost.
pub struct BlockIfFull;

impl OverflowPolicy for BlockIfFull {
    const BLOCK_IF_FULL: bool = true;
}

/// Drop the byte and count it.
pub struct DiscardIfFull;

impl OverflowPolicy for DiscardIfFull {
    const BLOCK_IF_FULL: bool = false;
}

//-----------------------------------------------------------------------------

/// Buffered character device on top of a UART.
///
/// Every write first pushes as much of the buffer into the UART as it takes without blocking,
/// so output keeps flowing as long as the application keeps logging. Use [`Self::poll`] from an
/// idle loop or the UART interrupt to drain the rest.
pub struct IoDeviceWrapper<U, P, const N: usize> {
    uart: U,
    buffer: Deque<u8, N>,
    dropped: usize,
    _policy: PhantomData<P>,
}

impl<U, P, const N: usize> IoDeviceWrapper<U, P, N>
where
    U: serial::Write<u8>,
    P: OverflowPolicy,
{
    pub fn new(uart: U) -> Self {
        Self {
            uart,
            buffer: Deque::new(),
            dropped: 0,
            _policy: PhantomData,
        }
    }

    pub fn write(&mut self, byte: u8) {
        self.poll();

        if self.buffer.is_full() {
            if P::BLOCK_IF_FULL {
                self.send_one_blocking();
            } else {
                self.dropped += 1;
                return;
            }
        }

        // room was made above
        self.buffer.push_back(byte).ok();
    }

    pub fn write_bytes(&mut self, data: &[u8]) {
        for &b in data {
            self.write(b);
        }
    }

    /// Move buffered bytes into the UART until it reports busy. Returns bytes sent.
    pub fn poll(&mut self) -> usize {
        let mut sent = 0;
        while let Some(&b) = self.buffer.front() {
            match self.uart.write(b) {
                Ok(()) => {
                    self.buffer.pop_front();
                    sent += 1;
                }
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(_)) => {
                    self.buffer.pop_front();
                    self.dropped += 1;
                }
            }
        }
        sent
    }

    /// Block until everything buffered has left the UART.
    pub fn flush(&mut self) {
        while !self.buffer.is_empty() {
            self.send_one_blocking();
        }
        nb::block!(self.uart.flush()).ok();
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Bytes lost to a full buffer (discard policy) or to UART errors.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn release(self) -> U {
        self.uart
    }

    fn send_one_blocking(&mut self) {
        if let Some(b) = self.buffer.pop_front() {
            if nb::block!(self.uart.write(b)).is_err() {
                warn!("logger: uart tx error, byte dropped");
                self.dropped += 1;
            }
        }
    }
}

impl<U, P, const N: usize> fmt::Write for IoDeviceWrapper<U, P, N>
where
    U: serial::Write<u8>,
    P: OverflowPolicy,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}
