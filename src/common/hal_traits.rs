// src/common/hal_traits.rs

use super::config::SerialConfig;
use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;

/// A point in time as reported by a [`NexStarTimer`].
pub trait NexStarInstant:
    Copy + Ord + Add<Duration, Output = Self> + Sub<Self, Output = Duration>
{
}

impl<T> NexStarInstant for T where
    T: Copy + Ord + Add<Duration, Output = T> + Sub<T, Output = Duration>
{
}

/// Clock and delay source used to enforce read/write deadlines.
pub trait NexStarTimer {
    type Instant: NexStarInstant;

    /// Current time.
    fn now(&self) -> Self::Instant;

    /// Delay for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);
}

/// Abstraction for the serial link to a hand controller.
///
/// Byte operations are non-blocking in the `nb` style; the client turns them
/// into blocking calls bounded by the configured timeout.
pub trait NexStarSerial {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Acquires the link with the given line settings.
    fn open(&mut self, config: &SerialConfig) -> Result<(), Self::Error>;

    /// Releases the link. Closing an already closed link is not an error.
    fn close(&mut self) -> Result<(), Self::Error>;

    fn is_open(&self) -> bool;

    /// Attempts to read a single byte.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` if no byte is available yet.
    fn read_byte(&mut self) -> nb::Result<u8, Self::Error>;

    /// Attempts to write a single byte.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` if the transmit buffer is full.
    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error>;

    /// Attempts to flush the transmit buffer.
    fn flush(&mut self) -> nb::Result<(), Self::Error>;
}
