// src/std_serial.rs

//! Adapter from any blocking `std::io` byte stream to the client's transport traits.
//!
//! The stream is expected to be already configured (baud rate, parity, ...)
//! by whatever created it, typically a serial port crate. Reads that time out
//! or would block are reported as `WouldBlock` so the client's own deadline
//! decides when to give up.

use std::io::{self, ErrorKind, Read, Write};
use std::time::{Duration, Instant};

use crate::common::{
    config::SerialConfig,
    hal_traits::{NexStarSerial, NexStarTimer},
};

/// `std::io` stream plus wall clock.
///
/// `open` only records the [`SerialConfig`]; baud rate, parity, data bits,
/// stop bits and handshake are never applied to the stream. Configure the port
/// before wrapping it. Only `timeout` takes effect, through the client.
#[derive(Debug)]
pub struct IoSerial<T> {
    stream: T,
    open: bool,
    config: Option<SerialConfig>,
}

impl<T> IoSerial<T>
where
    T: Read + Write,
{
    pub fn new(stream: T) -> Self {
        IoSerial {
            stream,
            open: false,
            config: None,
        }
    }

    /// Settings passed at the last `open`.
    pub fn config(&self) -> Option<&SerialConfig> {
        self.config.as_ref()
    }

    pub fn get_ref(&self) -> &T {
        &self.stream
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.stream
    }

    pub fn into_inner(self) -> T {
        self.stream
    }

    fn ensure_open(&self) -> io::Result<()> {
        if self.open {
            Ok(())
        } else {
            Err(io::Error::new(ErrorKind::NotConnected, "serial link is closed"))
        }
    }
}

fn is_transient(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::WouldBlock | ErrorKind::TimedOut | ErrorKind::Interrupted
    )
}

fn classify(e: io::Error) -> nb::Error<io::Error> {
    if is_transient(e.kind()) {
        nb::Error::WouldBlock
    } else {
        nb::Error::Other(e)
    }
}

impl<T> NexStarSerial for IoSerial<T>
where
    T: Read + Write,
{
    type Error = io::Error;

    /// Marks the link open and records `config` without touching the stream.
    fn open(&mut self, config: &SerialConfig) -> Result<(), Self::Error> {
        self.config = Some(*config);
        self.open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        if self.open {
            self.open = false;
            self.stream.flush()?;
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn read_byte(&mut self) -> nb::Result<u8, Self::Error> {
        self.ensure_open().map_err(nb::Error::Other)?;
        let mut byte = [0u8; 1];
        match self.stream.read(&mut byte) {
            Ok(1) => Ok(byte[0]),
            // Nothing buffered yet
            Ok(_) => Err(nb::Error::WouldBlock),
            Err(e) => Err(classify(e)),
        }
    }

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        self.ensure_open().map_err(nb::Error::Other)?;
        match self.stream.write(&[byte]) {
            Ok(1) => Ok(()),
            Ok(_) => Err(nb::Error::WouldBlock),
            Err(e) => Err(classify(e)),
        }
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        self.stream.flush().map_err(classify)
    }
}

impl<T> NexStarTimer for IoSerial<T> {
    type Instant = Instant;

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(Duration::from_micros(u64::from(us)));
    }
}
