// src/client/sync_client/mock.rs

//! Scripted transport shared by the client tests.

use crate::common::{
    config::SerialConfig,
    hal_traits::{NexStarSerial, NexStarTimer},
    RESPONSE_TERMINATOR,
};
use core::time::Duration;
use nb::Result as NbResult;

// --- Mock Instant ---
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct MockInstant(pub u64);

impl core::ops::Add<Duration> for MockInstant {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        MockInstant(self.0.saturating_add(rhs.as_micros() as u64))
    }
}

impl core::ops::Sub<MockInstant> for MockInstant {
    type Output = Duration;
    fn sub(self, rhs: MockInstant) -> Duration {
        Duration::from_micros(self.0.saturating_sub(rhs.0))
    }
}

// --- Mock Comm Error ---
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct MockCommError;

// --- Mock Interface ---
#[derive(Debug, Default)]
pub(crate) struct MockInterface {
    pub open: bool,
    pub open_calls: u32,
    pub close_calls: u32,
    pub opened_with: Option<SerialConfig>,
    pub fail_open: bool,
    pub fail_close: bool,
    pub current_time_us: u64,
    pub read_queue: Vec<u8>,
    pub read_pos: usize,
    /// Fail with an I/O error once this many bytes have been read.
    pub read_error_at: Option<usize>,
    pub write_log: Vec<u8>,
    /// Never accept written bytes.
    pub write_stalled: bool,
    pub flush_calls: u32,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport the caller already opened.
    pub fn opened() -> Self {
        MockInterface {
            open: true,
            ..Self::default()
        }
    }

    /// Appends raw bytes to the read stream.
    pub fn stage_read_data(&mut self, data: &[u8]) {
        self.read_queue.extend_from_slice(data);
    }

    /// Appends a response body followed by the `#` terminator.
    pub fn stage_response(&mut self, body: &[u8]) {
        self.stage_read_data(body);
        self.read_queue.push(RESPONSE_TERMINATOR);
    }

    pub fn unread(&self) -> &[u8] {
        &self.read_queue[self.read_pos..]
    }

    fn advance_time(&mut self, us: u64) {
        self.current_time_us = self.current_time_us.saturating_add(us);
    }
}

impl NexStarTimer for MockInterface {
    type Instant = MockInstant;
    fn now(&self) -> Self::Instant {
        MockInstant(self.current_time_us)
    }
    fn delay_us(&mut self, us: u32) {
        self.advance_time(us as u64);
    }
}

impl NexStarSerial for MockInterface {
    type Error = MockCommError;

    fn open(&mut self, config: &SerialConfig) -> Result<(), Self::Error> {
        self.open_calls += 1;
        if self.fail_open {
            return Err(MockCommError);
        }
        self.open = true;
        self.opened_with = Some(*config);
        Ok(())
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        self.close_calls += 1;
        if self.fail_close {
            return Err(MockCommError);
        }
        self.open = false;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn read_byte(&mut self) -> NbResult<u8, Self::Error> {
        if self.read_error_at == Some(self.read_pos) {
            return Err(nb::Error::Other(MockCommError));
        }
        match self.read_queue.get(self.read_pos) {
            Some(byte) => {
                self.read_pos += 1;
                Ok(*byte)
            }
            None => Err(nb::Error::WouldBlock),
        }
    }

    fn write_byte(&mut self, byte: u8) -> NbResult<(), Self::Error> {
        if self.write_stalled {
            return Err(nb::Error::WouldBlock);
        }
        self.write_log.push(byte);
        Ok(())
    }

    fn flush(&mut self) -> NbResult<(), Self::Error> {
        self.flush_calls += 1;
        Ok(())
    }
}
