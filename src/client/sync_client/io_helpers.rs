// src/client/sync_client/io_helpers.rs

use super::NexStarClient;
use crate::common::{
    command::{ResponseBuffer, RESPONSE_TERMINATOR},
    error::NexStarError,
    hal_traits::{NexStarSerial, NexStarTimer},
    timing,
};
use core::time::Duration;
use nb::Result as NbResult;

// Implementation block for I/O related helpers
impl<IF> NexStarClient<IF>
where
    IF: NexStarSerial + NexStarTimer,
{
    /// Executes a non-blocking I/O operation (`f`) repeatedly until it
    /// stops returning `WouldBlock`, or fails with `Timeout` once `deadline` passes.
    pub(super) fn execute_blocking_io_until<FN, T>(
        &mut self,
        deadline: IF::Instant,
        mut f: FN,
    ) -> Result<T, NexStarError<IF::Error>>
    where
        FN: FnMut(&mut IF) -> NbResult<T, IF::Error>,
    {
        loop {
            match f(&mut self.interface) {
                Ok(result) => return Ok(result),
                Err(nb::Error::WouldBlock) => {
                    if self.interface.now() >= deadline {
                        return Err(NexStarError::Timeout);
                    }
                    self.interface.delay_us(timing::POLL_INTERVAL_US);
                }
                Err(nb::Error::Other(e)) => return Err(NexStarError::Io(e)),
            }
        }
    }

    pub(super) fn execute_blocking_io_with_timeout<FN, T>(
        &mut self,
        timeout: Duration,
        f: FN,
    ) -> Result<T, NexStarError<IF::Error>>
    where
        FN: FnMut(&mut IF) -> NbResult<T, IF::Error>,
    {
        let deadline = self.interface.now() + timeout;
        self.execute_blocking_io_until(deadline, f)
    }

    /// Writes the whole frame as one logical write under a single deadline, then flushes.
    pub(super) fn send_command_bytes(
        &mut self,
        cmd_bytes: &[u8],
    ) -> Result<(), NexStarError<IF::Error>> {
        let deadline = self.interface.now() + self.config.serial.timeout;

        for byte in cmd_bytes {
            self.execute_blocking_io_until(deadline, |iface| iface.write_byte(*byte))?;
        }
        self.execute_blocking_io_until(deadline, |iface| iface.flush())?;

        Ok(())
    }

    /// Reads up to the `#` terminator and checks the body length.
    ///
    /// Each byte gets the full configured timeout. Bytes beyond the buffer's
    /// capacity are drained and counted, so the terminator is always consumed
    /// before a length mismatch is reported.
    pub(super) fn read_response(
        &mut self,
        expected: usize,
    ) -> Result<ResponseBuffer, NexStarError<IF::Error>> {
        let timeout = self.config.serial.timeout;
        let mut buffer = ResponseBuffer::new();
        let mut received = 0usize;

        loop {
            let byte = self.execute_blocking_io_with_timeout(timeout, |iface| iface.read_byte())?;
            wire_trace!(byte, "read");

            if byte == RESPONSE_TERMINATOR {
                break;
            }
            received += 1;
            // Overflow only happens on a mismatch, which is reported below.
            let _ = buffer.try_push(byte);
        }

        if received != expected {
            wire_debug!(received, expected, "response length mismatch");
            return Err(NexStarError::LengthMismatch { received, expected });
        }

        Ok(buffer)
    }
}
