// src/client/sync_client/transaction.rs

use super::NexStarClient;
use crate::common::{
    command::{Command, ResponseBuffer},
    error::NexStarError,
    hal_traits::{NexStarSerial, NexStarTimer},
};

impl<IF> NexStarClient<IF>
where
    IF: NexStarSerial + NexStarTimer,
{
    /// Executes a single command-response exchange.
    ///
    /// Writes the opcode and payload, reads up to the `#` terminator and checks
    /// the body against the command's expected length. There are no retries:
    /// any failure is returned as is and the exchange is abandoned.
    pub fn execute(&mut self, command: &Command) -> Result<ResponseBuffer, NexStarError<IF::Error>> {
        // 1. Format command
        let frame = command.format_into::<IF::Error>(self.config.offset_encoding)?;
        wire_trace!(opcode = %(command.opcode() as char), bytes = ?frame.as_slice(), "write");

        // 2. Send Command
        self.send_command_bytes(&frame)?;

        // 3. Read Response
        self.read_response(command.expected_response_len())
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::super::mock::{MockCommError, MockInterface};
    use super::*;
    use crate::common::{
        codec::{Coordinate, Timestamp},
        config::{ClientConfig, OffsetEncoding},
        types::Device,
    };

    #[test]
    fn test_execute_writes_opcode_then_payload() {
        let mut mock = MockInterface::new();
        mock.stage_response(&[1, 6]);
        let mut client = NexStarClient::new(mock).unwrap();

        let body = client.execute(&Command::GetDeviceVersion(Device::Gps)).unwrap();
        assert_eq!(body.as_slice(), &[1, 6]);
        assert_eq!(client.interface.write_log, [b'P', 1, 176, 254, 0, 0, 0, 2]);
    }

    #[test]
    fn test_execute_ack_only_command() {
        let mut mock = MockInterface::new();
        mock.stage_response(&[]);
        let mut client = NexStarClient::new(mock).unwrap();

        let body = client.execute(&Command::CancelGoto).unwrap();
        assert!(body.is_empty());
        assert_eq!(client.interface.write_log, [b'M']);
    }

    #[test]
    fn test_execute_length_mismatch_never_returns_bytes() {
        for received in [0usize, 1, 7, 9] {
            let mut mock = MockInterface::new();
            mock.stage_response(&[0x30; 9][..received]);
            let mut client = NexStarClient::new(mock).unwrap();

            let result = client.execute(&Command::GetLocation);
            match result {
                Err(NexStarError::LengthMismatch { received: r, expected: 8 }) => {
                    assert_eq!(r, received)
                }
                other => panic!("expected length mismatch, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_execute_sequential_commands_stay_framed() {
        let mut mock = MockInterface::new();
        mock.stage_response(&[1]);
        mock.stage_response(&[4, 21]);
        let mut client = NexStarClient::new(mock).unwrap();

        assert_eq!(client.execute(&Command::Echo(1)).unwrap().as_slice(), &[1]);
        assert_eq!(client.execute(&Command::GetVersion).unwrap().as_slice(), &[4, 21]);
        assert_eq!(client.interface.write_log, [b'K', 1, b'V']);
    }

    #[test]
    fn test_execute_uses_configured_offset_encoding() {
        let time = Timestamp::new(2024, 6, 15, 14, 30, 0).unwrap().with_utc_offset(-5);
        let mut mock = MockInterface::new();
        mock.stage_response(&[]);
        let config = ClientConfig::default().with_offset_encoding(OffsetEncoding::Legacy);
        let mut client = NexStarClient::with_config(mock, config).unwrap();

        client.execute(&Command::SetTime(time)).unwrap();
        assert_eq!(client.interface.write_log, [b'H', 14, 30, 0, 6, 15, 24, 5, 0]);
    }

    #[test]
    fn test_execute_read_error_after_full_write() {
        let mut mock = MockInterface::new();
        mock.stage_response(&[]);
        mock.read_error_at = Some(0);
        let mut client = NexStarClient::new(mock).unwrap();

        let location = Coordinate::new(1.267401, 103.8145683).unwrap();
        let result = client.execute(&Command::SetLocation(location));
        assert!(matches!(result, Err(NexStarError::Io(MockCommError))));
        assert_eq!(client.interface.write_log.len(), 9);
    }
}
