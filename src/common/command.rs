//! NexStar command definitions.
//!
//! Each command is one ASCII opcode followed by an optional fixed-size binary
//! payload. Every reply ends with `#`; the expected number of bytes before it
//! is fixed per command.

use arrayvec::ArrayVec;
use core::fmt::Debug;

use super::{
    codec::{Coordinate, Timestamp, VersionInfo},
    config::OffsetEncoding,
    error::NexStarError,
    types::Device,
};

/// Terminates every response from the hand controller.
pub const RESPONSE_TERMINATOR: u8 = b'#';

/// Opcode plus the longest payload (8 bytes for `W` and `H`).
pub const MAX_COMMAND_LEN: usize = 9;

/// Longest response body (8 bytes for `w` and `h`).
pub const MAX_RESPONSE_LEN: usize = 8;

/// Fixed-capacity frame of bytes to write for one command.
pub type CommandBuffer = ArrayVec<u8, MAX_COMMAND_LEN>;

/// Fixed-capacity response body, terminator excluded.
pub type ResponseBuffer = ArrayVec<u8, MAX_RESPONSE_LEN>;

/// Prefix and suffix around the device code in a `P` version query.
const DEVICE_VERSION_PREFIX: u8 = 1;
const DEVICE_VERSION_SUFFIX: [u8; 4] = [254, 0, 0, 2];

/// Represents a NexStar hand controller command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Get Location (`w`).
    GetLocation,
    /// Set Location (`W` + 8 DMS bytes).
    SetLocation(Coordinate),
    /// Get Time (`h`).
    GetTime,
    /// Set Time (`H` + 8 bytes, daylight saving flag last).
    SetTime(Timestamp),
    /// Hand controller version (`V`).
    GetVersion,
    /// Sub-device version via passthrough (`P` 1 dev 254 0 0 0 2).
    GetDeviceVersion(Device),
    /// Get Model (`m`).
    GetModel,
    /// Is Alignment Complete (`J`).
    IsAligned,
    /// Is GOTO in Progress (`L`).
    IsGotoInProgress,
    /// Echo (`K` + byte).
    Echo(u8),
    /// Cancel GOTO (`M`).
    CancelGoto,
}

impl Command {
    /// The ASCII opcode that starts the command on the wire.
    pub const fn opcode(&self) -> u8 {
        match self {
            Command::GetLocation => b'w',
            Command::SetLocation(_) => b'W',
            Command::GetTime => b'h',
            Command::SetTime(_) => b'H',
            Command::GetVersion => b'V',
            Command::GetDeviceVersion(_) => b'P',
            Command::GetModel => b'm',
            Command::IsAligned => b'J',
            Command::IsGotoInProgress => b'L',
            Command::Echo(_) => b'K',
            Command::CancelGoto => b'M',
        }
    }

    /// Number of bytes the controller sends before the `#` terminator.
    pub const fn expected_response_len(&self) -> usize {
        match self {
            Command::GetLocation => Coordinate::WIRE_LEN,
            Command::GetTime => Timestamp::WIRE_LEN,
            Command::GetVersion | Command::GetDeviceVersion(_) => VersionInfo::WIRE_LEN,
            Command::GetModel
            | Command::IsAligned
            | Command::IsGotoInProgress
            | Command::Echo(_) => 1,
            Command::SetLocation(_) | Command::SetTime(_) | Command::CancelGoto => 0,
        }
    }

    /// Formats opcode and payload into a frame ready to be written.
    ///
    /// Every command defined here fits [`MAX_COMMAND_LEN`]; `CommandTooLong`
    /// only guards the frame buffer against a longer command being added.
    pub fn format_into<E: Debug>(
        &self,
        offset_encoding: OffsetEncoding,
    ) -> Result<CommandBuffer, NexStarError<E>> {
        let mut buffer = CommandBuffer::new();
        push_all(&mut buffer, &[self.opcode()])?;

        match self {
            Command::SetLocation(coordinate) => push_all(&mut buffer, &coordinate.encode())?,
            Command::SetTime(timestamp) => {
                push_all(&mut buffer, &timestamp.encode(offset_encoding))?
            }
            Command::GetDeviceVersion(device) => {
                push_all(&mut buffer, &[DEVICE_VERSION_PREFIX, device.code()])?;
                push_all(&mut buffer, &DEVICE_VERSION_SUFFIX)?;
            }
            Command::Echo(byte) => push_all(&mut buffer, &[*byte])?,
            Command::GetLocation
            | Command::GetTime
            | Command::GetVersion
            | Command::GetModel
            | Command::IsAligned
            | Command::IsGotoInProgress
            | Command::CancelGoto => {}
        }

        Ok(buffer)
    }
}

fn push_all<E: Debug>(buffer: &mut CommandBuffer, bytes: &[u8]) -> Result<(), NexStarError<E>> {
    buffer
        .try_extend_from_slice(bytes)
        .map_err(|_| NexStarError::CommandTooLong {
            needed: buffer.len() + bytes.len(),
            capacity: buffer.capacity(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(cmd: Command) -> CommandBuffer {
        cmd.format_into::<()>(OffsetEncoding::TwosComplement).unwrap()
    }

    #[test]
    fn test_opcodes_and_lengths() {
        let location = Coordinate::new(1.267401, 103.8145683).unwrap();
        let time = Timestamp::new(2024, 6, 15, 14, 30, 0).unwrap();
        let table: [(Command, u8, usize); 11] = [
            (Command::GetLocation, b'w', 8),
            (Command::SetLocation(location), b'W', 0),
            (Command::GetTime, b'h', 8),
            (Command::SetTime(time), b'H', 0),
            (Command::GetVersion, b'V', 2),
            (Command::GetDeviceVersion(Device::Gps), b'P', 2),
            (Command::GetModel, b'm', 1),
            (Command::IsAligned, b'J', 1),
            (Command::IsGotoInProgress, b'L', 1),
            (Command::Echo(1), b'K', 1),
            (Command::CancelGoto, b'M', 0),
        ];
        for (cmd, opcode, len) in table {
            assert_eq!(cmd.opcode(), opcode, "opcode for {:?}", cmd);
            assert_eq!(cmd.expected_response_len(), len, "length for {:?}", cmd);
            assert!(cmd.expected_response_len() <= MAX_RESPONSE_LEN);
            assert_eq!(frame(cmd)[0], opcode);
        }
    }

    #[test]
    fn test_bare_commands_have_no_payload() {
        for cmd in [
            Command::GetLocation,
            Command::GetTime,
            Command::GetVersion,
            Command::GetModel,
            Command::IsAligned,
            Command::IsGotoInProgress,
            Command::CancelGoto,
        ] {
            assert_eq!(frame(cmd).len(), 1);
        }
    }

    #[test]
    fn test_device_version_payload() {
        assert_eq!(
            frame(Command::GetDeviceVersion(Device::Gps)).as_slice(),
            &[b'P', 1, 176, 254, 0, 0, 0, 2]
        );
        assert_eq!(
            frame(Command::GetDeviceVersion(Device::AzmRaMotor)).as_slice(),
            &[b'P', 1, 16, 254, 0, 0, 0, 2]
        );
    }

    #[test]
    fn test_set_location_payload() {
        let location = Coordinate::new(1.267401, 103.8145683).unwrap();
        assert_eq!(
            frame(Command::SetLocation(location)).as_slice(),
            &[b'W', 1, 16, 2, 0, 103, 48, 52, 0]
        );
    }

    #[test]
    fn test_set_time_payload_uses_offset_encoding() {
        let time = Timestamp::new(2024, 6, 15, 14, 30, 0)
            .unwrap()
            .with_utc_offset(-5)
            .with_daylight_saving(true);
        assert_eq!(
            frame(Command::SetTime(time)).as_slice(),
            &[b'H', 14, 30, 0, 6, 15, 24, 251, 1]
        );
        let legacy = Command::SetTime(time)
            .format_into::<()>(OffsetEncoding::Legacy)
            .unwrap();
        assert_eq!(legacy.as_slice(), &[b'H', 14, 30, 0, 6, 15, 24, 5, 1]);
    }

    #[test]
    fn test_echo_payload() {
        assert_eq!(frame(Command::Echo(0x42)).as_slice(), &[b'K', 0x42]);
    }

    #[test]
    fn test_push_all_overflow() {
        let mut buffer = CommandBuffer::new();
        push_all::<()>(&mut buffer, &[0; MAX_COMMAND_LEN]).unwrap();
        let result = push_all::<()>(&mut buffer, &[0]);
        assert!(matches!(
            result,
            Err(NexStarError::CommandTooLong { needed: 10, capacity: 9 })
        ));
    }

    #[test]
    fn test_every_command_fits_frame() {
        let location = Coordinate::new(-90.0, -180.0).unwrap();
        let time = Timestamp::new(2255, 12, 31, 23, 59, 59).unwrap().with_utc_offset(-128);
        for encoding in [OffsetEncoding::TwosComplement, OffsetEncoding::Legacy] {
            for cmd in [Command::SetLocation(location), Command::SetTime(time)] {
                let bytes = cmd.format_into::<()>(encoding).unwrap();
                assert_eq!(bytes.len(), MAX_COMMAND_LEN, "frame for {:?}", cmd);
            }
        }
        for device in Device::ALL {
            assert_eq!(frame(Command::GetDeviceVersion(device)).len(), 8);
        }
    }
}
