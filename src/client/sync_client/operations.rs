// src/client/sync_client/operations.rs

use super::NexStarClient;
use crate::common::{
    codec::{self, Coordinate, Timestamp, VersionInfo},
    command::Command,
    error::NexStarError,
    hal_traits::{NexStarSerial, NexStarTimer},
    types::{Device, DeviceProbe, Model},
};

/// `J` answers with a raw 1 once alignment is complete.
const ALIGNED: u8 = 1;
/// `L` answers with the ASCII digit '1' while a GOTO is running.
const GOTO_IN_PROGRESS: u8 = b'1';
/// Byte sent and expected back by [`NexStarClient::ping`].
const PING_BYTE: u8 = 1;

impl<IF> NexStarClient<IF>
where
    IF: NexStarSerial + NexStarTimer,
{
    // --- Public Blocking Methods ---

    pub fn get_location(&mut self) -> Result<Coordinate, NexStarError<IF::Error>> {
        let data = self.execute(&Command::GetLocation)?;
        Ok(Coordinate::decode(&codec::fixed::<IF::Error, 8>(&data)?))
    }

    pub fn set_location(&mut self, location: &Coordinate) -> Result<(), NexStarError<IF::Error>> {
        self.execute(&Command::SetLocation(*location))?;
        Ok(())
    }

    /// Reads the controller's date, time, UTC offset and daylight saving flag.
    pub fn get_time(&mut self) -> Result<Timestamp, NexStarError<IF::Error>> {
        let data = self.execute(&Command::GetTime)?;
        Ok(Timestamp::decode(&codec::fixed::<IF::Error, 8>(&data)?))
    }

    /// Sets the controller's clock. Negative offsets are written per
    /// [`ClientConfig::offset_encoding`](crate::common::ClientConfig).
    pub fn set_time(&mut self, time: &Timestamp) -> Result<(), NexStarError<IF::Error>> {
        self.execute(&Command::SetTime(*time))?;
        Ok(())
    }

    /// Hand controller firmware version.
    pub fn get_version(&mut self) -> Result<VersionInfo, NexStarError<IF::Error>> {
        let data = self.execute(&Command::GetVersion)?;
        Ok(VersionInfo::decode(&codec::fixed::<IF::Error, 2>(&data)?))
    }

    /// Firmware version of a sub-device behind the hand controller.
    ///
    /// An uninstalled device shows up as `Timeout` or `LengthMismatch`; use
    /// [`probe_device`](Self::probe_device) to get that as a value instead.
    pub fn get_device_version(
        &mut self,
        device: Device,
    ) -> Result<VersionInfo, NexStarError<IF::Error>> {
        let data = self.execute(&Command::GetDeviceVersion(device))?;
        Ok(VersionInfo::decode(&codec::fixed::<IF::Error, 2>(&data)?))
    }

    /// Like [`get_device_version`](Self::get_device_version), but reports a
    /// device that does not answer as [`DeviceProbe::Absent`].
    ///
    /// Other transport failures are still returned as errors.
    pub fn probe_device(&mut self, device: Device) -> Result<DeviceProbe, NexStarError<IF::Error>> {
        match self.get_device_version(device) {
            Ok(version) => Ok(DeviceProbe::Present(version)),
            Err(e) if e.indicates_absent_device() => {
                wire_debug!(device = device.code(), error = ?e, "device not installed");
                Ok(DeviceProbe::Absent)
            }
            Err(e) => Err(e),
        }
    }

    pub fn get_model(&mut self) -> Result<Model, NexStarError<IF::Error>> {
        Ok(Model::from_code(self.single_byte(&Command::GetModel)?))
    }

    pub fn is_aligned(&mut self) -> Result<bool, NexStarError<IF::Error>> {
        Ok(self.single_byte(&Command::IsAligned)? == ALIGNED)
    }

    pub fn is_goto_in_progress(&mut self) -> Result<bool, NexStarError<IF::Error>> {
        Ok(self.single_byte(&Command::IsGotoInProgress)? == GOTO_IN_PROGRESS)
    }

    /// Sends one byte and returns what the controller echoes back.
    pub fn echo(&mut self, byte: u8) -> Result<u8, NexStarError<IF::Error>> {
        self.single_byte(&Command::Echo(byte))
    }

    pub fn cancel_goto(&mut self) -> Result<(), NexStarError<IF::Error>> {
        self.execute(&Command::CancelGoto)?;
        Ok(())
    }

    /// Checks the link with an echo of `1`.
    pub fn ping(&mut self) -> Result<bool, NexStarError<IF::Error>> {
        Ok(self.echo(PING_BYTE)? == PING_BYTE)
    }

    fn single_byte(&mut self, command: &Command) -> Result<u8, NexStarError<IF::Error>> {
        let data = self.execute(command)?;
        let [byte] = codec::fixed::<IF::Error, 1>(&data)?;
        Ok(byte)
    }
}
