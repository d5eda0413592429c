// src/common/types.rs

use core::fmt;

use super::codec::VersionInfo;

/// Sub-devices reachable through the hand controller's `P` passthrough command.
///
/// Not every unit is fitted to every mount; see [`DeviceProbe`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Device {
    /// Azimuth / right ascension motor controller.
    AzmRaMotor,
    /// Altitude / declination motor controller.
    AltDecMotor,
    Gps,
    /// Real-time clock.
    Rtc,
    /// A device code this crate has no name for.
    Unrecognized(u8),
}

impl Device {
    pub const AZM_RA_MOTOR_CODE: u8 = 16;
    pub const ALT_DEC_MOTOR_CODE: u8 = 17;
    pub const GPS_CODE: u8 = 176;
    pub const RTC_CODE: u8 = 178;

    /// Every named device, in passthrough code order.
    pub const ALL: [Device; 4] = [Device::AzmRaMotor, Device::AltDecMotor, Device::Gps, Device::Rtc];

    pub const fn from_code(code: u8) -> Self {
        match code {
            Self::AZM_RA_MOTOR_CODE => Device::AzmRaMotor,
            Self::ALT_DEC_MOTOR_CODE => Device::AltDecMotor,
            Self::GPS_CODE => Device::Gps,
            Self::RTC_CODE => Device::Rtc,
            other => Device::Unrecognized(other),
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Device::AzmRaMotor => Self::AZM_RA_MOTOR_CODE,
            Device::AltDecMotor => Self::ALT_DEC_MOTOR_CODE,
            Device::Gps => Self::GPS_CODE,
            Device::Rtc => Self::RTC_CODE,
            Device::Unrecognized(code) => code,
        }
    }
}

impl From<u8> for Device {
    fn from(code: u8) -> Self {
        Device::from_code(code)
    }
}

impl From<Device> for u8 {
    fn from(device: Device) -> Self {
        device.code()
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::AzmRaMotor => f.write_str("AZM/RA Motor"),
            Device::AltDecMotor => f.write_str("ALT/DEC Motor"),
            Device::Gps => f.write_str("GPS"),
            Device::Rtc => f.write_str("RTC"),
            Device::Unrecognized(code) => write!(f, "Unknown device ({})", code),
        }
    }
}

/// Mount / hand controller model reported by the `m` command.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Model {
    Gps,
    ISeries,
    ISeriesSe,
    Cge,
    AdvancedGt,
    Slt,
    Cpc,
    Gt,
    Se4,
    Se68,
    /// A model byte this crate has no name for.
    Unrecognized(u8),
}

impl Model {
    /// Every named model.
    pub const ALL: [Model; 10] = [
        Model::Gps,
        Model::ISeries,
        Model::ISeriesSe,
        Model::Cge,
        Model::AdvancedGt,
        Model::Slt,
        Model::Cpc,
        Model::Gt,
        Model::Se4,
        Model::Se68,
    ];

    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => Model::Gps,
            3 => Model::ISeries,
            4 => Model::ISeriesSe,
            5 => Model::Cge,
            6 => Model::AdvancedGt,
            7 => Model::Slt,
            9 => Model::Cpc,
            10 => Model::Gt,
            11 => Model::Se4,
            12 => Model::Se68,
            other => Model::Unrecognized(other),
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Model::Gps => 1,
            Model::ISeries => 3,
            Model::ISeriesSe => 4,
            Model::Cge => 5,
            Model::AdvancedGt => 6,
            Model::Slt => 7,
            Model::Cpc => 9,
            Model::Gt => 10,
            Model::Se4 => 11,
            Model::Se68 => 12,
            Model::Unrecognized(code) => code,
        }
    }

    #[inline]
    pub const fn is_recognized(self) -> bool {
        !matches!(self, Model::Unrecognized(_))
    }
}

impl From<u8> for Model {
    fn from(code: u8) -> Self {
        Model::from_code(code)
    }
}

impl From<Model> for u8 {
    fn from(model: Model) -> Self {
        model.code()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Model::Gps => "GPS Series",
            Model::ISeries => "i-Series",
            Model::ISeriesSe => "i-Series SE",
            Model::Cge => "CGE",
            Model::AdvancedGt => "Advanced GT",
            Model::Slt => "SLT",
            Model::Cpc => "CPC",
            Model::Gt => "GT",
            Model::Se4 => "4/5 SE",
            Model::Se68 => "6/8 SE",
            Model::Unrecognized(code) => return write!(f, "Unknown model ({})", code),
        };
        f.write_str(name)
    }
}

/// Outcome of asking for a sub-device's firmware version.
///
/// Transport failures stay on the `Err` side of the surrounding `Result`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DeviceProbe {
    Present(VersionInfo),
    /// The controller did not answer for this device, or answered with the wrong length.
    Absent,
}

impl DeviceProbe {
    pub const fn version(&self) -> Option<VersionInfo> {
        match self {
            DeviceProbe::Present(version) => Some(*version),
            DeviceProbe::Absent => None,
        }
    }

    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, DeviceProbe::Present(_))
    }
}
