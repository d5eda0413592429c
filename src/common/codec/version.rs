// src/common/codec/version.rs

use core::fmt;

/// Firmware version of the hand controller or of a sub-device.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct VersionInfo {
    pub major: u8,
    pub minor: u8,
}

impl VersionInfo {
    /// Length of the `V` and `P` version responses.
    pub const WIRE_LEN: usize = 2;

    pub const fn new(major: u8, minor: u8) -> Self {
        VersionInfo { major, minor }
    }

    #[inline]
    pub const fn decode(data: &[u8; Self::WIRE_LEN]) -> Self {
        VersionInfo::new(data[0], data[1])
    }

    #[inline]
    pub const fn encode(&self) -> [u8; Self::WIRE_LEN] {
        [self.major, self.minor]
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
