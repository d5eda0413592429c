// src/common/codec/coordinate.rs

use core::fmt;

use crate::common::error::ValueError;

/// Truncates a non-negative value toward zero. Negative input saturates to 0.
#[inline]
fn truncate(value: f64) -> u8 {
    value as u8
}

/// True when `target` is at or below `value`, allowing one unit in the last place.
#[inline]
fn reaches(target: f64, value: f64) -> bool {
    target <= value || target - value <= f64::EPSILON * target
}

#[inline]
fn magnitude(value: f64) -> f64 {
    if value < 0.0 {
        -value
    } else {
        value
    }
}

/// One axis in degrees/minutes/seconds with a hemisphere flag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dms {
    pub degrees: u8,
    pub minutes: u8,
    pub seconds: u8,
    /// South for latitude, West for longitude.
    pub negative: bool,
}

impl Dms {
    /// Splits signed decimal degrees into DMS by truncation, never rounding.
    ///
    /// A value that is a whole number of seconds (such as one decoded from the
    /// wire) encodes to exactly that second even when the intermediate float
    /// arithmetic lands just below it.
    pub fn from_decimal(value: f64) -> Self {
        let abs = magnitude(value);
        let degrees = truncate(abs);
        let remainder = abs - f64::from(degrees);
        let minutes = truncate(60.0 * remainder).min(59);
        let seconds = truncate(3600.0 * remainder - 60.0 * f64::from(minutes)).min(59);
        let mut dms = Dms {
            degrees,
            minutes,
            seconds,
            negative: false,
        };
        if let Some(next) = dms.next_second() {
            if reaches(next.to_decimal(), abs) {
                dms = next;
            }
        }
        dms.negative = value < 0.0;
        dms
    }

    /// The DMS value one second later, carrying into minutes and degrees.
    fn next_second(self) -> Option<Self> {
        let mut next = self;
        next.seconds += 1;
        if next.seconds == 60 {
            next.seconds = 0;
            next.minutes += 1;
        }
        if next.minutes == 60 {
            next.minutes = 0;
            next.degrees = next.degrees.checked_add(1)?;
        }
        Some(next)
    }

    pub fn to_decimal(self) -> f64 {
        let value = f64::from(self.degrees)
            + f64::from(self.minutes) / 60.0
            + f64::from(self.seconds) / 3600.0;
        if self.negative {
            -value
        } else {
            value
        }
    }

    /// Wire layout: degrees, minutes, seconds, hemisphere (0 or 1).
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.degrees, self.minutes, self.seconds, u8::from(self.negative)]
    }

    /// Only a hemisphere byte of exactly 1 marks the negative hemisphere.
    #[inline]
    pub fn from_bytes(data: [u8; 4]) -> Self {
        Dms {
            degrees: data[0],
            minutes: data[1],
            seconds: data[2],
            negative: data[3] == 1,
        }
    }

    fn write_axis(&self, f: &mut fmt::Formatter<'_>, positive: char, negative: char) -> fmt::Result {
        write!(
            f,
            "{}°{:02}'{:02}\"{}",
            self.degrees,
            self.minutes,
            self.seconds,
            if self.negative { negative } else { positive }
        )
    }
}

/// Geographic position in signed decimal degrees.
///
/// Positive latitude is North, positive longitude is East.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Length of the location payload and of the `w` response.
    pub const WIRE_LEN: usize = 8;

    /// Creates a coordinate after checking both axes are finite and in range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValueError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ValueError::NonFinite);
        }
        if magnitude(latitude) > 90.0 {
            return Err(ValueError::LatitudeOutOfRange);
        }
        if magnitude(longitude) > 180.0 {
            return Err(ValueError::LongitudeOutOfRange);
        }
        Ok(Coordinate { latitude, longitude })
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Decodes the 8-byte DMS form sent by the hand controller.
    pub fn decode(data: &[u8; Self::WIRE_LEN]) -> Self {
        let latitude = Dms::from_bytes([data[0], data[1], data[2], data[3]]);
        let longitude = Dms::from_bytes([data[4], data[5], data[6], data[7]]);
        Coordinate {
            latitude: latitude.to_decimal(),
            longitude: longitude.to_decimal(),
        }
    }

    /// Encodes to the 8-byte DMS form. Sub-second remainders are dropped.
    pub fn encode(&self) -> [u8; Self::WIRE_LEN] {
        let dms = self.dms();
        let lat = dms.latitude.to_bytes();
        let lon = dms.longitude.to_bytes();
        [lat[0], lat[1], lat[2], lat[3], lon[0], lon[1], lon[2], lon[3]]
    }

    pub fn dms(&self) -> DmsCoordinate {
        DmsCoordinate {
            latitude: Dms::from_decimal(self.latitude),
            longitude: Dms::from_decimal(self.longitude),
        }
    }
}

/// Renders as `"{lat},{lon}"` in decimal degrees.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Both axes of a [`Coordinate`] in DMS form.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DmsCoordinate {
    pub latitude: Dms,
    pub longitude: Dms,
}

/// Renders as `1°16'02"N 103°48'52"E`.
impl fmt::Display for DmsCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.latitude.write_axis(f, 'N', 'S')?;
        f.write_str(" ")?;
        self.longitude.write_axis(f, 'E', 'W')
    }
}
