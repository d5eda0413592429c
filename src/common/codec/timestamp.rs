// src/common/codec/timestamp.rs

use core::fmt;

use crate::common::{config::OffsetEncoding, error::ValueError};

/// Years are sent as an offset from this base.
pub const YEAR_BASE: u16 = 2000;

/// Writes a UTC offset (whole hours) as a single byte.
pub fn encode_utc_offset(offset: i8, encoding: OffsetEncoding) -> u8 {
    match encoding {
        OffsetEncoding::TwosComplement => offset as u8,
        OffsetEncoding::Legacy => {
            if offset < 0 {
                // 256 - offset, truncated to a byte
                (256 - i16::from(offset)) as u8
            } else {
                offset as u8
            }
        }
    }
}

/// Reads the offset byte as a signed two's-complement value (`byte - 256` above 127).
#[inline]
pub fn decode_utc_offset(byte: u8) -> i8 {
    byte as i8
}

/// Local date and time as held by the hand controller's clock.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Timestamp {
    hour: u8,
    minute: u8,
    second: u8,
    month: u8,
    day: u8,
    year: u16,
    utc_offset: i8,
    daylight_saving: bool,
}

impl Timestamp {
    /// Length of the `H` payload and of the `h` response.
    pub const WIRE_LEN: usize = 8;

    /// Creates a timestamp at UTC+0 without daylight saving.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, ValueError> {
        if !(YEAR_BASE..=YEAR_BASE + u16::from(u8::MAX)).contains(&year) {
            return Err(ValueError::Year);
        }
        if !(1..=12).contains(&month) {
            return Err(ValueError::Month);
        }
        if !(1..=31).contains(&day) {
            return Err(ValueError::Day);
        }
        if hour >= 24 {
            return Err(ValueError::Hour);
        }
        if minute >= 60 {
            return Err(ValueError::Minute);
        }
        if second >= 60 {
            return Err(ValueError::Second);
        }
        Ok(Timestamp {
            hour,
            minute,
            second,
            month,
            day,
            year,
            utc_offset: 0,
            daylight_saving: false,
        })
    }

    /// Sets the UTC offset in whole hours.
    pub const fn with_utc_offset(mut self, hours: i8) -> Self {
        self.utc_offset = hours;
        self
    }

    pub const fn with_daylight_saving(mut self, enabled: bool) -> Self {
        self.daylight_saving = enabled;
        self
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn utc_offset(&self) -> i8 {
        self.utc_offset
    }

    pub const fn daylight_saving(&self) -> bool {
        self.daylight_saving
    }

    /// Decodes hour, minute, second, month, day, year-2000, offset, dst.
    ///
    /// Fields are taken as reported; only the year is rebuilt.
    pub fn decode(data: &[u8; Self::WIRE_LEN]) -> Self {
        Timestamp {
            hour: data[0],
            minute: data[1],
            second: data[2],
            month: data[3],
            day: data[4],
            year: YEAR_BASE + u16::from(data[5]),
            utc_offset: decode_utc_offset(data[6]),
            daylight_saving: data[7] != 0,
        }
    }

    pub fn encode(&self, encoding: OffsetEncoding) -> [u8; Self::WIRE_LEN] {
        [
            self.hour,
            self.minute,
            self.second,
            self.month,
            self.day,
            // year is within 2000..=2255 by construction
            (self.year - YEAR_BASE) as u8,
            encode_utc_offset(self.utc_offset, encoding),
            u8::from(self.daylight_saving),
        ]
    }
}

/// Renders as `2024-06-15 14:30:00 +08:00`, with a ` DST` suffix when daylight saving is on.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} {:+03}:00",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.utc_offset
        )?;
        if self.daylight_saving {
            f.write_str(" DST")?;
        }
        Ok(())
    }
}
