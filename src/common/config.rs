// src/common/config.rs

use core::time::Duration;

use super::timing;

/// Serial parity setting.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Parity {
    #[default]
    None,
    Odd,
    Even,
    Mark,
    Space,
}

/// Number of data bits per character.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum DataBits {
    Five,
    Six,
    Seven,
    #[default]
    Eight,
}

impl DataBits {
    pub const fn bits(self) -> u8 {
        match self {
            DataBits::Five => 5,
            DataBits::Six => 6,
            DataBits::Seven => 7,
            DataBits::Eight => 8,
        }
    }
}

/// Number of stop bits per character.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum StopBits {
    #[default]
    One,
    OnePointFive,
    Two,
}

/// Flow control. The hand controller uses none.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Handshake {
    #[default]
    None,
    XonXoff,
    RequestToSend,
}

/// Line settings handed to the transport when it is opened.
///
/// The defaults (9600 8N1, no handshake, 3.5 s timeout) match the NexStar
/// hand controller's serial port.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SerialConfig {
    pub baud_rate: u32,
    pub parity: Parity,
    pub data_bits: DataBits,
    pub stop_bits: StopBits,
    pub handshake: Handshake,
    /// Deadline applied to each write and to each byte read.
    pub timeout: Duration,
}

impl SerialConfig {
    pub const DEFAULT_BAUD_RATE: u32 = 9600;

    pub const fn new() -> Self {
        SerialConfig {
            baud_rate: Self::DEFAULT_BAUD_RATE,
            parity: Parity::None,
            data_bits: DataBits::Eight,
            stop_bits: StopBits::One,
            handshake: Handshake::None,
            timeout: timing::DEFAULT_TIMEOUT,
        }
    }

    pub const fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub const fn with_parity(mut self, parity: Parity) -> Self {
        self.parity = parity;
        self
    }

    pub const fn with_data_bits(mut self, data_bits: DataBits) -> Self {
        self.data_bits = data_bits;
        self
    }

    pub const fn with_stop_bits(mut self, stop_bits: StopBits) -> Self {
        self.stop_bits = stop_bits;
        self
    }

    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How a negative UTC offset is written by `SetTime`.
///
/// Decoding always treats the offset byte as a two's-complement `i8`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum OffsetEncoding {
    /// `offset as u8`: -5 is written as 251 and reads back as -5.
    #[default]
    TwosComplement,
    /// `(256 - offset) mod 256`, as shipped by older PC software. Negative
    /// offsets lose their sign on the wire (-5 is written as 5).
    Legacy,
}

/// Everything a [`NexStarClient`](crate::client::NexStarClient) needs besides its transport.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct ClientConfig {
    pub serial: SerialConfig,
    pub offset_encoding: OffsetEncoding,
}

impl ClientConfig {
    pub const fn new(serial: SerialConfig) -> Self {
        ClientConfig {
            serial,
            offset_encoding: OffsetEncoding::TwosComplement,
        }
    }

    pub const fn with_offset_encoding(mut self, offset_encoding: OffsetEncoding) -> Self {
        self.offset_encoding = offset_encoding;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_defaults() {
        let config = SerialConfig::default();
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.data_bits.bits(), 8);
        assert_eq!(config.stop_bits, StopBits::One);
        assert_eq!(config.handshake, Handshake::None);
        assert_eq!(config.timeout, Duration::from_millis(3500));
    }

    #[test]
    fn test_builders() {
        let config = SerialConfig::new()
            .with_baud_rate(19200)
            .with_parity(Parity::Even)
            .with_data_bits(DataBits::Seven)
            .with_stop_bits(StopBits::Two)
            .with_timeout(Duration::from_millis(500));
        assert_eq!(config.baud_rate, 19200);
        assert_eq!(config.parity, Parity::Even);
        assert_eq!(config.data_bits, DataBits::Seven);
        assert_eq!(config.stop_bits, StopBits::Two);
        assert_eq!(config.timeout, Duration::from_millis(500));

        let client = ClientConfig::new(config).with_offset_encoding(OffsetEncoding::Legacy);
        assert_eq!(client.serial, config);
        assert_eq!(client.offset_encoding, OffsetEncoding::Legacy);
        assert_eq!(ClientConfig::default().offset_encoding, OffsetEncoding::TwosComplement);
    }
}
