// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod codec;
pub mod command;
pub mod config;
pub mod error;
pub mod hal_traits;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From codec/
pub use codec::{Coordinate, Dms, DmsCoordinate, Timestamp, VersionInfo};

// From command.rs
pub use command::{Command, CommandBuffer, ResponseBuffer, RESPONSE_TERMINATOR};

// From config.rs
pub use config::{ClientConfig, DataBits, Handshake, OffsetEncoding, Parity, SerialConfig, StopBits};

// From error.rs
pub use error::{NexStarError, ValueError};

// From hal_traits.rs
pub use hal_traits::{NexStarInstant, NexStarSerial, NexStarTimer};

// From types.rs
pub use types::{Device, DeviceProbe, Model};
