// src/lib.rs

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[macro_use]
mod macros;

pub mod client;
pub mod common;
#[cfg(feature = "std")]
pub mod std_serial;

// Re-export key types for convenience
pub use client::NexStarClient;
pub use common::{Coordinate, Device, DeviceProbe, Model, NexStarError, Timestamp, VersionInfo};
