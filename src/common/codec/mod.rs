// src/common/codec/mod.rs

//! Fixed-width binary codecs for the structured values carried by NexStar commands.
//!
//! Decoders take fixed-size arrays: the client checks response lengths before
//! any codec runs, so a wrong length never reaches them.

mod coordinate;
mod timestamp;
mod version;

pub use coordinate::{Coordinate, Dms, DmsCoordinate};
pub use timestamp::{decode_utc_offset, encode_utc_offset, Timestamp, YEAR_BASE};
pub use version::VersionInfo;

use super::error::NexStarError;
use core::fmt::Debug;

/// Copies a response slice into the fixed-size array a decoder expects.
pub(crate) fn fixed<E: Debug, const N: usize>(data: &[u8]) -> Result<[u8; N], NexStarError<E>> {
    data.try_into().map_err(|_| NexStarError::LengthMismatch {
        received: data.len(),
        expected: N,
    })
}
