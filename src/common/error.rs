// src/common/error.rs

use core::fmt::Debug;

/// Errors produced while talking to a NexStar hand controller.
///
/// Generic over the transport's own error type `E`. Validation paths that can
/// never touch the transport use the default `E = ()`.
#[derive(Debug, thiserror::Error)]
pub enum NexStarError<E = ()>
where
    E: Debug,
{
    /// Underlying I/O error from the transport implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// A write or read did not complete within the configured timeout.
    #[error("Operation timed out")]
    Timeout,

    /// The number of bytes received before the `#` terminator did not match the command.
    #[error("Length of response ({received}) does not match expected length ({expected})")]
    LengthMismatch { received: usize, expected: usize },

    /// Command opcode plus payload do not fit the command frame.
    #[error("Command too long: needed {needed}, capacity {capacity}")]
    CommandTooLong { needed: usize, capacity: usize },
}

/// Range violations detected when constructing wire values.
///
/// Returned by the value constructors before any I/O happens, so it stays
/// separate from [`NexStarError`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("coordinate component is not a finite number")]
    NonFinite,
    #[error("latitude must be within -90..=90 degrees")]
    LatitudeOutOfRange,
    #[error("longitude must be within -180..=180 degrees")]
    LongitudeOutOfRange,
    #[error("hour must be below 24")]
    Hour,
    #[error("minute must be below 60")]
    Minute,
    #[error("second must be below 60")]
    Second,
    #[error("month must be within 1..=12")]
    Month,
    #[error("day must be within 1..=31")]
    Day,
    #[error("year must be within 2000..=2255")]
    Year,
}

impl<E: Debug> From<E> for NexStarError<E> {
    fn from(e: E) -> Self {
        NexStarError::Io(e)
    }
}

impl<E: Debug> NexStarError<E> {
    /// True for the outcomes an uninstalled sub-device produces.
    pub fn indicates_absent_device(&self) -> bool {
        matches!(
            self,
            NexStarError::Timeout | NexStarError::LengthMismatch { .. }
        )
    }
}
