// src/common/timing.rs

use core::time::Duration;

// The hand controller documentation allows up to 3.5 s of turnaround for any
// command, sub-device passthrough (`P`) included.

/// Default deadline for a single write or a single byte read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3500);

/// Back-off between polls of a transport that reported `WouldBlock`.
pub const POLL_INTERVAL_US: u32 = 100;

