// src/macros.rs

// Raw byte tracing. Compiles to nothing unless the `trace` feature is on.

macro_rules! wire_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "trace")]
        tracing::trace!($($arg)*);
    };
}

macro_rules! wire_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "trace")]
        tracing::debug!($($arg)*);
    };
}
