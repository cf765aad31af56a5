//! Internal trace points.
//!
//! Forward to `tracing` when the `tracing` feature is enabled and expand to nothing
//! otherwise, so the no_std core carries no logging cost by default.

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}

pub(crate) use debug_event;
pub(crate) use trace_event;
