//! Trace hook for the dispatch entry points.
//!
//! Forwards to `log::trace!` under the `log` feature and expands to nothing
//! otherwise, so the default build carries no logging code at all.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::log::trace!(target: "itertag", $($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

pub(crate) use trace;
