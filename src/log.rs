//! Logging shim forwarding to `defmt` when the feature is enabled.
//!
//! The macro is defined under a private name and re-exported as `warn` so the
//! textual definition never collides with the built-in `warn` attribute.

#[cfg(feature = "defmt")]
macro_rules! warn_msg {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn_msg {
    ($($arg:tt)*) => {{}};
}

pub(crate) use warn_msg as warn;
