//! Fixed-size generic vectors and matrices.
//!
//! This crate re-exports everything from [`mu_linalg`], and adds logging setup for binaries and
//! tests.
//!
//! # Tolerant Equality
//!
//! Comparing [`Vector`]s and [`Matrix`]es with `==` compares each pair of elements with
//! [`TypeTraits::equals`]. Floating-point elements are equal if they differ by no more than
//! [`TypeTraits::EPSILON`] (`1e-5` for [`f32`], `1e-14` for [`f64`]), integer elements only if they
//! are identical. Custom tolerances are passed to `equals_with_tolerance`.
//!
//! ```
//! use mu::*;
//!
//! let a = vec3(1.0, 2.0, 3.0);
//! let b = vec3(1.0, 2.0, 3.0 + 1e-10);
//! assert!(a.equals_with_tolerance(&b, 1e-9));
//! assert!(!a.equals_with_tolerance(&b, 1e-12));
//! ```
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: Overrides the log filter set up by [`init_logger!`], using the [`env_logger`]
//!   syntax.

use log::LevelFilter;

pub use mu_linalg::*;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .filter(Some("mu_linalg"), log_level)
        .filter(Some("mu_fixtures"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and mu will log at *trace* level.
/// Otherwise, they will log at *debug* level.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
