//! Shared test utilities for the projection workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Approximate float and coordinate assertions
//! - Geographic sample generators
//! - Common test fixtures
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, fixtures};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Assert that two scalars (lengths or angles) agree within a tolerance.
///
/// A NaN on either side always fails. An optional trailing format string
/// names what is being compared.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(northing, 5_334_266.779, 1e-3);
/// assert_approx_eq!(back_lat, lat, 1e-9, "round trip at lon {}", lon);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $tolerance, "values differ")
    };
    ($left:expr, $right:expr, $tolerance:expr, $($context:tt)+) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let tolerance: f64 = $tolerance as f64;
        let diff = (left - right).abs();
        if diff.is_nan() || diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)` ({})\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:e}` > tolerance `{:e}`",
                format_args!($($context)+),
                left,
                right,
                diff,
                tolerance
            );
        }
    }};
}

/// Assert that two (x, y) pairs agree component-wise within a tolerance.
///
/// Works for (easting, northing) in linear units as well as
/// (lon, lat) in radians or degrees; a failure reports which component
/// drifted and prints both pairs.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_coords_approx_eq;
///
/// let (x, y) = proj.forward_deg(30.0, 45.0);
/// assert_coords_approx_eq!((x, y), (2_420_394.905, 5_334_266.779), 1e-3);
/// ```
#[macro_export]
macro_rules! assert_coords_approx_eq {
    (($x1:expr, $y1:expr), ($x2:expr, $y2:expr), $tolerance:expr $(,)?) => {{
        let got: (f64, f64) = ($x1 as f64, $y1 as f64);
        let want: (f64, f64) = ($x2 as f64, $y2 as f64);
        $crate::assert_approx_eq!(got.0, want.0, $tolerance, "x of {:?} vs {:?}", got, want);
        $crate::assert_approx_eq!(got.1, want.1, $tolerance, "y of {:?} vs {:?}", got, want);
    }};
}

/// Macro for approximate equality of angles in radians, modulo 2π.
///
/// Treats -π and π (and any values a whole turn apart) as equal.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_angle_approx_eq;
///
/// assert_angle_approx_eq!(-std::f64::consts::PI, std::f64::consts::PI, 1e-12);
/// ```
#[macro_export]
macro_rules! assert_angle_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).rem_euclid(std::f64::consts::TAU);
        let diff = diff.min(std::f64::consts::TAU - diff);
        if diff.is_nan() || diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right) mod 2π`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}
