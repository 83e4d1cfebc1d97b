//! Coordinate reference system transformations.
//!
//! Implements the Mollweide equal-area projection on top of a small numeric
//! support layer (longitude normalization, tolerances, diagnostic sink).

pub mod config;
pub mod error;
pub mod mollweide;
pub mod support;

pub use config::MollweideParams;
pub use error::{ProjectionError, Result};
pub use mollweide::{solve_theta, ForwardOutcome, Mollweide, ThetaSolution};
pub use nalgebra::Point2;
pub use support::{
    adjust_lon, NumericSupport, ProjectionWarning, RecordingSupport, TracingSupport, EPSLN,
    MAX_ITERATIONS,
};
