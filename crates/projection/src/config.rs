//! Projection parameters.
//!
//! Supplied once by whoever sets up the projection and read-only afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Radius of the Clarke 1866 authalic sphere (meters).
pub const DEFAULT_SPHERE_RADIUS: f64 = 6_370_997.0;

/// Parameters for the Mollweide projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MollweideParams {
    /// Semi-major axis / sphere radius (linear units, > 0)
    pub a: f64,
    /// Central meridian in radians
    pub long0: f64,
    /// False easting (linear units)
    pub x0: f64,
    /// False northing (linear units)
    pub y0: f64,
}

impl Default for MollweideParams {
    fn default() -> Self {
        Self {
            a: DEFAULT_SPHERE_RADIUS,
            long0: 0.0,
            x0: 0.0,
            y0: 0.0,
        }
    }
}

impl MollweideParams {
    pub fn new(a: f64, long0: f64, x0: f64, y0: f64) -> Self {
        Self { a, long0, x0, y0 }
    }

    /// Same as [`MollweideParams::new`] with the central meridian in degrees.
    pub fn from_degrees(a: f64, long0_deg: f64, x0: f64, y0: f64) -> Self {
        Self::new(a, long0_deg.to_radians(), x0, y0)
    }

    /// Replace the central meridian (radians).
    pub fn with_central_meridian(mut self, long0: f64) -> Self {
        self.long0 = long0;
        self
    }

    /// Replace the false easting and northing.
    pub fn with_false_origin(mut self, x0: f64, y0: f64) -> Self {
        self.x0 = x0;
        self.y0 = y0;
        self
    }

    /// Load parameters from environment variables.
    ///
    /// Reads `MOLL_A`, `MOLL_LONG0_DEG`, `MOLL_X0` and `MOLL_Y0`. Variables
    /// that are unset or do not parse keep their defaults.
    pub fn from_env() -> Self {
        let mut params = Self::default();

        if let Ok(val) = std::env::var("MOLL_A") {
            if let Ok(a) = val.trim().parse() {
                params.a = a;
            }
        }

        if let Ok(val) = std::env::var("MOLL_LONG0_DEG") {
            if let Ok(long0_deg) = val.trim().parse::<f64>() {
                params.long0 = long0_deg.to_radians();
            }
        }

        if let Ok(val) = std::env::var("MOLL_X0") {
            if let Ok(x0) = val.trim().parse() {
                params.x0 = x0;
            }
        }

        if let Ok(val) = std::env::var("MOLL_Y0") {
            if let Ok(y0) = val.trim().parse() {
                params.y0 = y0;
            }
        }

        params
    }

    /// Parse parameters from a JSON object. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the parameters.
    pub fn validate(&self) -> Result<()> {
        if !self.a.is_finite() || self.a <= 0.0 {
            return Err(ProjectionError::invalid_parameter(
                "a",
                format!("must be a positive finite length, got {}", self.a),
            ));
        }

        for (name, value) in [("long0", self.long0), ("x0", self.x0), ("y0", self.y0)] {
            if !value.is_finite() {
                return Err(ProjectionError::invalid_parameter(
                    name,
                    format!("must be finite, got {}", value),
                ));
            }
        }

        Ok(())
    }
}
