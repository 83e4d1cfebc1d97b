//! Numeric support shared by the projection transforms.
//!
//! Holds the angle constants, longitude normalization, and the diagnostic
//! sink that transforms report non-fatal conditions through. The sink is
//! injected into each projection at construction instead of being read
//! from global state.

use std::sync::Mutex;

use num_traits::{Float, FloatConst};
use tracing::warn;

pub use std::f64::consts::PI;

/// π/2
pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

/// 2π
pub const TWO_PI: f64 = std::f64::consts::TAU;

/// Convergence tolerance for iterative solvers.
pub const EPSLN: f64 = 1.0e-10;

/// Iteration cap for the Newton-Raphson solvers.
pub const MAX_ITERATIONS: usize = 50;

/// Beyond this many turns, reduce with a remainder before stepping.
const MAX_STEP_TURNS: f64 = 64.0;

/// Normalize a longitude (radians) into [-π, π].
///
/// Values already inside the range are returned untouched, so a longitude of
/// exactly ±π keeps its sign. Non-finite input passes through unchanged.
pub fn adjust_lon<T: Float + FloatConst>(x: T) -> T {
    let pi = T::PI();
    if !x.is_finite() || x.abs() <= pi {
        return x;
    }

    let two_pi = pi + pi;
    let mut x = x;
    if x.abs() > two_pi * T::from(MAX_STEP_TURNS).unwrap_or_else(T::max_value) {
        x = x % two_pi;
    }
    while x.abs() > pi {
        x = x - x.signum() * two_pi;
    }
    x
}

/// Non-fatal condition raised while transforming a coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionWarning {
    /// The forward Newton-Raphson iteration hit its cap without converging.
    /// The transform continued with the last computed parametric angle.
    IterationLimit {
        /// Number of iterations performed.
        iterations: usize,
        /// Last correction applied to the parametric angle.
        residual: f64,
    },
}

impl ProjectionWarning {
    /// Stable diagnostic code for this warning.
    pub fn code(&self) -> &'static str {
        match self {
            ProjectionWarning::IterationLimit { .. } => "moll:Fwd:IterationError",
        }
    }
}

impl std::fmt::Display for ProjectionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionWarning::IterationLimit {
                iterations,
                residual,
            } => write!(
                f,
                "{}: no convergence after {} iterations (last correction {:e})",
                self.code(),
                iterations,
                residual
            ),
        }
    }
}

/// Numeric services a projection relies on.
///
/// Implementations must be cheap to call; transforms invoke them once per
/// coordinate.
pub trait NumericSupport: Send + Sync {
    /// Normalize a longitude into [-π, π].
    fn adjust_lon(&self, lon: f64) -> f64 {
        adjust_lon(lon)
    }

    /// Convergence tolerance for iterative solvers.
    fn epsilon(&self) -> f64 {
        EPSLN
    }

    /// Receive a non-fatal diagnostic. Must not panic.
    fn report(&self, warning: ProjectionWarning);
}

/// Default support: reports warnings through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSupport;

impl NumericSupport for TracingSupport {
    fn report(&self, warning: ProjectionWarning) {
        match warning {
            ProjectionWarning::IterationLimit {
                iterations,
                residual,
            } => warn!(
                code = warning.code(),
                iterations,
                residual,
                "Projection iteration did not converge, using last estimate"
            ),
        }
    }
}

/// Support that keeps every reported warning for later inspection.
#[derive(Debug)]
pub struct RecordingSupport {
    epsilon: f64,
    warnings: Mutex<Vec<ProjectionWarning>>,
}

impl RecordingSupport {
    pub fn new() -> Self {
        Self::with_epsilon(EPSLN)
    }

    /// Use a custom convergence tolerance.
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self {
            epsilon,
            warnings: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the warnings reported so far.
    pub fn warnings(&self) -> Vec<ProjectionWarning> {
        match self.warnings.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Drop all recorded warnings.
    pub fn clear(&self) {
        match self.warnings.lock() {
            Ok(mut guard) => guard.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl Default for RecordingSupport {
    fn default() -> Self {
        Self::new()
    }
}

impl NumericSupport for RecordingSupport {
    fn epsilon(&self) -> f64 {
        self.epsilon
    }

    fn report(&self, warning: ProjectionWarning) {
        match self.warnings.lock() {
            Ok(mut guard) => guard.push(warning),
            Err(poisoned) => poisoned.into_inner().push(warning),
        }
    }
}

impl<S: NumericSupport + ?Sized> NumericSupport for &S {
    fn adjust_lon(&self, lon: f64) -> f64 {
        (**self).adjust_lon(lon)
    }

    fn epsilon(&self) -> f64 {
        (**self).epsilon()
    }

    fn report(&self, warning: ProjectionWarning) {
        (**self).report(warning)
    }
}
