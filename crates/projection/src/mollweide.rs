//! Mollweide projection.
//!
//! An equal-area pseudocylindrical projection mapping the whole globe onto a
//! 2:1 ellipse. Parallels are straight lines; meridians are elliptical arcs.
//!
//! The projection is defined through an auxiliary angle θ satisfying
//! `2θ + sin(2θ) = π·sin(φ)`, solved here with Newton-Raphson:
//! - x = (2√2/π)·a·(λ - λ₀)·cos(θ)
//! - y = √2·a·sin(θ)
//!
//! Both directions are best-effort: they never fail. Boundary values that
//! would leave the domain of `asin` or divide by zero are clamped, and a
//! solver that runs out of iterations reports a warning through the
//! projection's [`NumericSupport`] and keeps its last estimate.
//!
//! Reference: Snyder, "Map Projections - A Working Manual", USGS PP 1395.

use nalgebra::Point2;
use tracing::debug;

use crate::config::MollweideParams;
use crate::error::Result;
use crate::support::{
    NumericSupport, ProjectionWarning, TracingSupport, HALF_PI, MAX_ITERATIONS, PI,
};

/// 2√2/π, the easting scale.
pub const X_SCALE: f64 = 0.900316316158;

/// √2, the northing scale.
pub const Y_SCALE: f64 = 1.4142135623731;

/// Largest `|y / (√2·a)|` the inverse accepts before clamping.
///
/// Keeps θ strictly inside (-π/2, π/2) so that cos(θ) stays positive.
pub const INVERSE_ARG_LIMIT: f64 = 0.999999999999;

/// Result of solving `t + sin(t) = π·sin(lat)` for `t = 2θ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThetaSolution {
    /// The doubled auxiliary angle `2θ`
    pub two_theta: f64,
    /// Corrections applied
    pub iterations: usize,
    /// Last correction applied
    pub last_delta: f64,
    /// Whether the last correction fell below the tolerance
    pub converged: bool,
}

/// Solve for the doubled auxiliary angle of latitude `lat`.
///
/// Starts from `lat` and applies Newton-Raphson corrections until one is
/// smaller than `eps`. After [`MAX_ITERATIONS`] unconverged corrections the
/// current estimate is returned with `converged == false`.
pub fn solve_theta(lat: f64, eps: f64) -> ThetaSolution {
    let con = PI * lat.sin();
    let mut theta = lat;
    let mut i = 0;

    loop {
        let delta_theta = -(theta + theta.sin() - con) / (1.0 + theta.cos());
        theta += delta_theta;

        if delta_theta.abs() < eps {
            return ThetaSolution {
                two_theta: theta,
                iterations: i + 1,
                last_delta: delta_theta,
                converged: true,
            };
        }

        if i >= MAX_ITERATIONS {
            return ThetaSolution {
                two_theta: theta,
                iterations: i + 1,
                last_delta: delta_theta,
                converged: false,
            };
        }

        i += 1;
    }
}

/// Forward transform result with solver diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardOutcome {
    /// Projected (easting, northing)
    pub point: Point2<f64>,
    /// Auxiliary angle θ used for the projection (radians)
    pub theta: f64,
    /// Solver iterations
    pub iterations: usize,
    /// False when the solver hit its iteration cap
    pub converged: bool,
}

/// Mollweide projection bound to a parameter set and numeric support.
#[derive(Debug, Clone)]
pub struct Mollweide<S: NumericSupport = TracingSupport> {
    params: MollweideParams,
    support: S,
}

impl Mollweide<TracingSupport> {
    /// Create a projection that reports warnings through `tracing`.
    pub fn new(params: MollweideParams) -> Result<Self> {
        Self::with_support(params, TracingSupport)
    }
}

impl<S: NumericSupport> Mollweide<S> {
    /// Create a projection with custom numeric support.
    pub fn with_support(params: MollweideParams, support: S) -> Result<Self> {
        params.validate()?;
        debug!(
            a = params.a,
            long0 = params.long0,
            x0 = params.x0,
            y0 = params.y0,
            "Initialized Mollweide projection"
        );
        Ok(Self { params, support })
    }

    pub fn params(&self) -> &MollweideParams {
        &self.params
    }

    pub fn support(&self) -> &S {
        &self.support
    }

    /// Geographic (lon, lat in radians) to projected (easting, northing).
    pub fn forward(&self, p: Point2<f64>) -> Point2<f64> {
        self.forward_detailed(p).point
    }

    /// Forward transform writing the result back into `p`.
    pub fn forward_in_place(&self, p: &mut Point2<f64>) {
        *p = self.forward(*p);
    }

    /// Forward transform that also returns the solver state.
    pub fn forward_detailed(&self, p: Point2<f64>) -> ForwardOutcome {
        let (lon, lat) = (p.x, p.y);
        let eps = self.support.epsilon();

        let mut delta_lon = self.support.adjust_lon(lon - self.params.long0);

        let solution = solve_theta(lat, eps);
        if !solution.converged {
            self.support.report(ProjectionWarning::IterationLimit {
                iterations: solution.iterations,
                residual: solution.last_delta,
            });
        }
        let theta = solution.two_theta / 2.0;

        // cos(θ) is imprecise at the poles; pin easting to the central meridian.
        if HALF_PI - lat.abs() < eps {
            delta_lon = 0.0;
        }

        let x = X_SCALE * self.params.a * delta_lon * theta.cos() + self.params.x0;
        let y = Y_SCALE * self.params.a * theta.sin() + self.params.y0;

        ForwardOutcome {
            point: Point2::new(x, y),
            theta,
            iterations: solution.iterations,
            converged: solution.converged,
        }
    }

    /// Projected (easting, northing) to geographic (lon, lat in radians).
    pub fn inverse(&self, p: Point2<f64>) -> Point2<f64> {
        let x = p.x - self.params.x0;
        let y = p.y - self.params.y0;

        // Clamps to the positive bound for both signs. Southern values past
        // the limit therefore come back as the north pole.
        let mut arg = y / (Y_SCALE * self.params.a);
        if arg.abs() > INVERSE_ARG_LIMIT {
            arg = INVERSE_ARG_LIMIT;
        }
        let theta = arg.asin();

        let mut lon = self
            .support
            .adjust_lon(self.params.long0 + x / (X_SCALE * self.params.a * theta.cos()));
        if lon < -PI {
            lon = -PI;
        }
        if lon > PI {
            lon = PI;
        }

        let mut arg = (2.0 * theta + (2.0 * theta).sin()) / PI;
        if arg.abs() > 1.0 {
            arg = arg.signum();
        }
        let lat = arg.asin();

        Point2::new(lon, lat)
    }

    /// Inverse transform writing the result back into `p`.
    pub fn inverse_in_place(&self, p: &mut Point2<f64>) {
        *p = self.inverse(*p);
    }

    /// Forward transform in degrees. Returns (easting, northing).
    pub fn forward_deg(&self, lon_deg: f64, lat_deg: f64) -> (f64, f64) {
        let p = self.forward(Point2::new(lon_deg.to_radians(), lat_deg.to_radians()));
        (p.x, p.y)
    }

    /// Inverse transform in degrees. Returns (lon, lat) in degrees.
    pub fn inverse_deg(&self, x: f64, y: f64) -> (f64, f64) {
        let p = self.inverse(Point2::new(x, y));
        (p.x.to_degrees(), p.y.to_degrees())
    }

    /// Forward-transform every point in place.
    pub fn forward_batch(&self, points: &mut [Point2<f64>]) {
        for p in points.iter_mut() {
            self.forward_in_place(p);
        }
    }

    /// Inverse-transform every point in place.
    pub fn inverse_batch(&self, points: &mut [Point2<f64>]) {
        for p in points.iter_mut() {
            self.inverse_in_place(p);
        }
    }

    /// Projected extent of the whole globe.
    ///
    /// Returns (min_x, min_y, max_x, max_y) including the false origin.
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        let half_width = X_SCALE * self.params.a * PI;
        let half_height = Y_SCALE * self.params.a;
        (
            self.params.x0 - half_width,
            self.params.y0 - half_height,
            self.params.x0 + half_width,
            self.params.y0 + half_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::{RecordingSupport, EPSLN};

    fn unit_sphere() -> Mollweide {
        Mollweide::new(MollweideParams::new(1.0, 0.0, 0.0, 0.0)).unwrap()
    }

    #[test]
    fn test_origin() {
        let proj = unit_sphere();
        let p = proj.forward(Point2::new(0.0, 0.0));
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_solve_theta_equator_single_step() {
        let solution = solve_theta(0.0, EPSLN);
        assert!(solution.converged);
        assert_eq!(solution.iterations, 1);
        assert_eq!(solution.two_theta, 0.0);
    }

    #[test]
    fn test_solve_theta_satisfies_equation() {
        for deg in [-89.0, -60.0, -30.0, -1.0, 1.0, 15.0, 45.0, 75.0, 89.5] {
            let lat = f64::to_radians(deg);
            let solution = solve_theta(lat, EPSLN);
            let t = solution.two_theta;
            let residual = t + t.sin() - PI * lat.sin();
            assert!(solution.converged, "lat {} did not converge", deg);
            assert!(solution.iterations <= MAX_ITERATIONS + 1);
            assert!(residual.abs() < 1e-12, "lat {}: residual {}", deg, residual);
        }
    }

    #[test]
    fn test_solve_theta_iteration_cap() {
        // A zero tolerance can never be met.
        let solution = solve_theta(0.7, 0.0);
        assert!(!solution.converged);
        assert_eq!(solution.iterations, MAX_ITERATIONS + 1);
        assert!(solution.two_theta.is_finite());
    }

    #[test]
    fn test_known_point() {
        // 30°E 45°N on the Clarke 1866 authalic sphere
        let proj = Mollweide::new(MollweideParams::default()).unwrap();
        let (x, y) = proj.forward_deg(30.0, 45.0);
        assert!((x - 2_420_394.905).abs() < 0.01, "x = {}", x);
        assert!((y - 5_334_266.779).abs() < 0.01, "y = {}", y);
    }

    #[test]
    fn test_pole_pins_easting() {
        let params = MollweideParams::new(2.0, 0.0, 7.0, -3.0);
        let proj = Mollweide::new(params).unwrap();
        for lon in [-3.0, -0.5, 0.0, 1.0, 3.1] {
            let north = proj.forward(Point2::new(lon, HALF_PI));
            assert_eq!(north.x, 7.0);
            assert!((north.y - (Y_SCALE * 2.0 - 3.0)).abs() < 1e-9);

            let south = proj.forward(Point2::new(lon, -HALF_PI));
            assert_eq!(south.x, 7.0);
            assert!((south.y - (-Y_SCALE * 2.0 - 3.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_in_place_matches_value() {
        let proj = unit_sphere();
        let input = Point2::new(0.4, -0.3);
        let mut p = input;
        proj.forward_in_place(&mut p);
        assert_eq!(p, proj.forward(input));

        let projected = p;
        proj.inverse_in_place(&mut p);
        assert_eq!(p, proj.inverse(projected));
    }

    #[test]
    fn test_non_convergence_reports_and_continues() {
        let support = RecordingSupport::with_epsilon(0.0);
        let proj = Mollweide::with_support(MollweideParams::new(1.0, 0.0, 0.0, 0.0), &support)
            .unwrap();

        let outcome = proj.forward_detailed(Point2::new(0.2, 0.6));
        assert!(!outcome.converged);
        assert!(outcome.point.x.is_finite());
        assert!(outcome.point.y.is_finite());

        let warnings = support.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code(), "moll:Fwd:IterationError");

        // The unconverged estimate is still essentially the answer here.
        let reference = unit_sphere().forward(Point2::new(0.2, 0.6));
        assert!((outcome.point.x - reference.x).abs() < 1e-9);
        assert!((outcome.point.y - reference.y).abs() < 1e-9);
    }

    /// Tracing output with a zero tolerance, so every forward hits the cap.
    struct StrictTracing;

    impl NumericSupport for StrictTracing {
        fn epsilon(&self) -> f64 {
            0.0
        }

        fn report(&self, warning: ProjectionWarning) {
            TracingSupport.report(warning)
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_non_convergence_logs_through_tracing() {
        let logs = CapturedLogs::default();
        let sink = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .finish();

        let outcome = tracing::subscriber::with_default(subscriber, || {
            let proj =
                Mollweide::with_support(MollweideParams::new(1.0, 0.0, 0.0, 0.0), StrictTracing)
                    .unwrap();
            proj.forward_detailed(Point2::new(0.2, 0.6))
        });

        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, MAX_ITERATIONS + 1);
        assert!(outcome.point.x.is_finite());
        assert!(outcome.point.y.is_finite());

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"), "no warning logged: {}", output);
        assert!(output.contains("moll:Fwd:IterationError"), "missing code: {}", output);
        assert!(output.contains("iterations=51"), "missing iterations: {}", output);
    }

    #[test]
    fn test_converged_forward_reports_nothing() {
        let support = RecordingSupport::new();
        let proj = Mollweide::with_support(MollweideParams::default(), &support).unwrap();
        for deg in [-90.0, -45.0, 0.0, 45.0, 90.0] {
            let outcome = proj.forward_detailed(Point2::new(0.0, f64::to_radians(deg)));
            assert!(outcome.converged);
        }
        assert!(support.warnings().is_empty());
    }

    #[test]
    fn test_extent() {
        let proj = Mollweide::new(MollweideParams::new(1.0, 0.0, 10.0, 20.0)).unwrap();
        let (min_x, min_y, max_x, max_y) = proj.extent();
        let two_sqrt2 = 2.0 * std::f64::consts::SQRT_2;
        assert!((max_x - 10.0 - two_sqrt2).abs() < 1e-9);
        assert!((10.0 - min_x - two_sqrt2).abs() < 1e-9);
        assert!((max_y - 20.0 - std::f64::consts::SQRT_2).abs() < 1e-9);
        assert!((20.0 - min_y - std::f64::consts::SQRT_2).abs() < 1e-9);

        // The antimeridian on the equator lands on the extent edge.
        let edge = proj.forward(Point2::new(PI, 0.0));
        assert!((edge.x - max_x).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_params_rejected() {
        assert!(Mollweide::new(MollweideParams::new(0.0, 0.0, 0.0, 0.0)).is_err());
        assert!(Mollweide::new(MollweideParams::new(1.0, f64::NAN, 0.0, 0.0)).is_err());
    }
}
