//! Generators for geographic sample points.
//!
//! All outputs are `(lon, lat)` pairs in radians, laid out row by row from
//! south to north.

/// Creates a regular lon/lat lattice strictly inside the valid domain.
///
/// Longitudes span `(-180 + margin_deg, 180 - margin_deg)` and latitudes
/// `(-90 + margin_deg, 90 - margin_deg)`, both inclusive of the end points.
///
/// # Example
///
/// ```
/// use test_utils::create_geographic_lattice;
///
/// let points = create_geographic_lattice(5, 3, 1.0);
/// assert_eq!(points.len(), 15);
/// assert!((points[0].0.to_degrees() - (-179.0)).abs() < 1e-9);
/// assert!((points[0].1.to_degrees() - (-89.0)).abs() < 1e-9);
/// ```
pub fn create_geographic_lattice(n_lon: usize, n_lat: usize, margin_deg: f64) -> Vec<(f64, f64)> {
    let lon_min = -180.0 + margin_deg;
    let lon_max = 180.0 - margin_deg;
    let lat_min = -90.0 + margin_deg;
    let lat_max = 90.0 - margin_deg;

    let mut points = Vec::with_capacity(n_lon * n_lat);
    for row in 0..n_lat {
        let lat = lerp(lat_min, lat_max, row, n_lat);
        for col in 0..n_lon {
            let lon = lerp(lon_min, lon_max, col, n_lon);
            points.push((lon.to_radians(), lat.to_radians()));
        }
    }
    points
}

/// Creates `count` pseudo-random geographic points.
///
/// Uses a fixed linear congruential generator so runs are reproducible for a
/// given seed. Points stay `margin_deg` away from the poles and antimeridian.
pub fn create_scattered_points(count: usize, seed: u32, margin_deg: f64) -> Vec<(f64, f64)> {
    let mut state = seed as u64 ^ 0x5DEE_CE66;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };

    (0..count)
        .map(|_| {
            let lon = -180.0 + margin_deg + next() * (360.0 - 2.0 * margin_deg);
            let lat = -90.0 + margin_deg + next() * (180.0 - 2.0 * margin_deg);
            (lon.to_radians(), lat.to_radians())
        })
        .collect()
}

/// Creates points along one meridian, pole to pole inclusive.
pub fn create_meridian(lon_deg: f64, n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| (lon_deg.to_radians(), lerp(-90.0, 90.0, i, n).to_radians()))
        .collect()
}

fn lerp(min: f64, max: f64, i: usize, n: usize) -> f64 {
    if n <= 1 {
        return (min + max) / 2.0;
    }
    min + (max - min) * i as f64 / (n - 1) as f64
}
