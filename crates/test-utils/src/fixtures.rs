//! Common test fixtures for projection tests.
//!
//! Reference values are on the Clarke 1866 authalic sphere
//! (radius 6 370 997 m) unless noted otherwise.

/// Sphere radii and projection parameter sets, as `(a, long0_deg, x0, y0)`.
pub mod params {
    /// Clarke 1866 authalic sphere radius (meters)
    pub const AUTHALIC_RADIUS: f64 = 6_370_997.0;

    /// WGS84 semi-major axis (meters)
    pub const WGS84_A: f64 = 6_378_137.0;

    /// Unit sphere centered on Greenwich
    pub const UNIT_SPHERE: (f64, f64, f64, f64) = (1.0, 0.0, 0.0, 0.0);

    /// World map on the authalic sphere, no offsets
    pub const WORLD: (f64, f64, f64, f64) = (AUTHALIC_RADIUS, 0.0, 0.0, 0.0);

    /// Pacific-centred map with false origin keeping coordinates positive
    pub const PACIFIC_OFFSET: (f64, f64, f64, f64) =
        (WGS84_A, 150.0, 18_040_095.7, 9_020_047.8);

    /// Americas-centred map with a negative central meridian
    pub const AMERICAS: (f64, f64, f64, f64) = (AUTHALIC_RADIUS, -90.0, 500_000.0, 0.0);
}

/// Named geographic locations as `(lon_deg, lat_deg)`.
pub mod places {
    pub const NULL_ISLAND: (f64, f64) = (0.0, 0.0);
    pub const LONDON: (f64, f64) = (-0.1276, 51.5072);
    pub const KANSAS_CITY: (f64, f64) = (-94.5786, 39.0997);
    pub const SYDNEY: (f64, f64) = (151.2093, -33.8688);
    pub const TOKYO: (f64, f64) = (139.6917, 35.6895);
    pub const USHUAIA: (f64, f64) = (-68.3030, -54.8019);
    pub const LONGYEARBYEN: (f64, f64) = (15.6356, 78.2232);
    pub const MCMURDO: (f64, f64) = (166.6681, -77.8419);

    /// All named places
    pub const ALL: [(f64, f64); 8] = [
        NULL_ISLAND,
        LONDON,
        KANSAS_CITY,
        SYDNEY,
        TOKYO,
        USHUAIA,
        LONGYEARBYEN,
        MCMURDO,
    ];
}

/// Known forward results on the authalic sphere, central meridian 0.
pub mod reference {
    /// `((lon_deg, lat_deg), (x, y))`
    pub const WORLD_POINTS: [((f64, f64), (f64, f64)); 3] = [
        ((0.0, 0.0), (0.0, 0.0)),
        ((30.0, 45.0), (2_420_394.905_315, 5_334_266.778_953)),
        ((-30.0, -45.0), (-2_420_394.905_315, -5_334_266.778_953)),
    ];
}
