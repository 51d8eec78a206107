//! Geographic coordinate type and geodesic distance.
//!
//! `GeoPoint` stores WGS-84 latitude/longitude in `f64`.  Distances are
//! measured on the ellipsoid (Karney's geodesic algorithm via the `geo`
//! crate), not on a sphere, so landmark snapping agrees with what a
//! GIS package would report to well under a millimetre.

use ::geo::{Distance, Geodesic, Point};

use crate::{CoreError, CoreResult};

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Like [`new`](Self::new) but rejects non-finite values and values
    /// outside `[-90, 90]` / `[-180, 180]`.
    pub fn try_new(lat: f64, lon: f64) -> CoreResult<Self> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lon_ok = lon.is_finite() && (-180.0..=180.0).contains(&lon);
        if lat_ok && lon_ok {
            Ok(Self { lat, lon })
        } else {
            Err(CoreError::InvalidCoordinate { lat, lon })
        }
    }

    /// Parse a latitude/longitude pair given as decimal text, as geocoding
    /// services and CSV exports deliver them.
    pub fn parse(lat: &str, lon: &str) -> CoreResult<Self> {
        let lat = parse_degrees(lat)?;
        let lon = parse_degrees(lon)?;
        Self::try_new(lat, lon)
    }

    /// Geodesic distance in metres on the WGS-84 ellipsoid.
    ///
    /// Symmetric, and exactly zero for identical points.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        Geodesic.distance(self.to_point(), other.to_point())
    }

    /// Convert to a `geo::Point` (x = longitude, y = latitude).
    #[inline]
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(p: Point<f64>) -> Self {
        Self { lat: p.y(), lon: p.x() }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

fn parse_degrees(s: &str) -> CoreResult<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| CoreError::Parse(format!("invalid coordinate {s:?}: expected decimal degrees")))
}
