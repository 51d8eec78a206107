//! The `Geocoder` trait implemented by place-name lookup backends.

use cp_core::GeoPoint;

use crate::LandmarkResult;

/// Resolves a free-text place name to a single best-match coordinate.
///
/// Implementations return:
/// - `Ok(Some(point))` for a match,
/// - `Ok(None)` when the service has no match (the caller skips the name),
/// - `Err(_)` when the lookup itself failed (network, service, bad payload).
///   The landmark session treats this as fatal.
pub trait Geocoder {
    fn geocode(&self, name: &str) -> LandmarkResult<Option<GeoPoint>>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn geocode(&self, name: &str) -> LandmarkResult<Option<GeoPoint>> {
        (**self).geocode(name)
    }
}

impl<G: Geocoder + ?Sized> Geocoder for Box<G> {
    fn geocode(&self, name: &str) -> LandmarkResult<Option<GeoPoint>> {
        (**self).geocode(name)
    }
}
