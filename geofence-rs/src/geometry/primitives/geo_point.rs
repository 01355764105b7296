use std::hash::{Hash, Hasher};

use anyhow::{Result, ensure};

use crate::geometry::geo_traits::DistanceTo;
use crate::{KM_PER_DEG_LAT, KM_PER_DEG_LNG_EQUATOR};

/// A position on the Earth's surface: latitude and longitude in degrees.
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Validates a coordinate pair coming from an external boundary.
    /// Points derived internally (e.g. ring vertices offset from a center)
    /// are constructed directly and may exceed the ±180° longitude domain.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self> {
        ensure!(
            lat.is_finite() && lng.is_finite(),
            "non-finite coordinate: ({lat}, {lng})"
        );
        ensure!((-90.0..=90.0).contains(&lat), "latitude out of domain: {lat}");
        ensure!(
            (-180.0..=180.0).contains(&lng),
            "longitude out of domain: {lng}"
        );
        Ok(GeoPoint { lat, lng })
    }
}

impl DistanceTo<GeoPoint> for GeoPoint {
    /// Equirectangular distance in meters, with the longitude scale taken at
    /// the mean latitude of the two points.
    fn distance_to(&self, other: &GeoPoint) -> f64 {
        let mean_lat = 0.5 * (self.lat + other.lat);
        let dx_km = (self.lng - other.lng) * KM_PER_DEG_LNG_EQUATOR * mean_lat.to_radians().cos();
        let dy_km = (self.lat - other.lat) * KM_PER_DEG_LAT;
        dx_km.hypot(dy_km) * 1000.0
    }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat.to_bits().hash(state);
        self.lng.to_bits().hash(state);
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(p: GeoPoint) -> Self {
        (p.lat, p.lng)
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// `(lat, lng)` order.
    fn from((lat, lng): (f64, f64)) -> Self {
        GeoPoint { lat, lng }
    }
}
