use anyhow::{Result, ensure};

use crate::geometry::geo_traits::Contains;
use crate::geometry::primitives::GeoPoint;

/// Axis-aligned rectangle in degree space.
/// Bounding boxes of fences and rings; not a geofence shape itself.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct GeoRect {
    pub lat_min: f64,
    pub lng_min: f64,
    pub lat_max: f64,
    pub lng_max: f64,
}

impl GeoRect {
    pub fn try_new(lat_min: f64, lng_min: f64, lat_max: f64, lng_max: f64) -> Result<Self> {
        ensure!(
            lat_min <= lat_max && lng_min <= lng_max,
            "invalid rect, lat: [{lat_min}, {lat_max}], lng: [{lng_min}, {lng_max}]"
        );
        Ok(GeoRect {
            lat_min,
            lng_min,
            lat_max,
            lng_max,
        })
    }

    /// Smallest rectangle containing all `points`. Degenerate (zero-extent)
    /// rectangles are valid: a single point bounds itself.
    pub fn bounding(points: impl IntoIterator<Item = GeoPoint>) -> Option<Self> {
        let (mut lat_min, mut lng_min) = (f64::MAX, f64::MAX);
        let (mut lat_max, mut lng_max) = (f64::MIN, f64::MIN);
        let mut any = false;

        for p in points {
            lat_min = lat_min.min(p.lat);
            lng_min = lng_min.min(p.lng);
            lat_max = lat_max.max(p.lat);
            lng_max = lng_max.max(p.lng);
            any = true;
        }
        any.then_some(GeoRect {
            lat_min,
            lng_min,
            lat_max,
            lng_max,
        })
    }

    /// Smallest rectangle that contains both `a` and `b`.
    pub fn bounding_rect(a: GeoRect, b: GeoRect) -> GeoRect {
        GeoRect {
            lat_min: f64::min(a.lat_min, b.lat_min),
            lng_min: f64::min(a.lng_min, b.lng_min),
            lat_max: f64::max(a.lat_max, b.lat_max),
            lng_max: f64::max(a.lng_max, b.lng_max),
        }
    }

    /// Returns a new rectangle with the same centroid but scaled by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        let d_lat = self.height() * (factor - 1.0) / 2.0;
        let d_lng = self.width() * (factor - 1.0) / 2.0;
        GeoRect {
            lat_min: self.lat_min - d_lat,
            lng_min: self.lng_min - d_lng,
            lat_max: self.lat_max + d_lat,
            lng_max: self.lng_max + d_lng,
        }
    }

    /// Longitudinal extent in degrees.
    pub fn width(&self) -> f64 {
        self.lng_max - self.lng_min
    }

    /// Latitudinal extent in degrees.
    pub fn height(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    pub fn centroid(&self) -> GeoPoint {
        GeoPoint {
            lat: (self.lat_min + self.lat_max) / 2.0,
            lng: (self.lng_min + self.lng_max) / 2.0,
        }
    }
}

impl Contains<GeoPoint> for GeoRect {
    #[inline(always)]
    fn contains(&self, point: &GeoPoint) -> bool {
        point.lat >= self.lat_min
            && point.lat <= self.lat_max
            && point.lng >= self.lng_min
            && point.lng <= self.lng_max
    }
}
