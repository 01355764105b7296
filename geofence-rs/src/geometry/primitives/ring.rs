use anyhow::{Result, ensure};
use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::geometry::geo_traits::{Contains, DistanceTo, Shape};
use crate::geometry::primitives::{GeoPoint, GeoRect};
use crate::{KM_PER_DEG_LAT, KM_PER_DEG_LNG_EQUATOR};

/// A closed polygon boundary in degree space: an ordered vertex sequence
/// whose first and last points coincide.
///
/// Rings are what fences render to on a map. Unlike a general polygon, a
/// ring may be degenerate (all vertices coincident, zero area): that is the
/// valid output of approximating a zero-radius fence.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    points: Vec<GeoPoint>,
    bbox: GeoRect,
}

impl Ring {
    /// Creates a ring from a closed vertex sequence.
    /// Requires at least 3 vertices plus the closing point, first == last,
    /// and finite coordinates throughout.
    pub fn try_new(points: Vec<GeoPoint>) -> Result<Self> {
        ensure!(
            points.len() >= 4,
            "ring needs at least 3 vertices plus the closing point, got {}",
            points.len()
        );
        ensure!(
            points.first() == points.last(),
            "ring is not closed: {:?} != {:?}",
            points.first(),
            points.last()
        );
        ensure!(
            points.iter().all(|p| p.lat.is_finite() && p.lng.is_finite()),
            "ring contains non-finite vertices"
        );

        let bbox = GeoRect::bounding(points.iter().copied()).expect("ring is never empty");

        Ok(Ring { points, bbox })
    }

    /// All stored points, closing point included.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Number of stored points (vertices + the closing point).
    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    /// All vertices coincide, enclosing zero area. Degenerate rings contain
    /// no points; membership of the exact center is a question for the fence
    /// itself, not its polygon approximation.
    pub fn is_degenerate(&self) -> bool {
        self.bbox.width() == 0.0 && self.bbox.height() == 0.0
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //in degree space, with lng as x and lat as y
    fn signed_area_deg(&self) -> f64 {
        let mut sigma = 0.0;
        for (a, b) in self.points.iter().tuple_windows() {
            sigma += a.lng * b.lat - b.lng * a.lat;
        }
        0.5 * sigma
    }
}

impl Contains<GeoPoint> for Ring {
    fn contains(&self, point: &GeoPoint) -> bool {
        //based on the ray casting algorithm: https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
        //horizontal ray shot towards +lng; even-odd rule over the closed vertex sequence.
        //segments of equal latitude (including the zero-length ones of a degenerate ring) never cross the ray.
        if !self.bbox.contains(point) {
            return false;
        }

        let mut inside = false;
        for (a, b) in self.points.iter().tuple_windows() {
            if (a.lat > point.lat) != (b.lat > point.lat) {
                let t = (point.lat - a.lat) / (b.lat - a.lat);
                let lng_at_crossing = a.lng + t * (b.lng - a.lng);
                if point.lng < lng_at_crossing {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

impl Shape for Ring {
    fn centroid(&self) -> GeoPoint {
        //based on: https://en.wikipedia.org/wiki/Centroid#Of_a_polygon
        let area = self.signed_area_deg();
        if area == 0.0 {
            //degenerate ring, centroid of the bounding box
            return self.bbox.centroid();
        }

        let mut c_lng = 0.0;
        let mut c_lat = 0.0;
        for (a, b) in self.points.iter().tuple_windows() {
            let cross = a.lng * b.lat - b.lng * a.lat;
            c_lng += (a.lng + b.lng) * cross;
            c_lat += (a.lat + b.lat) * cross;
        }

        GeoPoint {
            lat: c_lat / (6.0 * area),
            lng: c_lng / (6.0 * area),
        }
    }

    fn area(&self) -> f64 {
        let area_deg2 = self.signed_area_deg().abs();
        let scale_lat = self.bbox.centroid().lat.to_radians().cos();
        let m_per_deg_lat = KM_PER_DEG_LAT * 1000.0;
        let m_per_deg_lng = KM_PER_DEG_LNG_EQUATOR * 1000.0 * scale_lat;
        area_deg2 * m_per_deg_lat * m_per_deg_lng
    }

    fn bbox(&self) -> GeoRect {
        self.bbox
    }

    fn diameter(&self) -> f64 {
        //closing point excluded, it duplicates the first vertex
        self.points[..self.points.len() - 1]
            .iter()
            .tuple_combinations()
            .map(|(a, b)| a.distance_to(b))
            .max_by_key(|d| OrderedFloat(*d))
            .unwrap_or(0.0)
    }
}
