use std::cmp::Ordering;
use std::f64::consts::{PI, TAU};

use anyhow::{Result, ensure};

use crate::geometry::geo_enums::{GeoPosition, GeoRelation};
use crate::geometry::geo_traits::{Contains, DistanceTo, SeparationDistance, Shape};
use crate::geometry::primitives::{GeoPoint, GeoRect, Ring};
use crate::{KM_PER_DEG_LAT, KM_PER_DEG_LNG_EQUATOR, MAX_FENCE_LATITUDE};

/// A circular geofence: a center coordinate and a radius in meters.
///
/// The circle is the authoritative shape; [CircleFence::to_ring] derives the
/// closed polygon used for map overlays. Membership tests use the same
/// equirectangular scale as ring generation (longitude scaled by the cosine
/// of the *center* latitude), so a point reported inside the fence also
/// falls inside the rendered overlay, up to the approximation error of the
/// ring itself.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleFence {
    pub center: GeoPoint,
    /// Radius in meters. Kilometers are converted at the import boundary.
    pub radius: f64,
}

impl CircleFence {
    /// Validates center and radius. Centers beyond ±[MAX_FENCE_LATITUDE]°
    /// are rejected: the longitude degree-to-meter scale degenerates towards
    /// the poles and would produce unbounded rings.
    pub fn try_new(center: GeoPoint, radius: f64) -> Result<Self> {
        ensure!(
            radius.is_finite() && radius >= 0.0,
            "invalid fence radius: {radius}"
        );
        ensure!(
            center.lat.is_finite() && center.lng.is_finite(),
            "invalid fence center: {center:?}"
        );
        ensure!(
            center.lat.abs() <= MAX_FENCE_LATITUDE,
            "fence center latitude {} beyond ±{MAX_FENCE_LATITUDE}°",
            center.lat
        );
        ensure!(
            center.lng.abs() <= 180.0,
            "fence center longitude out of domain: {}",
            center.lng
        );
        Ok(CircleFence { center, radius })
    }

    /// Radius expressed as degree offsets: (latitudinal, longitudinal).
    fn deg_offsets(&self) -> (f64, f64) {
        let radius_km = self.radius / 1000.0;
        let d_lat = radius_km / KM_PER_DEG_LAT;
        let d_lng = radius_km / (KM_PER_DEG_LNG_EQUATOR * self.center.lat.to_radians().cos());
        (d_lat, d_lng)
    }

    /// Approximates the fence circle as a closed ring of `n_points` vertices
    /// plus a closing point, for map-overlay rendering.
    ///
    /// Pure function of `(self, n_points)`: no side effects, identical
    /// inputs yield identical rings. A zero radius produces a valid,
    /// degenerate ring of coincident points.
    pub fn to_ring(&self, n_points: usize) -> Result<Ring> {
        ensure!(
            n_points >= 3,
            "ring approximation needs at least 3 points, got {n_points}"
        );

        let (d_lat, d_lng) = self.deg_offsets();

        let mut points = Vec::with_capacity(n_points + 1);
        for i in 0..n_points {
            let theta = (i as f64 / n_points as f64) * TAU;
            points.push(GeoPoint {
                lat: self.center.lat + d_lat * theta.sin(),
                lng: self.center.lng + d_lng * theta.cos(),
            });
        }
        //repeat the first vertex to close the ring
        points.push(points[0]);

        Ring::try_new(points)
    }

    /// Distance from `point` to the fence center in meters, under the same
    /// equirectangular scale used for ring generation.
    pub fn center_distance(&self, point: &GeoPoint) -> f64 {
        let scale = self.center.lat.to_radians().cos();
        let dx_km = (point.lng - self.center.lng) * KM_PER_DEG_LNG_EQUATOR * scale;
        let dy_km = (point.lat - self.center.lat) * KM_PER_DEG_LAT;
        dx_km.hypot(dy_km) * 1000.0
    }

    /// Returns the geometric relation between `self` and another fence.
    pub fn relation_to(&self, other: &CircleFence) -> GeoRelation {
        let d = self.center_distance(&other.center);
        if d > self.radius + other.radius {
            GeoRelation::Disjoint
        } else if d + other.radius <= self.radius {
            GeoRelation::Surrounding
        } else if d + self.radius <= other.radius {
            GeoRelation::Enclosed
        } else {
            GeoRelation::Intersecting
        }
    }
}

impl Contains<GeoPoint> for CircleFence {
    fn contains(&self, point: &GeoPoint) -> bool {
        self.center_distance(point) <= self.radius
    }
}

impl DistanceTo<GeoPoint> for CircleFence {
    fn distance_to(&self, point: &GeoPoint) -> f64 {
        let d = self.center_distance(point);
        if d < self.radius { 0.0 } else { d - self.radius }
    }
}

impl SeparationDistance<GeoPoint> for CircleFence {
    fn separation_distance(&self, point: &GeoPoint) -> (GeoPosition, f64) {
        let d = self.center_distance(point);
        match d.partial_cmp(&self.radius).expect("distances are finite") {
            Ordering::Less | Ordering::Equal => (GeoPosition::Interior, self.radius - d),
            Ordering::Greater => (GeoPosition::Exterior, d - self.radius),
        }
    }
}

impl Shape for CircleFence {
    fn centroid(&self) -> GeoPoint {
        self.center
    }

    fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }

    fn bbox(&self) -> GeoRect {
        let (d_lat, d_lng) = self.deg_offsets();
        GeoRect {
            lat_min: self.center.lat - d_lat,
            lng_min: self.center.lng - d_lng,
            lat_max: self.center.lat + d_lat,
            lng_max: self.center.lng + d_lng,
        }
    }

    fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}
