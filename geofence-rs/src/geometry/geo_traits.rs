use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::primitives::GeoPoint;
use crate::geometry::primitives::GeoRect;

/// Trait for regions that can test whether they contain a `T`.
/// Points exactly on the boundary are considered contained.
pub trait Contains<T> {
    fn contains(&self, other: &T) -> bool;
}

/// Trait for types that can compute the minimum distance between `Self` and `T`,
/// in meters under the equirectangular approximation. Will be 0 if `other`
/// lies inside `self`.
pub trait DistanceTo<T> {
    fn distance_to(&self, other: &T) -> f64;
}

/// Trait for regions that can report on which side of their boundary a `T`
/// lies, and how far from that boundary.
pub trait SeparationDistance<T>: DistanceTo<T> {
    /// Returns [GeoPosition::Interior] and the distance to the boundary if
    /// `other` is inside `self`, otherwise [GeoPosition::Exterior] and the
    /// distance to the boundary. Distance in meters.
    fn separation_distance(&self, other: &T) -> (GeoPosition, f64);
}

/// Trait for shared properties of geographic regions.
pub trait Shape {
    /// Geometric center of the region
    fn centroid(&self) -> GeoPoint;

    /// Approximate area of the region in square meters
    fn area(&self) -> f64;

    /// Bounding box of the region in degree space
    fn bbox(&self) -> GeoRect;

    /// Distance between the two furthest points of the region, in meters
    fn diameter(&self) -> f64;
}
