//! `geofence-rs` provides the geospatial core of a workforce-tracking system:
//! circular geofences around sites and units, approximated as closed polygon
//! rings for map-overlay rendering, plus membership and distance queries for
//! tracked positions.
//!
//! All coordinates are WGS84-like (latitude, longitude) in degrees and all
//! conversions to linear distance use the equirectangular approximation,
//! which is accurate for the small areas (hundreds of meters to a few
//! kilometers) geofences cover, away from the poles.

pub mod entities;
pub mod geofence;
pub mod geometry;
pub mod io;

/// Kilometers spanned by one degree of latitude.
pub const KM_PER_DEG_LAT: f64 = 110.574;

/// Kilometers spanned by one degree of longitude at the equator.
/// Scales with the cosine of the latitude elsewhere.
pub const KM_PER_DEG_LNG_EQUATOR: f64 = 111.32;

/// Fences centered beyond this latitude are rejected: the longitude scale
/// factor (∝ 1/cos(lat)) becomes ill-conditioned approaching the poles.
pub const MAX_FENCE_LATITUDE: f64 = 85.0;

/// Default number of edge points used to approximate a fence circle.
pub const DEFAULT_RING_POINTS: usize = 64;
