use serde::{Deserialize, Serialize};

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtInstance {
    /// Name of the instance, used to label outputs
    pub name: String,
    /// The tracked locations
    pub sites: Vec<ExtSite>,
    /// Positions to evaluate against the fences
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub probes: Vec<ExtProbe>,
}

/// External representation of a [`Site`](crate::entities::Site).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSite {
    /// Unique identifier of the site
    pub id: u64,
    pub name: String,
    /// The site's outer geofence
    pub fence: ExtFence,
    /// Sub-areas with their own fences
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub units: Vec<ExtUnit>,
}

/// External representation of a [`Unit`](crate::entities::Unit).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtUnit {
    /// Unique identifier of the unit within its site
    pub id: u64,
    pub name: String,
    pub fence: ExtFence,
}

/// External representation of a [`CircleFence`](crate::geofence::CircleFence).
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtFence {
    /// Center latitude in degrees
    pub lat: f64,
    /// Center longitude in degrees
    pub lng: f64,
    /// Radius, in the unit given by `unit`
    pub radius: f64,
    /// Unit of `radius`. Meters if not specified
    #[serde(default)]
    pub unit: ExtRadiusUnit,
}

/// Unit of an [`ExtFence`] radius. Whatever the unit on disk, radii are
/// meters everywhere past the import boundary.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExtRadiusUnit {
    #[default]
    M,
    Km,
}

/// External representation of a [`Probe`](crate::entities::Probe).
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtProbe {
    /// Label of the tracked position (e.g. an employee tag)
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}
