use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::entities::Instance;
use crate::geometry::primitives::Ring;

/// GeoJSON `FeatureCollection` of overlay polygons, consumable as-is by map
/// rendering layers.
#[derive(Serialize, Deserialize, Clone)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

/// A single overlay: one fence ring rendered as a GeoJSON `Polygon`.
#[derive(Serialize, Deserialize, Clone)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: FenceProperties,
    pub geometry: Geometry,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Outer ring only; fence overlays have no holes.
    /// Positions in GeoJSON `[lng, lat]` order.
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

/// Identifying properties attached to each overlay feature.
#[derive(Serialize, Deserialize, Clone)]
pub struct FenceProperties {
    pub id: u64,
    pub name: String,
    pub zone: ZoneKind,
    pub radius_m: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    Site,
    Unit,
}

pub fn ring_to_feature(ring: &Ring, properties: FenceProperties) -> Feature {
    let outer = ring.points().iter().map(|p| [p.lng, p.lat]).collect();
    Feature {
        kind: "Feature".to_string(),
        properties,
        geometry: Geometry::Polygon {
            coordinates: vec![outer],
        },
    }
}

/// Generates the overlay collection for every site and unit fence of
/// `instance`, each circle approximated with `n_ring_points` vertices.
pub fn instance_overlays(instance: &Instance, n_ring_points: usize) -> Result<FeatureCollection> {
    let mut features = vec![];
    for site in &instance.sites {
        features.push(ring_to_feature(
            &site.fence.to_ring(n_ring_points)?,
            FenceProperties {
                id: site.id as u64,
                name: site.name.clone(),
                zone: ZoneKind::Site,
                radius_m: site.fence.radius,
            },
        ));
        for unit in &site.units {
            features.push(ring_to_feature(
                &unit.fence.to_ring(n_ring_points)?,
                FenceProperties {
                    id: unit.id as u64,
                    name: unit.name.clone(),
                    zone: ZoneKind::Unit,
                    radius_m: unit.fence.radius,
                },
            ));
        }
    }
    Ok(FeatureCollection {
        kind: "FeatureCollection".to_string(),
        features,
    })
}
