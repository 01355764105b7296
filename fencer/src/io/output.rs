use serde::{Deserialize, Serialize};

use geofence_rs::entities::Instance;
use geofence_rs::geometry::geo_enums::GeoPosition;
use geofence_rs::geometry::geo_traits::SeparationDistance;
use geofence_rs::io::ext_repr::ExtInstance;
use geofence_rs::io::geojson::FeatureCollection;

use crate::config::FencerConfig;

/// Full report written by fencer: the echoed instance, the generated
/// overlays, and one reading per (probe, site) pair.
#[derive(Serialize, Deserialize, Clone)]
pub struct FencerOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub overlays: FeatureCollection,
    pub probe_readings: Vec<ProbeReading>,
    pub config: FencerConfig,
    pub generated_at: String,
}

/// Membership of one probe with respect to one site's fences.
#[derive(Serialize, Deserialize, Clone)]
pub struct ProbeReading {
    pub probe: String,
    pub site_id: u64,
    pub inside: bool,
    /// Distance to the site fence boundary in meters, from whichever side
    /// the probe is on
    pub boundary_distance_m: f64,
    /// Ids of the site's units whose fence contains the probe
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub units: Vec<u64>,
}

/// Evaluates every probe of `instance` against every site.
pub fn probe_readings(instance: &Instance) -> Vec<ProbeReading> {
    let mut readings = vec![];
    for probe in &instance.probes {
        for site in &instance.sites {
            let (position, distance) = site.fence.separation_distance(&probe.position);
            readings.push(ProbeReading {
                probe: probe.name.clone(),
                site_id: site.id as u64,
                inside: position == GeoPosition::Interior,
                boundary_distance_m: distance,
                units: site
                    .units_containing(&probe.position)
                    .map(|u| u.id as u64)
                    .collect(),
            });
        }
    }
    readings
}
