use anyhow::{Result, bail};
use itertools::Itertools;
use log::warn;

use crate::entities::{Instance, Probe, Site, Unit};
use crate::geofence::CircleFence;
use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::primitives::GeoPoint;
use crate::io::ext_repr::{ExtFence, ExtInstance, ExtProbe, ExtRadiusUnit, ExtSite, ExtUnit};

/// Converts an external instance into the internal representation,
/// validating every fence and position along the way.
pub fn import_instance(ext: &ExtInstance) -> Result<Instance> {
    if !ext.sites.iter().map(|s| s.id).all_unique() {
        bail!("instance contains duplicate site ids");
    }

    let sites = ext.sites.iter().map(import_site).collect::<Result<Vec<Site>>>()?;
    let probes = ext
        .probes
        .iter()
        .map(import_probe)
        .collect::<Result<Vec<Probe>>>()?;

    Ok(Instance {
        name: ext.name.clone(),
        sites,
        probes,
    })
}

pub fn import_site(ext: &ExtSite) -> Result<Site> {
    if !ext.units.iter().map(|u| u.id).all_unique() {
        bail!("site {} contains duplicate unit ids", ext.id);
    }

    let fence = import_fence(&ext.fence)?;
    let units = ext
        .units
        .iter()
        .map(import_unit)
        .collect::<Result<Vec<Unit>>>()?;

    for unit in &units {
        //a unit poking out of its site is suspect data, but not fatal
        if fence.relation_to(&unit.fence) != GeoRelation::Surrounding {
            warn!(
                "[IMPORT] unit {} ({}) is not fully enclosed by the fence of site {} ({})",
                unit.id, unit.name, ext.id, ext.name
            );
        }
    }

    Ok(Site {
        id: ext.id as usize,
        name: ext.name.clone(),
        fence,
        units,
    })
}

pub fn import_unit(ext: &ExtUnit) -> Result<Unit> {
    Ok(Unit {
        id: ext.id as usize,
        name: ext.name.clone(),
        fence: import_fence(&ext.fence)?,
    })
}

/// The only place radius units are converted: meters from here on.
pub fn import_fence(ext: &ExtFence) -> Result<CircleFence> {
    let center = GeoPoint::try_new(ext.lat, ext.lng)?;
    let radius_m = match ext.unit {
        ExtRadiusUnit::M => ext.radius,
        ExtRadiusUnit::Km => ext.radius * 1000.0,
    };
    CircleFence::try_new(center, radius_m)
}

pub fn import_probe(ext: &ExtProbe) -> Result<Probe> {
    Ok(Probe {
        name: ext.name.clone(),
        position: GeoPoint::try_new(ext.lat, ext.lng)?,
    })
}
