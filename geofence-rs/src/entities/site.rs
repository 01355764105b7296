use crate::entities::Unit;
use crate::geofence::CircleFence;
use crate::geometry::geo_traits::Contains;
use crate::geometry::primitives::GeoPoint;

/// A tracked location: an outer geofence with any number of unit fences
/// inside it.
#[derive(Clone, Debug)]
pub struct Site {
    pub id: usize,
    pub name: String,
    pub fence: CircleFence,
    pub units: Vec<Unit>,
}

impl Site {
    /// Units whose fence contains `point`.
    pub fn units_containing<'a>(&'a self, point: &'a GeoPoint) -> impl Iterator<Item = &'a Unit> {
        self.units.iter().filter(move |u| u.fence.contains(point))
    }
}
