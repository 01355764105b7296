use crate::geofence::CircleFence;

/// A sub-area of a [Site](crate::entities::Site) with its own geofence:
/// a building, yard or wing that positions are tracked against.
#[derive(Clone, Debug)]
pub struct Unit {
    pub id: usize,
    pub name: String,
    pub fence: CircleFence,
}
