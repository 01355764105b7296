mod geo_point;
mod geo_rect;
mod ring;

pub use geo_point::GeoPoint;
pub use geo_rect::GeoRect;
pub use ring::Ring;
