pub mod ext_repr;
pub mod geojson;
pub mod import;
