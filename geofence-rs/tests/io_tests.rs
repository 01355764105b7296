#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use geofence_rs::io::ext_repr::{ExtFence, ExtInstance, ExtRadiusUnit};
    use geofence_rs::io::geojson::{Geometry, ZoneKind, instance_overlays};
    use geofence_rs::io::import::{import_fence, import_instance};

    fn parse_instance(json: &str) -> ExtInstance {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_radius_unit_defaults_to_meters() {
        let fence: ExtFence =
            serde_json::from_str(r#"{"lat": 13.0827, "lng": 80.248, "radius": 500.0}"#).unwrap();
        assert_eq!(fence.unit, ExtRadiusUnit::M);

        let imported = import_fence(&fence).unwrap();
        assert_eq!(imported.radius, 500.0);
    }

    #[test]
    fn test_kilometers_converted_once_at_import() {
        let fence: ExtFence = serde_json::from_str(
            r#"{"lat": 13.0827, "lng": 80.248, "radius": 1.2, "unit": "km"}"#,
        )
        .unwrap();
        assert_eq!(fence.unit, ExtRadiusUnit::Km);

        let imported = import_fence(&fence).unwrap();
        assert!(approx_eq!(f64, imported.radius, 1_200.0, epsilon = 1e-9));
    }

    #[test]
    fn test_duplicate_site_ids_rejected() {
        let ext = parse_instance(
            r#"{
                "name": "dupes",
                "sites": [
                    {"id": 1, "name": "a", "fence": {"lat": 0.0, "lng": 0.0, "radius": 100.0}},
                    {"id": 1, "name": "b", "fence": {"lat": 1.0, "lng": 1.0, "radius": 100.0}}
                ]
            }"#,
        );
        assert!(import_instance(&ext).is_err());
    }

    #[test]
    fn test_duplicate_unit_ids_rejected() {
        let ext = parse_instance(
            r#"{
                "name": "dupes",
                "sites": [
                    {
                        "id": 1, "name": "a",
                        "fence": {"lat": 0.0, "lng": 0.0, "radius": 1000.0},
                        "units": [
                            {"id": 7, "name": "u1", "fence": {"lat": 0.0, "lng": 0.0, "radius": 10.0}},
                            {"id": 7, "name": "u2", "fence": {"lat": 0.0, "lng": 0.0, "radius": 20.0}}
                        ]
                    }
                ]
            }"#,
        );
        assert!(import_instance(&ext).is_err());
    }

    #[test]
    fn test_invalid_fence_fails_import() {
        let ext = parse_instance(
            r#"{
                "name": "polar",
                "sites": [
                    {"id": 1, "name": "north pole", "fence": {"lat": 89.0, "lng": 0.0, "radius": 100.0}}
                ]
            }"#,
        );
        assert!(import_instance(&ext).is_err());
    }

    #[test]
    fn test_overlays_are_closed_geojson_polygons() {
        let ext = parse_instance(
            r#"{
                "name": "hq",
                "sites": [
                    {
                        "id": 1, "name": "hq",
                        "fence": {"lat": 13.0827, "lng": 80.248, "radius": 500.0},
                        "units": [
                            {"id": 1, "name": "bay", "fence": {"lat": 13.083, "lng": 80.2482, "radius": 120.0}}
                        ]
                    }
                ]
            }"#,
        );
        let instance = import_instance(&ext).unwrap();
        let overlays = instance_overlays(&instance, 64).unwrap();

        assert_eq!(overlays.kind, "FeatureCollection");
        assert_eq!(overlays.features.len(), 2);
        assert_eq!(overlays.features[0].properties.zone, ZoneKind::Site);
        assert_eq!(overlays.features[1].properties.zone, ZoneKind::Unit);

        for feature in &overlays.features {
            let Geometry::Polygon { coordinates } = &feature.geometry;
            assert_eq!(coordinates.len(), 1);
            let ring = &coordinates[0];
            assert_eq!(ring.len(), 65);
            assert_eq!(ring.first(), ring.last());
        }

        //GeoJSON positions are [lng, lat]: the first vertex of the site ring
        //lies due east of the center, so its latitude is the center's
        let Geometry::Polygon { coordinates } = &overlays.features[0].geometry;
        let [lng, lat] = coordinates[0][0];
        assert!(lng > 80.248);
        assert!(approx_eq!(f64, lat, 13.0827, epsilon = 1e-9));
    }

    #[test]
    fn test_output_serializes_as_geojson() {
        let ext = parse_instance(
            r#"{
                "name": "hq",
                "sites": [
                    {"id": 1, "name": "hq", "fence": {"lat": 13.0827, "lng": 80.248, "radius": 500.0}}
                ]
            }"#,
        );
        let instance = import_instance(&ext).unwrap();
        let overlays = instance_overlays(&instance, 8).unwrap();

        let value: serde_json::Value = serde_json::to_value(&overlays).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["type"], "Feature");
        assert_eq!(value["features"][0]["geometry"]["type"], "Polygon");
        assert_eq!(value["features"][0]["properties"]["zone"], "site");
        assert_eq!(
            value["features"][0]["geometry"]["coordinates"][0]
                .as_array()
                .unwrap()
                .len(),
            9
        );
    }
}
