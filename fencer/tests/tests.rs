#[cfg(test)]
mod tests {
    use std::path::Path;

    use test_case::test_case;

    use fencer::config::FencerConfig;
    use fencer::io;
    use fencer::io::output::probe_readings;
    use fencer::io::svg_export::instance_to_svg;
    use geofence_rs::geometry::geo_traits::Contains;
    use geofence_rs::io::geojson::Geometry;
    use geofence_rs::io::geojson::instance_overlays;
    use geofence_rs::io::import::import_instance;

    #[test_case("../assets/chennai.json"; "chennai")]
    #[test_case("../assets/campus.json"; "campus")]
    fn test_instance(instance_path: &str) {
        let config = FencerConfig::default();

        // parse and import the instance
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let instance = import_instance(&ext_instance).unwrap();

        // one closed overlay per fence
        let overlays = instance_overlays(&instance, config.n_ring_points).unwrap();
        let n_fences: usize = instance.sites.iter().map(|s| 1 + s.units.len()).sum();
        assert_eq!(overlays.features.len(), n_fences);

        for feature in &overlays.features {
            let Geometry::Polygon { coordinates } = &feature.geometry;
            assert_eq!(coordinates.len(), 1);
            let ring = &coordinates[0];
            assert_eq!(ring.len(), config.n_ring_points + 1);
            assert_eq!(ring.first(), ring.last());
        }

        // every fence center falls inside its own rendered overlay
        for site in &instance.sites {
            let ring = site.fence.to_ring(config.n_ring_points).unwrap();
            assert!(ring.contains(&site.fence.center));
            for unit in &site.units {
                let ring = unit.fence.to_ring(config.n_ring_points).unwrap();
                assert!(ring.contains(&unit.fence.center));
            }
        }

        // one reading per (probe, site) pair
        let readings = probe_readings(&instance);
        assert_eq!(readings.len(), instance.probes.len() * instance.sites.len());

        let svg = instance_to_svg(&instance, &config).unwrap();
        assert!(svg.to_string().contains("viewBox"));
    }

    #[test]
    fn test_chennai_probe_membership() {
        let ext_instance = io::read_instance(Path::new("../assets/chennai.json")).unwrap();
        let instance = import_instance(&ext_instance).unwrap();
        let readings = probe_readings(&instance);

        let inside = readings
            .iter()
            .find(|r| r.probe == "EMP-1047" && r.site_id == 1)
            .unwrap();
        assert!(inside.inside);
        assert!(inside.units.contains(&1));

        let outside = readings
            .iter()
            .find(|r| r.probe == "EMP-2210" && r.site_id == 1)
            .unwrap();
        assert!(!outside.inside);
        assert!(outside.units.is_empty());
        assert!(outside.boundary_distance_m > 500.0);
    }

    #[test]
    fn test_campus_km_radius_imported_as_meters() {
        let ext_instance = io::read_instance(Path::new("../assets/campus.json")).unwrap();
        let instance = import_instance(&ext_instance).unwrap();

        let campus = instance.sites.iter().find(|s| s.id == 1).unwrap();
        assert_eq!(campus.fence.radius, 1_200.0);

        // the badge inside the campus is also inside the north gate unit
        let readings = probe_readings(&instance);
        let badge = readings
            .iter()
            .find(|r| r.probe == "BADGE-07" && r.site_id == 1)
            .unwrap();
        assert!(badge.inside);
        assert!(badge.units.contains(&1));

        // and outside the annex across town
        let annex = readings
            .iter()
            .find(|r| r.probe == "BADGE-07" && r.site_id == 2)
            .unwrap();
        assert!(!annex.inside);
    }
}
