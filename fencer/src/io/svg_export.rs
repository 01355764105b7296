use anyhow::{Result, ensure};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Path, Title};

use geofence_rs::entities::Instance;
use geofence_rs::geometry::geo_traits::Shape;
use geofence_rs::geometry::primitives::{GeoPoint, GeoRect, Ring};

use crate::config::FencerConfig;

/// Flat projection from degree space to SVG screen space: longitude scaled
/// by the cosine of the viewport's reference latitude, latitude flipped so
/// north points up.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    lng_scale: f64,
}

impl Projection {
    pub fn new(ref_lat: f64) -> Self {
        Projection {
            lng_scale: ref_lat.to_radians().cos(),
        }
    }

    pub fn apply(&self, p: &GeoPoint) -> (f64, f64) {
        (p.lng * self.lng_scale, -p.lat)
    }
}

pub fn ring_data(ring: &Ring, proj: &Projection) -> Data {
    //closing point excluded, Data::close() closes the path
    let points = ring.points();
    let mut data = Data::new().move_to(proj.apply(&points[0]));
    for p in &points[1..points.len() - 1] {
        data = data.line_to(proj.apply(p));
    }
    data.close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn point((x, y): (f64, f64), fill: &str, rad: f64) -> Circle {
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", rad)
        .set("fill", fill)
}

/// Renders every fence overlay (and optionally centers and probes) of
/// `instance` into a single SVG document.
pub fn instance_to_svg(instance: &Instance, config: &FencerConfig) -> Result<Document> {
    ensure!(
        !instance.sites.is_empty(),
        "cannot render an instance without sites"
    );

    let theme = config.svg_draw_options.theme.get_theme();
    let n = config.n_ring_points;

    //generate all rings up front, the viewport is derived from them
    let mut site_rings = vec![];
    for site in &instance.sites {
        let site_ring = site.fence.to_ring(n)?;
        let unit_rings = site
            .units
            .iter()
            .map(|u| u.fence.to_ring(n).map(|r| (u, r)))
            .collect::<Result<Vec<_>>>()?;
        site_rings.push((site, site_ring, unit_rings));
    }

    let vbox_deg = {
        let mut vbox = site_rings
            .iter()
            .map(|(_, ring, _)| ring.bbox())
            .reduce(GeoRect::bounding_rect)
            .expect("at least one site");
        if let Some(probe_box) = GeoRect::bounding(instance.probes.iter().map(|p| p.position)) {
            vbox = GeoRect::bounding_rect(vbox, probe_box);
        }
        vbox.scale(1.05)
    };

    let proj = Projection::new(vbox_deg.centroid().lat);
    let (x_min, y_min) = proj.apply(&GeoPoint {
        lat: vbox_deg.lat_max,
        lng: vbox_deg.lng_min,
    });
    let (x_max, y_max) = proj.apply(&GeoPoint {
        lat: vbox_deg.lat_min,
        lng: vbox_deg.lng_max,
    });
    //an instance of only degenerate fences has no extent, pad the viewport
    let width = f64::max(x_max - x_min, 1e-3);
    let height = f64::max(y_max - y_min, 1e-3);

    let stroke_width = f64::min(width, height) * 0.001 * theme.stroke_width_multiplier;

    let mut document = Document::new().set("viewBox", (x_min, y_min, width, height));

    for (site, site_ring, unit_rings) in &site_rings {
        let mut site_group = Group::new().set("id", format!("site_{}", site.id));
        site_group = site_group.add(Title::new(format!(
            "site, id: {}, name: {}, radius: {:.1}m",
            site.id, site.name, site.fence.radius
        )));

        site_group = site_group.add(data_to_path(
            ring_data(site_ring, &proj),
            &[
                ("fill", theme.site_fill),
                ("fill-opacity", "0.50"),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ));

        for (unit, unit_ring) in unit_rings {
            let unit_group = Group::new()
                .set("id", format!("unit_{}_{}", site.id, unit.id))
                .add(Title::new(format!(
                    "unit, id: {}, name: {}, radius: {:.1}m",
                    unit.id, unit.name, unit.fence.radius
                )))
                .add(data_to_path(
                    ring_data(unit_ring, &proj),
                    &[
                        ("fill", theme.unit_fill),
                        ("fill-opacity", "0.50"),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{stroke_width}")),
                    ],
                ));
            site_group = site_group.add(unit_group);
        }

        if config.svg_draw_options.draw_centers {
            site_group = site_group.add(point(
                proj.apply(&site.fence.center),
                theme.probe_fill,
                2.0 * stroke_width,
            ));
        }

        document = document.add(site_group);
    }

    if config.svg_draw_options.draw_probes {
        let mut probe_group = Group::new().set("id", "probes");
        for probe in &instance.probes {
            let dot = point(
                proj.apply(&probe.position),
                theme.probe_fill,
                3.0 * stroke_width,
            )
            .add(Title::new(probe.name.clone()));
            probe_group = probe_group.add(dot);
        }
        document = document.add(probe_group);
    }

    Ok(document)
}
