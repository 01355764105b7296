use geofence_rs::DEFAULT_RING_POINTS;
use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the fencer pipeline
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct FencerConfig {
    /// Number of edge points used to approximate each fence circle
    pub n_ring_points: usize,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for FencerConfig {
    fn default() -> Self {
        Self {
            n_ring_points: DEFAULT_RING_POINTS,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
