use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgFenceThemes,
    ///draws a dot at the center of each fence
    #[serde(default)]
    pub draw_centers: bool,
    ///draws the probe positions
    #[serde(default = "default_draw_probes")]
    pub draw_probes: bool,
}

fn default_draw_probes() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgFenceThemes::default(),
            draw_centers: false,
            draw_probes: true,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgFenceThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgFenceThemes {
    pub fn get_theme(&self) -> SvgFenceTheme {
        match self {
            SvgFenceThemes::EarthTones => EARTH_TONES_THEME,
            SvgFenceThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgFenceTheme {
    pub stroke_width_multiplier: f64,
    pub site_fill: &'static str,
    pub unit_fill: &'static str,
    pub probe_fill: &'static str,
}

pub static EARTH_TONES_THEME: SvgFenceTheme = SvgFenceTheme {
    stroke_width_multiplier: 2.0,
    site_fill: "#CC824A",
    unit_fill: "#FFC879",
    probe_fill: "#2D2D2D",
};

pub static GRAY_THEME: SvgFenceTheme = SvgFenceTheme {
    stroke_width_multiplier: 2.5,
    site_fill: "#C3C3C3",
    unit_fill: "#8F8F8F",
    probe_fill: "#2D2D2D",
};
