use serde::{Deserialize, Serialize};

use aline_rs::io::svg::SvgDrawOptions;

/// Configuration of the fabric the panels are laid out on, and of the drawings
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct AlineConfig {
    /// Width of the fabric bolt
    pub fabric_width: f64,
    /// Gap kept between neighbouring panels and between rows
    pub cut_allowance: f64,
    /// Also draw a sheet with one card per panel
    #[serde(default = "default_true")]
    pub draw_panel_sheet: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_true() -> bool {
    true
}

impl Default for AlineConfig {
    fn default() -> Self {
        Self {
            fabric_width: 150.0,
            cut_allowance: 1.0,
            draw_panel_sheet: true,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
