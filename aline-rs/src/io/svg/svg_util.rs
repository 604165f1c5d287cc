use serde::{Deserialize, Serialize};
use svg::node::element::{Line, Polygon};

use crate::geometry::DTransformation;
use crate::geometry::primitives::Trapezoid;

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    /// Draws the `P<id>` label in every panel
    #[serde(default = "default_true")]
    pub draw_labels: bool,
    /// Draws a dashed line at the bottom of every row
    #[serde(default)]
    pub draw_row_guides: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            draw_labels: true,
            draw_row_guides: false,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgLayoutTheme {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutTheme {
    pub fn colors(&self) -> ThemeColors {
        match self {
            SvgLayoutTheme::EarthTones => EARTH_TONES_THEME,
            SvgLayoutTheme::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ThemeColors {
    pub stroke_width_multiplier: f64,
    pub fabric_fill: &'static str,
    pub background_fill: &'static str,
    pub text_fill: &'static str,
    /// Panels are colored by id when not set
    pub panel_fill: Option<&'static str>,
}

pub static EARTH_TONES_THEME: ThemeColors = ThemeColors {
    stroke_width_multiplier: 2.0,
    fabric_fill: "#E0E0E0",
    background_fill: "#F9F9F9",
    text_fill: "#333333",
    panel_fill: None,
};

pub static GRAY_THEME: ThemeColors = ThemeColors {
    stroke_width_multiplier: 2.5,
    fabric_fill: "#C3C3C3",
    background_fill: "#FFFFFF",
    text_fill: "#000000",
    panel_fill: Some("#8F8F8F"),
};

/// Fill color of a panel, cycling through the hue wheel by panel id
pub fn panel_fill(colors: &ThemeColors, panel_id: usize) -> String {
    match colors.panel_fill {
        Some(fill) => fill.to_string(),
        None => format!("hsl({}, 70%, 70%)", (panel_id * 45) % 360),
    }
}

pub fn trapezoid_polygon(trapezoid: &Trapezoid, scale: f64, style: &[(&str, &str)]) -> Polygon {
    let points = trapezoid
        .corners
        .iter()
        .map(|c| format!("{:.3},{:.3}", c.0 * scale, c.1 * scale))
        .collect::<Vec<_>>()
        .join(" ");
    style
        .iter()
        .fold(Polygon::new().set("points", points), |poly, (k, v)| {
            poly.set(*k, *v)
        })
}

pub fn line((x1, y1): (f64, f64), (x2, y2): (f64, f64), style: &[(&str, &str)]) -> Line {
    let line = Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2);
    style.iter().fold(line, |l, (k, v)| l.set(*k, *v))
}

pub fn transform_to_svg(dt: DTransformation, scale: f64) -> String {
    //https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/transform
    //operations are effectively applied from right to left
    let (tx, ty) = dt.translation();
    let r = dt.rotation().to_degrees();
    format!("translate({} {}) rotate({r})", tx * scale, ty * scale)
}
