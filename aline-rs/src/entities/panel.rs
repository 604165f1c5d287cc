use crate::geometry::primitives::Trapezoid;

/// A single trapezoidal fabric piece of a skirt, forming one vertical segment.
///
/// Raw dimensions describe the finished panel, the `*_with_seam` counterparts include the seam allowances
/// and are what is actually cut from the fabric.
/// Panels are built by [`build_panel`](crate::panel_builder::build_panel) and never modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    /// 1-based position of the panel within its skirt
    pub id: usize,
    pub waist_width: f64,
    pub hem_width: f64,
    pub height: f64,
    pub waist_width_with_seam: f64,
    pub hem_width_with_seam: f64,
    pub height_with_seam: f64,
}

impl Panel {
    /// Width of the bounding box of the seam-inclusive panel
    pub fn bbox_width(&self) -> f64 {
        f64::max(self.waist_width_with_seam, self.hem_width_with_seam)
    }

    /// Area of fabric covered by the seam-inclusive panel
    pub fn area(&self) -> f64 {
        (self.waist_width_with_seam + self.hem_width_with_seam) / 2.0 * self.height_with_seam
    }

    /// Seam-inclusive outline of the panel in its upright reference position
    pub fn outline(&self) -> Trapezoid {
        Trapezoid::new(
            self.waist_width_with_seam,
            self.hem_width_with_seam,
            self.height_with_seam,
        )
    }
}
