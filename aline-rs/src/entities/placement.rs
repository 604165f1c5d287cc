use crate::entities::Panel;
use crate::geometry::geo_traits::Transformable;
use crate::geometry::primitives::{Rect, Trapezoid};
use crate::geometry::{DTransformation, PanelRotation};

/// A panel positioned on the fabric.
///
/// `(x, y)` is the top-left corner of the panel's bounding box in fabric coordinates,
/// with `x` running across the width of the fabric and `y` along its length.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlacement {
    pub panel: Panel,
    pub x: f64,
    pub y: f64,
    pub rotation: PanelRotation,
    /// 0-based index of the row the panel was placed in
    pub row: usize,
}

impl LayoutPlacement {
    /// Width reserved for the panel in its row, regardless of rotation
    pub fn width(&self) -> f64 {
        self.panel.bbox_width()
    }

    /// Length of fabric reserved for the panel, regardless of rotation
    pub fn height(&self) -> f64 {
        self.panel.height_with_seam
    }

    /// Bounding box of the placement in fabric coordinates.
    /// A 180° turn about the center leaves it unchanged.
    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + self.width(),
            y_max: self.y + self.height(),
        }
    }

    /// Transformation taking the panel outline from its reference position to the fabric:
    /// a rotation about the center of the bounding box followed by a translation to `(x, y)`.
    pub fn d_transf(&self) -> DTransformation {
        let center = (self.width() / 2.0, self.height() / 2.0);
        DTransformation::rotate_about(self.rotation.radians(), center, (self.x, self.y))
    }

    /// Seam-inclusive outline of the panel in fabric coordinates
    pub fn outline(&self) -> Trapezoid {
        self.panel.outline().transform_clone(&self.d_transf().compose())
    }
}
