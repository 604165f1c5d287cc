use crate::entities::{Fabric, LayoutPlacement};

/// A horizontal row (shelf) of panels spanning the fabric width.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutRow {
    pub index: usize,
    /// Distance from the start of the fabric to the top of the row
    pub y: f64,
    /// Height of the tallest panel in the row
    pub height: f64,
    /// Width covered by the panels in the row, including the cut allowances between them
    pub used_width: f64,
    pub n_panels: usize,
}

/// Result of laying out a sequence of panels on a [`Fabric`].
#[derive(Clone, Debug, PartialEq)]
pub struct FabricLayout {
    pub fabric: Fabric,
    /// Placements in placement order (widest hem first)
    pub placements: Vec<LayoutPlacement>,
    pub rows: Vec<LayoutRow>,
    /// Total length of fabric needed to cut all panels
    pub required_length: f64,
}

impl FabricLayout {
    pub fn empty(fabric: Fabric) -> Self {
        FabricLayout {
            fabric,
            placements: vec![],
            rows: vec![],
            required_length: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Total seam-inclusive area of the placed panels
    pub fn panel_area(&self) -> f64 {
        self.placements.iter().map(|p| p.panel.area()).sum()
    }

    /// Fraction of the required fabric covered by panels. 0 for an empty layout.
    pub fn utilization(&self) -> f64 {
        let fabric_area = self.fabric.width * self.required_length;
        match fabric_area > 0.0 {
            true => self.panel_area() / fabric_area,
            false => 0.0,
        }
    }
}
