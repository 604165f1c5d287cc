use log::{debug, info};

use crate::entities::{Fabric, FabricLayout, LayoutPlacement, LayoutRow, Panel};
use crate::error::ValidationError;
use crate::geometry::PanelRotation;
use crate::nesting::placement_order;
use crate::util::assertions::layout_is_within_fabric;

/// Greedy row (shelf) packer placing panels onto a bolt of [`Fabric`].
///
/// Panels are placed left to right in [`placement_order`]. When the next panel, together with its cut
/// allowance, would overflow the fabric width, the current row is closed and a new one is started below it.
/// Every other panel is turned 180° so the wide hem of one panel sits next to the narrow waist of the next.
///
/// The rotation only changes how a panel is drawn: packing always reserves the full bounding box of a panel,
/// so alternating the rotation does not shorten the required fabric.
#[derive(Clone, Copy, Debug)]
pub struct FabricNester {
    pub fabric: Fabric,
}

impl FabricNester {
    pub fn new(fabric: Fabric) -> Self {
        Self { fabric }
    }

    /// Lays out `panels` on the fabric.
    /// Fails if a panel is wider than the fabric, as it could never be cut from it.
    pub fn layout(&self, panels: &[Panel]) -> Result<FabricLayout, ValidationError> {
        let Fabric {
            width: fabric_width,
            cut_allowance,
        } = self.fabric;

        if let Some(p) = panels.iter().find(|p| p.bbox_width() > fabric_width) {
            return Err(ValidationError::PanelExceedsFabric {
                panel_id: p.id,
                width: p.bbox_width(),
                fabric_width,
            });
        }
        if panels.is_empty() {
            return Ok(FabricLayout::empty(self.fabric));
        }

        let mut placements = Vec::with_capacity(panels.len());
        let mut rows = vec![];
        let mut shelf = Shelf::new(0, 0.0);

        for (pos, panel) in placement_order(panels).into_iter().enumerate() {
            let width = panel.bbox_width();
            if shelf.n_panels > 0 && shelf.cursor + width + cut_allowance > fabric_width {
                // close the row, the next one starts below it and its cut allowance
                let closed = shelf.close(cut_allowance);
                debug!(
                    "[NEST] closed row {} with {} panels, height {:.2}",
                    closed.index, closed.n_panels, closed.height
                );
                shelf = Shelf::new(closed.index + 1, closed.y + closed.height + cut_allowance);
                rows.push(closed);
            }

            let placement = LayoutPlacement {
                panel: panel.clone(),
                x: shelf.cursor,
                y: shelf.y,
                rotation: PanelRotation::alternating(pos),
                row: shelf.index,
            };
            debug!(
                "[NEST] placing panel {} in row {} at ({:.2}, {:.2}), {}",
                panel.id, shelf.index, placement.x, placement.y, placement.rotation
            );
            shelf.push(&placement, cut_allowance);
            placements.push(placement);
        }

        // the last row does not need a trailing allowance
        let last = shelf.close(cut_allowance);
        let required_length = last.y + last.height;
        rows.push(last);

        let layout = FabricLayout {
            fabric: self.fabric,
            placements,
            rows,
            required_length,
        };
        debug_assert!(layout_is_within_fabric(&layout));

        info!(
            "[NEST] laid out {} panels in {} rows on fabric of width {:.2}, required length {:.2} ({:.1}% utilization)",
            layout.placements.len(),
            layout.n_rows(),
            fabric_width,
            layout.required_length,
            layout.utilization() * 100.0
        );
        Ok(layout)
    }
}

/// Lays out `panels` on fabric of width `fabric_width`, keeping `cut_allowance` between panels and rows.
pub fn layout(
    panels: &[Panel],
    fabric_width: f64,
    cut_allowance: f64,
) -> Result<FabricLayout, ValidationError> {
    let fabric = Fabric::try_new(fabric_width, cut_allowance)?;
    FabricNester::new(fabric).layout(panels)
}

/// Row currently being filled
struct Shelf {
    index: usize,
    y: f64,
    cursor: f64,
    height: f64,
    n_panels: usize,
}

impl Shelf {
    fn new(index: usize, y: f64) -> Self {
        Shelf {
            index,
            y,
            cursor: 0.0,
            height: 0.0,
            n_panels: 0,
        }
    }

    fn push(&mut self, placement: &LayoutPlacement, cut_allowance: f64) {
        self.cursor += placement.width() + cut_allowance;
        self.height = f64::max(self.height, placement.height());
        self.n_panels += 1;
    }

    fn close(&self, cut_allowance: f64) -> LayoutRow {
        LayoutRow {
            index: self.index,
            y: self.y,
            height: self.height,
            // the cursor runs one allowance past the last panel
            used_width: f64::max(self.cursor - cut_allowance, 0.0),
            n_panels: self.n_panels,
        }
    }
}
