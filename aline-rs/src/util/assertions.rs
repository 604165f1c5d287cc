//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

use itertools::Itertools;
use log::error;

use crate::entities::{FabricLayout, Panel, SeamAllowances};
use crate::geometry::geo_traits::Shape;
use crate::util::FPA;

pub fn panel_seams_are_additive(panel: &Panel, seams: &SeamAllowances) -> bool {
    FPA(panel.waist_width_with_seam - panel.waist_width) == FPA(2.0 * seams.side)
        && FPA(panel.hem_width_with_seam - panel.hem_width) == FPA(2.0 * seams.side)
        && FPA(panel.height_with_seam - panel.height) == FPA(seams.waist + seams.hem)
}

pub fn layout_is_within_fabric(layout: &FabricLayout) -> bool {
    let fabric_width = FPA(layout.fabric.width);
    for p in &layout.placements {
        if FPA(p.x + p.width()) > fabric_width {
            error!(
                "panel {} exceeds the fabric: x {} + width {} > {}",
                p.panel.id,
                p.x,
                p.width(),
                layout.fabric.width
            );
            return false;
        }
        let outline_bbox = p.outline().bbox();
        if !p.bbox().almost_contains(&outline_bbox) {
            error!(
                "outline of panel {} leaves its bounding box: {:?} vs {:?}",
                p.panel.id,
                outline_bbox,
                p.bbox()
            );
            return false;
        }
    }
    rows_are_consistent(layout)
}

fn rows_are_consistent(layout: &FabricLayout) -> bool {
    let counts_match = layout.rows.iter().all(|row| {
        layout
            .placements
            .iter()
            .filter(|p| p.row == row.index)
            .count()
            == row.n_panels
    });
    let rows_ordered = layout
        .rows
        .iter()
        .tuple_windows()
        .all(|(a, b)| FPA(a.y + a.height) <= FPA(b.y));
    let length_matches = match layout.rows.last() {
        Some(last) => FPA(last.y + last.height) == FPA(layout.required_length),
        None => layout.required_length == 0.0,
    };
    counts_match && rows_ordered && length_matches
}
