use itertools::Itertools;
use log::{debug, info};

use crate::entities::{Measurements, Panel, SeamAllowances, SplitRatios};
use crate::error::ValidationError;
use crate::partition::partition;
use crate::util::assertions::panel_seams_are_additive;

/// Combines the segment widths of a single panel with the skirt length and seam allowances.
/// Pure arithmetic: the side allowance is added to both side edges, the waist and hem allowances to the height.
pub fn build_panel(
    id: usize,
    waist_segment_width: f64,
    hem_segment_width: f64,
    skirt_length: f64,
    seam_allowances: &SeamAllowances,
) -> Panel {
    let panel = Panel {
        id,
        waist_width: waist_segment_width,
        hem_width: hem_segment_width,
        height: skirt_length,
        waist_width_with_seam: waist_segment_width + seam_allowances.width_addition(),
        hem_width_with_seam: hem_segment_width + seam_allowances.width_addition(),
        height_with_seam: skirt_length + seam_allowances.height_addition(),
    };
    debug_assert!(panel_seams_are_additive(&panel, seam_allowances));
    panel
}

/// Builds all panels of a skirt.
///
/// The waist and hem circumferences are partitioned independently, so panel `i` can have
/// a different share of the waist than of the hem.
/// Both split sequences must be defined for `measurements.panel_count` panels.
pub fn build_panels(
    measurements: &Measurements,
    waist_splits: &SplitRatios,
    hem_splits: &SplitRatios,
) -> Result<Vec<Panel>, ValidationError> {
    for (edge, splits) in [("waist", waist_splits), ("hem", hem_splits)] {
        if splits.n_panels() != measurements.panel_count {
            return Err(ValidationError::InvalidSplitRatios(format!(
                "{edge} splits define {} panels, expected {}",
                splits.n_panels(),
                measurements.panel_count
            )));
        }
    }

    let waist_widths = partition(measurements.waist_circumference, waist_splits);
    let hem_widths = partition(measurements.hem_circumference, hem_splits);

    let panels = waist_widths
        .into_iter()
        .zip(hem_widths)
        .enumerate()
        .map(|(i, (waist_w, hem_w))| {
            build_panel(
                i + 1,
                waist_w,
                hem_w,
                measurements.skirt_length,
                &measurements.seam_allowances,
            )
        })
        .collect_vec();

    for p in &panels {
        debug!(
            "[PANELS] panel {}: waist {:.2} ({:.2}), hem {:.2} ({:.2}), length {:.2} ({:.2})",
            p.id,
            p.waist_width,
            p.waist_width_with_seam,
            p.hem_width,
            p.hem_width_with_seam,
            p.height,
            p.height_with_seam
        );
    }
    info!(
        "[PANELS] built {} panels for waist {:.2}, hem {:.2}, length {:.2}",
        panels.len(),
        measurements.waist_circumference,
        measurements.hem_circumference,
        measurements.skirt_length
    );

    Ok(panels)
}
