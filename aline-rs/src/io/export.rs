use itertools::Itertools;

use crate::entities::{CalculatorSession, CutPlan, FabricLayout, LayoutPlacement, Panel};
use crate::io::ext_repr::{
    ExtCutPlan, ExtLayout, ExtPanel, ExtPlacement, ExtSkirtSolution,
};

pub fn export_panel(panel: &Panel) -> ExtPanel {
    ExtPanel {
        id: panel.id,
        waist_width: panel.waist_width,
        hem_width: panel.hem_width,
        height: panel.height,
        waist_width_with_seam: panel.waist_width_with_seam,
        hem_width_with_seam: panel.hem_width_with_seam,
        height_with_seam: panel.height_with_seam,
    }
}

pub fn export_placement(placement: &LayoutPlacement) -> ExtPlacement {
    ExtPlacement {
        panel_id: placement.panel.id,
        x: placement.x,
        y: placement.y,
        row: placement.row,
        rotation: placement.rotation,
        outline: placement
            .outline()
            .corners
            .iter()
            .map(|&c| c.into())
            .collect_vec(),
    }
}

pub fn export_layout(layout: &FabricLayout) -> ExtLayout {
    ExtLayout {
        fabric_width: layout.fabric.width,
        cut_allowance: layout.fabric.cut_allowance,
        required_length: layout.required_length,
        n_rows: layout.n_rows(),
        utilization: layout.utilization(),
        placements: layout.placements.iter().map(export_placement).collect_vec(),
    }
}

/// Exports the panels of a session together with their layout
pub fn export_skirt(
    session: &CalculatorSession,
    panels: &[Panel],
    layout: &FabricLayout,
) -> ExtSkirtSolution {
    ExtSkirtSolution {
        panels: panels.iter().map(export_panel).collect_vec(),
        waist_splits: session.waist_splits().as_slice().to_vec(),
        hem_splits: session.hem_splits().as_slice().to_vec(),
        layout: export_layout(layout),
    }
}

pub fn export_cut_plan(plan: &CutPlan) -> ExtCutPlan {
    ExtCutPlan {
        total_wanted: plan.total_wanted,
        cuts: plan.cuts,
        full_cuts: plan.full_cuts,
        remainder: plan.remainder,
        pieces: plan.pieces(),
        explanation: plan.to_string(),
    }
}
