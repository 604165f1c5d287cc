use serde::{Deserialize, Serialize};

use crate::geometry::PanelRotation;

/// External representation of a skirt to be calculated
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSkirtInstance {
    /// The name of the instance
    pub name: String,
    pub measurements: ExtMeasurements,
    /// Split ratios along the waist, evenly spaced if not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_splits: Option<Vec<f64>>,
    /// Split ratios along the hem, evenly spaced if not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hem_splits: Option<Vec<f64>>,
}

/// External representation of [`Measurements`](crate::entities::Measurements).
/// Measurements which have not been provided yet are left out.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExtMeasurements {
    pub waist_circumference: Option<f64>,
    pub hem_circumference: Option<f64>,
    pub skirt_length: Option<f64>,
    /// Truncated towards zero
    pub panel_count: f64,
    #[serde(default)]
    pub waist_seam_allowance: f64,
    #[serde(default)]
    pub side_seam_allowance: f64,
    #[serde(default)]
    pub hem_seam_allowance: f64,
}

/// External representation of a straight cut calculation
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCutInstance {
    /// The name of the instance
    pub name: String,
    /// Length of a single cut of the main fabric
    pub fabric_length: Option<f64>,
    pub wanted_length: Option<f64>,
    #[serde(default)]
    pub seam_allowance: f64,
}

/// External representation of a [`Panel`](crate::entities::Panel)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPanel {
    pub id: usize,
    pub waist_width: f64,
    pub hem_width: f64,
    pub height: f64,
    pub waist_width_with_seam: f64,
    pub hem_width_with_seam: f64,
    pub height_with_seam: f64,
}

/// External representation of a [`LayoutPlacement`](crate::entities::LayoutPlacement)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    /// Id of the placed panel
    pub panel_id: usize,
    pub x: f64,
    pub y: f64,
    pub row: usize,
    pub rotation: PanelRotation,
    /// Corners of the seam-inclusive outline on the fabric: waist-left, waist-right, hem-right, hem-left
    pub outline: Vec<(f64, f64)>,
}

/// External representation of a [`FabricLayout`](crate::entities::FabricLayout)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLayout {
    pub fabric_width: f64,
    pub cut_allowance: f64,
    pub required_length: f64,
    pub n_rows: usize,
    /// Seam-inclusive panel area divided by the area of the required fabric
    pub utilization: f64,
    pub placements: Vec<ExtPlacement>,
}

/// Panels of a skirt and their layout on the fabric
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSkirtSolution {
    pub panels: Vec<ExtPanel>,
    pub waist_splits: Vec<f64>,
    pub hem_splits: Vec<f64>,
    pub layout: ExtLayout,
}

/// External representation of a [`CutPlan`](crate::entities::CutPlan)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCutPlan {
    pub total_wanted: f64,
    pub cuts: f64,
    pub full_cuts: usize,
    pub remainder: f64,
    pub pieces: Vec<f64>,
    pub explanation: String,
}
