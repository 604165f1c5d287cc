use std::f64::consts::PI;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Orientation of a panel on the fabric.
/// A flipped panel is turned 180° about the center of its bounding box, putting the hem edge on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PanelRotation {
    #[default]
    Upright,
    Flipped,
}

impl PanelRotation {
    /// Alternating orientation for the panel at `position` (0-based) in placement order
    pub fn alternating(position: usize) -> Self {
        match position % 2 {
            0 => PanelRotation::Upright,
            _ => PanelRotation::Flipped,
        }
    }

    pub fn radians(&self) -> f64 {
        match self {
            PanelRotation::Upright => 0.0,
            PanelRotation::Flipped => PI,
        }
    }

    pub fn degrees(&self) -> f64 {
        match self {
            PanelRotation::Upright => 0.0,
            PanelRotation::Flipped => 180.0,
        }
    }

    pub fn is_flipped(&self) -> bool {
        *self == PanelRotation::Flipped
    }
}

impl Display for PanelRotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
