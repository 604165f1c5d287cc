use log::debug;

use crate::entities::{Measurements, Panel, SplitRatios};
use crate::error::ValidationError;
use crate::panel_builder::build_panels;

/// State of an interactive skirt calculation, owned by the caller.
///
/// Holds the measurements together with the waist and hem split points.
/// Changing the panel count resets both split sequences to evenly spaced defaults,
/// dragging a split point clamps it between its neighbours.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorSession {
    measurements: Measurements,
    waist_splits: SplitRatios,
    hem_splits: SplitRatios,
}

impl CalculatorSession {
    pub fn new(measurements: Measurements) -> Self {
        let n = measurements.panel_count;
        Self {
            measurements,
            waist_splits: SplitRatios::even(n),
            hem_splits: SplitRatios::even(n),
        }
    }

    /// Starts from explicit split points, both defined for `measurements.panel_count` panels.
    pub fn with_splits(
        measurements: Measurements,
        waist_splits: SplitRatios,
        hem_splits: SplitRatios,
    ) -> Result<Self, ValidationError> {
        for splits in [&waist_splits, &hem_splits] {
            if splits.n_panels() != measurements.panel_count {
                return Err(ValidationError::InvalidSplitRatios(format!(
                    "splits define {} panels, expected {}",
                    splits.n_panels(),
                    measurements.panel_count
                )));
            }
        }
        Ok(Self {
            measurements,
            waist_splits,
            hem_splits,
        })
    }

    pub fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    /// Replaces the measurements. The split points are kept unless the panel count changes.
    pub fn set_measurements(&mut self, measurements: Measurements) {
        let panel_count_changed = measurements.panel_count != self.measurements.panel_count;
        self.measurements = measurements;
        if panel_count_changed {
            self.waist_splits = SplitRatios::even(measurements.panel_count);
            self.hem_splits = SplitRatios::even(measurements.panel_count);
            debug!("[SESSION] panel count changed to {}, splits reset", measurements.panel_count);
        }
    }

    pub fn waist_splits(&self) -> &SplitRatios {
        &self.waist_splits
    }

    pub fn hem_splits(&self) -> &SplitRatios {
        &self.hem_splits
    }

    /// Changes the number of panels, resetting both split sequences to even spacing.
    pub fn set_panel_count(&mut self, panel_count: i64) -> Result<(), ValidationError> {
        if panel_count <= 0 {
            return Err(ValidationError::InvalidPanelCount(panel_count));
        }
        let n = panel_count as usize;
        self.measurements.panel_count = n;
        self.waist_splits = SplitRatios::even(n);
        self.hem_splits = SplitRatios::even(n);
        debug!("[SESSION] panel count set to {n}, splits reset");
        Ok(())
    }

    /// Moves waist split `index` towards `value` and returns the resulting waist segment widths.
    pub fn drag_waist_split(&mut self, index: usize, value: f64) -> Vec<f64> {
        self.waist_splits = self.waist_splits.clamp_and_sort(index, value);
        debug!("[SESSION] waist splits: {:.3?}", self.waist_splits.as_slice());
        self.waist_widths()
    }

    /// Moves hem split `index` towards `value` and returns the resulting hem segment widths.
    pub fn drag_hem_split(&mut self, index: usize, value: f64) -> Vec<f64> {
        self.hem_splits = self.hem_splits.clamp_and_sort(index, value);
        debug!("[SESSION] hem splits: {:.3?}", self.hem_splits.as_slice());
        self.hem_widths()
    }

    pub fn waist_widths(&self) -> Vec<f64> {
        self.waist_splits
            .segment_widths(self.measurements.waist_circumference)
    }

    pub fn hem_widths(&self) -> Vec<f64> {
        self.hem_splits
            .segment_widths(self.measurements.hem_circumference)
    }

    /// Builds the panels for the current state
    pub fn panels(&self) -> Result<Vec<Panel>, ValidationError> {
        build_panels(&self.measurements, &self.waist_splits, &self.hem_splits)
    }
}
