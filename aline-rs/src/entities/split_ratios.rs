use itertools::Itertools;
use log::warn;

use crate::error::ValidationError;
use crate::partition;

/// Ordered cut points along a circumference, as fractions in [0, 1] measured from a fixed origin.
///
/// `n_panels - 1` ratios split a circumference into `n_panels` segments.
/// The sequence is always non-decreasing and bounded by [0, 1], so no segment can get a negative width.
/// Values are never mutated in place: an adjustment returns a new sequence (see [`SplitRatios::clamp_and_sort`]).
#[derive(Clone, Debug, PartialEq)]
pub struct SplitRatios {
    ratios: Vec<f64>,
}

impl SplitRatios {
    /// Evenly spaced defaults: ratio `i` is `(i + 1) / n_panels`.
    /// A single panel (or none) has no split points.
    pub fn even(n_panels: usize) -> Self {
        let ratios = (0..n_panels.saturating_sub(1))
            .map(|i| (i + 1) as f64 / n_panels as f64)
            .collect_vec();
        SplitRatios { ratios }
    }

    /// Validates an externally supplied sequence for a skirt of `n_panels` panels.
    pub fn try_new(ratios: Vec<f64>, n_panels: usize) -> Result<Self, ValidationError> {
        if n_panels == 0 {
            return Err(ValidationError::InvalidPanelCount(0));
        }
        if ratios.len() != n_panels - 1 {
            return Err(ValidationError::InvalidSplitRatios(format!(
                "expected {} ratios for {} panels, got {}",
                n_panels - 1,
                n_panels,
                ratios.len()
            )));
        }
        if let Some(r) = ratios.iter().find(|r| !(0.0..=1.0).contains(*r)) {
            return Err(ValidationError::InvalidSplitRatios(format!(
                "ratio {r} lies outside [0, 1]"
            )));
        }
        if let Some((a, b)) = ratios.iter().tuple_windows().find(|(a, b)| a > b) {
            return Err(ValidationError::InvalidSplitRatios(format!(
                "ratios must be non-decreasing, {a} is followed by {b}"
            )));
        }
        Ok(SplitRatios { ratios })
    }

    /// Number of segments these ratios split a circumference into
    pub fn n_panels(&self) -> usize {
        self.ratios.len() + 1
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.ratios
    }

    /// Interval within which the ratio at `index` may move without overtaking its neighbours.
    pub fn bounds(&self, index: usize) -> (f64, f64) {
        let lower = match index {
            0 => 0.0,
            i => self.ratios[i - 1],
        };
        let upper = self.ratios.get(index + 1).copied().unwrap_or(1.0);
        (lower, upper)
    }

    /// Returns a new sequence in which the ratio at `index` is moved to `new_value`,
    /// clamped between its neighbours (or [0, 1] at the ends) and kept sorted.
    ///
    /// An update is never rejected: NaN values and out-of-range indices leave the sequence unchanged.
    pub fn clamp_and_sort(&self, index: usize, new_value: f64) -> SplitRatios {
        if index >= self.ratios.len() {
            warn!(
                "[PARTITION] ignoring adjustment of split {index}, only {} splits exist",
                self.ratios.len()
            );
            return self.clone();
        }
        if new_value.is_nan() {
            return self.clone();
        }
        let (lower, upper) = self.bounds(index);
        let mut ratios = self.ratios.clone();
        ratios[index] = new_value.clamp(lower, upper);
        ratios.sort_by(f64::total_cmp);

        debug_assert!(ratios.iter().tuple_windows().all(|(a, b)| a <= b));
        SplitRatios { ratios }
    }

    /// Widths of the segments these ratios cut out of a circumference of length `total`
    pub fn segment_widths(&self, total: f64) -> Vec<f64> {
        partition::partition(total, self)
    }
}
