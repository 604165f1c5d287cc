use itertools::Itertools;
use log::trace;

use crate::entities::SplitRatios;

/// Splits a circumference of length `total` into `ratios.n_panels()` segment widths.
///
/// The ratios 0 and 1 are implicit boundaries: segment `i` spans from the previous split (or 0) to split `i` (or 1).
/// The widths sum to `total` up to floating point rounding and are never negative for a valid [`SplitRatios`].
pub fn partition(total: f64, ratios: &SplitRatios) -> Vec<f64> {
    let widths = std::iter::once(0.0)
        .chain(ratios.as_slice().iter().copied())
        .chain(std::iter::once(1.0))
        .tuple_windows()
        .map(|(prev, next)| (next - prev) * total)
        .collect_vec();

    debug_assert!(widths.len() == ratios.n_panels());
    trace!("[PARTITION] split {total:.3} into {widths:.3?}");
    widths
}
