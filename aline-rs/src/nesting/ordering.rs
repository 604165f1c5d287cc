use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::entities::Panel;

/// Order in which panels are placed on the fabric: widest seam-inclusive hem first.
/// Ties keep their input order, making the order deterministic for any input.
pub fn placement_order(panels: &[Panel]) -> Vec<&Panel> {
    panels
        .iter()
        .sorted_by_key(|p| Reverse(OrderedFloat(p.hem_width_with_seam)))
        .collect_vec()
}
