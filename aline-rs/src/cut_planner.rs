use log::info;

use crate::entities::CutPlan;
use crate::error::{ValidationError, non_negative_allowance, positive_measurement};

/// Computes how many whole lengths of fabric of `fabric_length` are needed for `wanted_length`,
/// with `seam_allowance` added at both ends, and the length of the remaining piece.
pub fn plan(
    fabric_length: f64,
    wanted_length: f64,
    seam_allowance: f64,
) -> Result<CutPlan, ValidationError> {
    let fabric_length = positive_measurement("fabric length", Some(fabric_length))?;
    let wanted_length = positive_measurement("wanted length", Some(wanted_length))?;
    let seam_allowance = non_negative_allowance("seam allowance", seam_allowance)?;

    let total_wanted = wanted_length + 2.0 * seam_allowance;
    let cuts = total_wanted / fabric_length;
    let full_cuts = cuts.floor();
    // rounding in the division can push `full_cuts` one too high, leaving a tiny negative remainder
    let remainder = f64::max(total_wanted - full_cuts * fabric_length, 0.0);

    let plan = CutPlan {
        fabric_length,
        wanted_length,
        seam_allowance,
        total_wanted,
        cuts,
        full_cuts: full_cuts as usize,
        remainder,
    };
    info!(
        "[CUT] {:.2} wanted ({:.2} with allowances) from lengths of {:.2}: {} full cuts, remainder {:.2}",
        wanted_length, total_wanted, fabric_length, plan.full_cuts, plan.remainder
    );
    Ok(plan)
}
