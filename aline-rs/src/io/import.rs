use anyhow::{Context, Result};
use log::debug;

use crate::cut_planner;
use crate::entities::{CalculatorSession, CutPlan, Measurements, SeamAllowances, SplitRatios};
use crate::error::positive_measurement;
use crate::io::ext_repr::{ExtCutInstance, ExtMeasurements, ExtSkirtInstance};

/// Validates external measurements. The panel count is truncated towards zero before it is checked.
pub fn import_measurements(ext: &ExtMeasurements) -> Result<Measurements> {
    let seam_allowances = SeamAllowances::try_new(
        ext.waist_seam_allowance,
        ext.side_seam_allowance,
        ext.hem_seam_allowance,
    )?;
    let panel_count = match ext.panel_count.is_finite() {
        true => ext.panel_count.trunc() as i64,
        false => 0,
    };
    let measurements = Measurements::try_new(
        ext.waist_circumference,
        ext.hem_circumference,
        ext.skirt_length,
        panel_count,
        seam_allowances,
    )?;
    Ok(measurements)
}

/// Imports a skirt instance into a [`CalculatorSession`].
/// Split sequences which are not specified default to even spacing.
pub fn import_skirt(ext_instance: &ExtSkirtInstance) -> Result<CalculatorSession> {
    let measurements = import_measurements(&ext_instance.measurements)
        .with_context(|| format!("invalid measurements in instance '{}'", ext_instance.name))?;
    let n = measurements.panel_count;

    let import_splits = |splits: &Option<Vec<f64>>, edge: &str| -> Result<SplitRatios> {
        match splits {
            None => Ok(SplitRatios::even(n)),
            Some(ratios) => SplitRatios::try_new(ratios.clone(), n)
                .with_context(|| format!("invalid {edge} splits in instance '{}'", ext_instance.name)),
        }
    };
    let waist_splits = import_splits(&ext_instance.waist_splits, "waist")?;
    let hem_splits = import_splits(&ext_instance.hem_splits, "hem")?;

    debug!(
        "[IO] imported instance '{}' with {} panels",
        ext_instance.name, n
    );
    Ok(CalculatorSession::with_splits(
        measurements,
        waist_splits,
        hem_splits,
    )?)
}

/// Validates a straight cut instance and plans its cuts.
pub fn import_cut_plan(ext_instance: &ExtCutInstance) -> Result<CutPlan> {
    let plan = positive_measurement("fabric length", ext_instance.fabric_length)
        .and_then(|fabric_length| {
            let wanted_length = positive_measurement("wanted length", ext_instance.wanted_length)?;
            cut_planner::plan(fabric_length, wanted_length, ext_instance.seam_allowance)
        })
        .with_context(|| format!("invalid cut instance '{}'", ext_instance.name))?;
    Ok(plan)
}
