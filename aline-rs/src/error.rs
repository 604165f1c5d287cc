use thiserror::Error;

/// Input validation failures.
/// None of these are transient: the caller recovers by asking for corrected input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A length measurement is missing, non-finite or not strictly positive.
    #[error("{name} must be a positive number, got {}", fmt_value(.value))]
    InvalidMeasurement {
        name: &'static str,
        value: Option<f64>,
    },
    /// The number of panels is not at least 1.
    #[error("panel count must be at least 1, got {0}")]
    InvalidPanelCount(i64),
    /// The fabric width is not strictly positive.
    #[error("fabric width must be a positive number, got {0}")]
    InvalidFabricWidth(f64),
    /// A seam or cut allowance is negative or non-finite.
    #[error("{name} must be zero or a positive number, got {value}")]
    InvalidAllowance { name: &'static str, value: f64 },
    /// A supplied split ratio sequence is of the wrong length, unsorted or out of [0, 1].
    #[error("invalid split ratios: {0}")]
    InvalidSplitRatios(String),
    /// A panel is wider than the fabric and cannot be cut from it.
    #[error("panel {panel_id} is {width:.2} wide, which does not fit on fabric of width {fabric_width:.2}")]
    PanelExceedsFabric {
        panel_id: usize,
        width: f64,
        fabric_width: f64,
    },
}

fn fmt_value(value: &Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => "nothing".to_string(),
    }
}

/// Checks that a length measurement was provided and is strictly positive.
pub fn positive_measurement(name: &'static str, value: Option<f64>) -> Result<f64, ValidationError> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(ValidationError::InvalidMeasurement { name, value }),
    }
}

/// Checks that an allowance is finite and non-negative.
pub fn non_negative_allowance(name: &'static str, value: f64) -> Result<f64, ValidationError> {
    match value.is_finite() && value >= 0.0 {
        true => Ok(value),
        false => Err(ValidationError::InvalidAllowance { name, value }),
    }
}
