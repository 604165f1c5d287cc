use crate::error::{ValidationError, non_negative_allowance};

/// Bolt of fabric of fixed width and unbounded length on which panels are laid out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fabric {
    pub width: f64,
    /// Gap kept between neighbouring panels and between rows
    pub cut_allowance: f64,
}

impl Fabric {
    pub fn try_new(width: f64, cut_allowance: f64) -> Result<Self, ValidationError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(ValidationError::InvalidFabricWidth(width));
        }
        let cut_allowance = non_negative_allowance("cut allowance", cut_allowance)?;
        Ok(Fabric {
            width,
            cut_allowance,
        })
    }
}
