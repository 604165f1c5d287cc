use crate::error::{ValidationError, non_negative_allowance, positive_measurement};

/// Extra material added beyond the finished edges of every panel, per edge type.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SeamAllowances {
    pub waist: f64,
    /// Added on both side edges of a panel
    pub side: f64,
    pub hem: f64,
}

impl SeamAllowances {
    /// Negative or non-finite allowances are rejected.
    pub fn try_new(waist: f64, side: f64, hem: f64) -> Result<Self, ValidationError> {
        Ok(SeamAllowances {
            waist: non_negative_allowance("waist seam allowance", waist)?,
            side: non_negative_allowance("side seam allowance", side)?,
            hem: non_negative_allowance("hem seam allowance", hem)?,
        })
    }

    /// Total width added to every panel edge running across the skirt
    pub fn width_addition(&self) -> f64 {
        2.0 * self.side
    }

    /// Total length added to every panel
    pub fn height_addition(&self) -> f64 {
        self.waist + self.hem
    }
}

/// Validated set of body measurements describing a panelled skirt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurements {
    pub waist_circumference: f64,
    pub hem_circumference: f64,
    pub skirt_length: f64,
    pub panel_count: usize,
    pub seam_allowances: SeamAllowances,
}

impl Measurements {
    /// Validates the raw inputs. A `None` measurement has not been provided yet.
    /// Checks happen before any computation, the first failure is returned.
    pub fn try_new(
        waist_circumference: Option<f64>,
        hem_circumference: Option<f64>,
        skirt_length: Option<f64>,
        panel_count: i64,
        seam_allowances: SeamAllowances,
    ) -> Result<Self, ValidationError> {
        let waist_circumference = positive_measurement("waist circumference", waist_circumference)?;
        let hem_circumference = positive_measurement("hem circumference", hem_circumference)?;
        let skirt_length = positive_measurement("skirt length", skirt_length)?;
        if panel_count <= 0 {
            return Err(ValidationError::InvalidPanelCount(panel_count));
        }

        Ok(Measurements {
            waist_circumference,
            hem_circumference,
            skirt_length,
            panel_count: panel_count as usize,
            seam_allowances,
        })
    }
}
