use std::fmt::Display;

use itertools::Itertools;

/// How a wanted length of fabric is obtained from cuts of a fixed length.
#[derive(Clone, Debug, PartialEq)]
pub struct CutPlan {
    /// Length of a single cut of the main fabric
    pub fabric_length: f64,
    pub wanted_length: f64,
    /// Allowance added at both ends of the wanted length
    pub seam_allowance: f64,
    /// Wanted length including both allowances
    pub total_wanted: f64,
    /// Fractional number of fabric lengths needed
    pub cuts: f64,
    /// Number of whole fabric lengths needed
    pub full_cuts: usize,
    /// Length of the final partial piece, 0 if the wanted length is a whole multiple
    pub remainder: f64,
}

impl CutPlan {
    /// Piece lengths making up the total wanted length: `full_cuts` whole lengths,
    /// followed by the remainder if there is one.
    pub fn pieces(&self) -> Vec<f64> {
        std::iter::repeat_n(self.fabric_length, self.full_cuts)
            .chain((self.remainder > 0.0).then_some(self.remainder))
            .collect_vec()
    }

    pub fn n_pieces(&self) -> usize {
        self.full_cuts + usize::from(self.remainder > 0.0)
    }
}

impl Display for CutPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "You need to cut the main fabric {:.2} times.", self.cuts)?;
        if self.full_cuts > 0 {
            write!(
                f,
                " Meaning, you will have {} piece(s) of {}cm.",
                self.full_cuts, self.fabric_length
            )?;
        }
        if self.remainder > 0.0 {
            write!(f, " And the final piece will be {:.2}cm.", self.remainder)?;
        } else if self.full_cuts > 0 {
            write!(f, " All pieces will be {}cm.", self.fabric_length)?;
        }
        Ok(())
    }
}
