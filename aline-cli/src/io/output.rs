use aline_rs::io::ext_repr::{ExtCutInstance, ExtCutPlan, ExtSkirtInstance, ExtSkirtSolution};
use serde::{Deserialize, Serialize};

use crate::config::AlineConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct SkirtOutput {
    #[serde(flatten)]
    pub instance: ExtSkirtInstance,
    pub solution: ExtSkirtSolution,
    pub config: AlineConfig,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct CutOutput {
    #[serde(flatten)]
    pub instance: ExtCutInstance,
    pub solution: ExtCutPlan,
}
