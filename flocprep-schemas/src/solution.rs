use serde::{Deserialize, Serialize};

/// Inputs for splitting a target amount into solute and solvent portions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolutionSpec {
    pub target_amount: f64,
    pub concentration_percent: f64,
}

/// The solute/solvent split of a prepared solution.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SolutionSplit {
    pub solute_amount: f64,
    pub solvent_amount: f64,
}

impl SolutionSplit {
    /// A split with both portions at zero, for recovery at the form boundary.
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn total(&self) -> f64 {
        self.solute_amount + self.solvent_amount
    }
}
