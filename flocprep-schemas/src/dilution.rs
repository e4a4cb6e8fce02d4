use serde::{Deserialize, Serialize};

/// Inputs for sizing a working dilution from an existing stock solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DilutionSpec {
    pub stock_concentration_percent: f64,
    pub final_amount: f64,
    pub final_concentration_percent: f64,
    pub available_stock: f64,
}

/// The stock/solvent split for a working dilution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DilutionPlan {
    pub stock_needed: f64,
    pub water_needed: f64,
    pub available_stock: f64,
    pub sufficient: bool,
}

impl DilutionPlan {
    /// How much stock is missing. Zero when the plan is sufficient.
    pub fn shortfall(&self) -> f64 {
        (self.stock_needed - self.available_stock).max(0.0)
    }
}
