use serde::{Deserialize, Serialize};

/// A standard operating procedure recipe for a preparation stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipePreset {
    pub preset_id: String,
    pub preset_name: String,
    pub amount: f64,
    pub concentration_percent: f64,
    pub notes: Option<String>,
}
