use crate::config::SessionConfig;
use serde::{Deserialize, Serialize};

/// One row of the flat parameter/value table handed to the renderers.
/// Values arrive pre-formatted; the unit label travels in its own column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRow {
    pub parameter: String,
    pub value: String,
    pub unit: String,
}

/// One preparation stage as consumed by the renderers: a parameter table
/// plus the ordered instruction lines for the operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageReport {
    pub title: String,
    pub parameters: Vec<ParameterRow>,
    pub instructions: Vec<String>,
}

/// The full read model handed to the document and spreadsheet renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparationReport {
    pub title: String,
    pub config: SessionConfig,
    pub summary: Vec<ParameterRow>,
    pub stages: Vec<StageReport>,
}
