use crate::units::UnitSystem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the operator supplies the stage-one parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreparationMode {
    #[default]
    Manual,
    SopPreset,
}

impl fmt::Display for PreparationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreparationMode::Manual => write!(f, "Manual Input"),
            PreparationMode::SopPreset => write!(f, "SOP-Driven"),
        }
    }
}

/// Session-level configuration. Changing either field resets the session
/// wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub unit_system: UnitSystem,
    pub mode: PreparationMode,
}
