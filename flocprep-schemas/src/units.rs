use serde::{Deserialize, Serialize};

/// The two fixed unit systems supported by the planner.
///
/// `Mass` works in grams with % w/w concentrations, `Volume` in millilitres
/// with % v/v concentrations. The labels are presentation constants; the
/// calculators never see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    #[default]
    Mass,
    Volume,
}

impl UnitSystem {
    pub fn amount_unit(&self) -> &'static str {
        match self {
            UnitSystem::Mass => "g",
            UnitSystem::Volume => "mL",
        }
    }

    pub fn concentration_unit(&self) -> &'static str {
        match self {
            UnitSystem::Mass => "% w/w",
            UnitSystem::Volume => "% v/v",
        }
    }
}
