use crate::{
    error::FlocprepError,
    preparation::{
        calculator::{compute_dilution, compute_solution},
        validation::{validate_inputs, Stage},
    },
};
use flocprep_schemas::{
    config::{PreparationMode, SessionConfig},
    dilution::{DilutionPlan, DilutionSpec},
    solution::{SolutionSpec, SolutionSplit},
    units::UnitSystem,
};
use serde::Serialize;
use std::{fs, path::Path};

/// An accepted stage-one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockStage {
    pub spec: SolutionSpec,
    pub split: SolutionSplit,
}

/// An accepted stage-two calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DilutionStage {
    pub spec: DilutionSpec,
    pub plan: DilutionPlan,
}

/// The state of one guided preparation, threaded through the workflow as an
/// explicit value.
///
/// Each `accept_*` call returns a new session; a rejected input leaves the
/// current session untouched so the operator can correct and retry. Changing
/// the unit system or the mode replaces the session wholesale with a fresh
/// one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparationSession {
    config: SessionConfig,
    stock: Option<StockStage>,
    dilution: Option<DilutionStage>,
}

impl PreparationSession {
    /// Creates an empty session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            stock: None,
            dilution: None,
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Switches the unit system. Any change discards both accepted stages;
    /// the same system returns the session unchanged.
    pub fn with_unit_system(self, unit_system: UnitSystem) -> Self {
        if self.config.unit_system == unit_system {
            self
        } else {
            Self::new(SessionConfig {
                unit_system,
                ..self.config
            })
        }
    }

    /// Switches the preparation mode, resetting on change like
    /// [`with_unit_system`](Self::with_unit_system).
    pub fn with_mode(self, mode: PreparationMode) -> Self {
        if self.config.mode == mode {
            self
        } else {
            Self::new(SessionConfig { mode, ..self.config })
        }
    }

    /// Discards both stages, keeping the configuration.
    pub fn reset(self) -> Self {
        Self::new(self.config)
    }

    /// Validates and accepts the stock solution parameters.
    ///
    /// On success the returned session carries the computed solute/solvent
    /// split. Accepting a new stock stage discards any previously accepted
    /// dilution stage, since its available stock no longer holds.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` carrying every violation found.
    pub fn accept_stock(&self, spec: SolutionSpec) -> Result<Self, FlocprepError> {
        let violations = validate_inputs(
            spec.target_amount,
            spec.concentration_percent,
            Stage::StockSolution,
            None,
        );
        if !violations.is_empty() {
            return Err(FlocprepError::ValidationFailed(violations));
        }

        let split = compute_solution(spec)?;
        Ok(Self {
            config: self.config,
            stock: Some(StockStage { spec, split }),
            dilution: None,
        })
    }

    /// Validates and accepts the final dilution parameters.
    ///
    /// The stock concentration and the available stock come from the
    /// accepted stage one.
    ///
    /// # Errors
    ///
    /// `StockNotAccepted` when stage one is missing, `ValidationFailed` with
    /// every violation found, `InvalidDilution` from the calculator, and
    /// `InsufficientStock` when the plan needs more stock than stage one
    /// produced; in all cases the session is not advanced.
    pub fn accept_dilution(
        &self,
        final_amount: f64,
        final_concentration_percent: f64,
    ) -> Result<Self, FlocprepError> {
        let stock = self.stock.as_ref().ok_or(FlocprepError::StockNotAccepted)?;

        let violations = validate_inputs(
            final_amount,
            final_concentration_percent,
            Stage::FinalDilution,
            Some(stock.spec.concentration_percent),
        );
        if !violations.is_empty() {
            return Err(FlocprepError::ValidationFailed(violations));
        }

        let spec = DilutionSpec {
            stock_concentration_percent: stock.spec.concentration_percent,
            final_amount,
            final_concentration_percent,
            available_stock: stock.spec.target_amount,
        };
        let plan = compute_dilution(spec)?;
        if !plan.sufficient {
            return Err(FlocprepError::InsufficientStock {
                needed: plan.stock_needed,
                available: plan.available_stock,
            });
        }

        Ok(Self {
            config: self.config,
            stock: self.stock.clone(),
            dilution: Some(DilutionStage { spec, plan }),
        })
    }

    pub fn stock(&self) -> Option<&StockStage> {
        self.stock.as_ref()
    }

    pub fn dilution(&self) -> Option<&DilutionStage> {
        self.dilution.as_ref()
    }

    /// True once both stages have been accepted.
    pub fn is_complete(&self) -> bool {
        self.stock.is_some() && self.dilution.is_some()
    }

    /// Writes a JSON snapshot of the session into the run directory.
    pub fn write_snapshot(&self, path: &Path) -> Result<(), FlocprepError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| FlocprepError::FileIO(path.display().to_string(), e))
    }
}
