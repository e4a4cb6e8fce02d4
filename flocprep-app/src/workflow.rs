use crate::config::PresetLibrary;
use anyhow::{Context, Result};
use flocprep_core::preparation::session::PreparationSession;
use flocprep_schemas::{
    config::{PreparationMode, SessionConfig},
    solution::SolutionSpec,
    units::UnitSystem,
};
use serde::Deserialize;

/// One full preparation request, as read from the request YAML.
#[derive(Debug, Deserialize)]
pub struct PreparationRequest {
    pub unit_system: UnitSystem,
    pub mode: PreparationMode,
    /// Manual stock parameters; required in manual mode.
    pub stock: Option<StockInput>,
    /// Recipe to take the stock parameters from; required in preset mode.
    pub preset_id: Option<String>,
    pub dilution: DilutionInput,
}

#[derive(Debug, Deserialize)]
pub struct StockInput {
    pub amount: f64,
    pub concentration_percent: f64,
}

#[derive(Debug, Deserialize)]
pub struct DilutionInput {
    pub final_amount: f64,
    pub final_concentration_percent: f64,
}

/// Runs both preparation stages and returns the completed session.
pub fn run_preparation(
    request: &PreparationRequest,
    presets: &PresetLibrary,
) -> Result<PreparationSession> {
    println!("\n--- [Workflow] Planning Two-Stage Preparation ---");

    let unit = request.unit_system.amount_unit();
    let stock_spec = resolve_stock_spec(request, presets)?;
    let config = SessionConfig {
        unit_system: request.unit_system,
        mode: request.mode,
    };

    let session = PreparationSession::new(config)
        .accept_stock(stock_spec)
        .context("Stock solution inputs were rejected")?;
    if let Some(stock) = session.stock() {
        println!(
            "Stage 1 accepted: {:.2} {unit} emulsion + {:.2} {unit} water",
            stock.split.solute_amount, stock.split.solvent_amount
        );
    }

    let session = session
        .accept_dilution(
            request.dilution.final_amount,
            request.dilution.final_concentration_percent,
        )
        .context("Final dilution inputs were rejected")?;
    if let Some(dilution) = session.dilution() {
        println!(
            "Stage 2 accepted: {:.2} {unit} stock + {:.2} {unit} water",
            dilution.plan.stock_needed, dilution.plan.water_needed
        );
    }

    Ok(session)
}

/// Picks the stage-one parameters from the request or the preset library,
/// depending on the preparation mode.
fn resolve_stock_spec(
    request: &PreparationRequest,
    presets: &PresetLibrary,
) -> Result<SolutionSpec> {
    match request.mode {
        PreparationMode::Manual => {
            let stock = request
                .stock
                .as_ref()
                .context("Manual mode requires explicit stock parameters")?;
            Ok(SolutionSpec {
                target_amount: stock.amount,
                concentration_percent: stock.concentration_percent,
            })
        }
        PreparationMode::SopPreset => {
            let preset_id = request
                .preset_id
                .as_deref()
                .context("Preset mode requires a preset_id")?;
            let preset = presets
                .get(preset_id)
                .with_context(|| format!("Unknown preset '{preset_id}'"))?;
            println!("Using SOP preset: {}", preset.preset_name);
            Ok(SolutionSpec {
                target_amount: preset.amount,
                concentration_percent: preset.concentration_percent,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flocprep_schemas::preset::RecipePreset;
    use std::collections::HashMap;

    fn library() -> PresetLibrary {
        let preset = RecipePreset {
            preset_id: "latex_stock_1pct".to_string(),
            preset_name: "1% Latex Stock (200 g)".to_string(),
            amount: 200.0,
            concentration_percent: 1.0,
            notes: None,
        };
        PresetLibrary {
            presets: HashMap::from([(preset.preset_id.clone(), preset)]),
        }
    }

    fn dilution_input() -> DilutionInput {
        DilutionInput {
            final_amount: 200.0,
            final_concentration_percent: 0.1,
        }
    }

    #[test]
    fn preset_mode_takes_stock_parameters_from_the_library() {
        let request = PreparationRequest {
            unit_system: UnitSystem::Mass,
            mode: PreparationMode::SopPreset,
            stock: None,
            preset_id: Some("latex_stock_1pct".to_string()),
            dilution: dilution_input(),
        };
        let session = run_preparation(&request, &library()).unwrap();
        assert!(session.is_complete());
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let request = PreparationRequest {
            unit_system: UnitSystem::Mass,
            mode: PreparationMode::SopPreset,
            stock: None,
            preset_id: Some("no_such_recipe".to_string()),
            dilution: dilution_input(),
        };
        assert!(run_preparation(&request, &library()).is_err());
    }

    #[test]
    fn manual_mode_requires_stock_parameters() {
        let request = PreparationRequest {
            unit_system: UnitSystem::Mass,
            mode: PreparationMode::Manual,
            stock: None,
            preset_id: None,
            dilution: dilution_input(),
        };
        assert!(run_preparation(&request, &library()).is_err());
    }

    #[test]
    fn manual_mode_plans_both_stages() {
        let request = PreparationRequest {
            unit_system: UnitSystem::Volume,
            mode: PreparationMode::Manual,
            stock: Some(StockInput {
                amount: 200.0,
                concentration_percent: 1.0,
            }),
            preset_id: None,
            dilution: dilution_input(),
        };
        let session = run_preparation(&request, &library()).unwrap();
        assert_eq!(session.config().unit_system, UnitSystem::Volume);
        assert!(session.is_complete());
    }
}
