use crate::{
    error::FlocprepError,
    preparation::session::{DilutionStage, PreparationSession, StockStage},
};
use flocprep_schemas::{
    report::{ParameterRow, PreparationReport, StageReport},
    units::UnitSystem,
};

/// Assembles the renderer-facing read model from a completed session.
///
/// All display formatting (two decimal places, unit labels) happens here;
/// the calculators hand over raw numbers.
///
/// # Errors
///
/// `IncompleteSession` unless both stages have been accepted.
pub fn build_report(
    session: &PreparationSession,
    title: &str,
) -> Result<PreparationReport, FlocprepError> {
    let stock = session.stock().ok_or(FlocprepError::IncompleteSession)?;
    let dilution = session.dilution().ok_or(FlocprepError::IncompleteSession)?;

    let units = session.config().unit_system;

    let summary = vec![
        amount_row("Stock Amount", stock.spec.target_amount, units),
        concentration_row("Stock Concentration", stock.spec.concentration_percent, units),
        amount_row("Emulsion Required", stock.split.solute_amount, units),
        amount_row("Water for Stock", stock.split.solvent_amount, units),
        amount_row("Final Amount", dilution.spec.final_amount, units),
        concentration_row(
            "Final Concentration",
            dilution.spec.final_concentration_percent,
            units,
        ),
        amount_row("Stock Solution Used", dilution.plan.stock_needed, units),
        amount_row("Water for Dilution", dilution.plan.water_needed, units),
    ];

    Ok(PreparationReport {
        title: title.to_string(),
        config: session.config(),
        summary,
        stages: vec![
            stock_stage_report(stock, units),
            dilution_stage_report(dilution, units),
        ],
    })
}

fn amount_row(parameter: &str, value: f64, units: UnitSystem) -> ParameterRow {
    ParameterRow {
        parameter: parameter.to_string(),
        value: format!("{:.2}", value),
        unit: units.amount_unit().to_string(),
    }
}

fn concentration_row(parameter: &str, value: f64, units: UnitSystem) -> ParameterRow {
    ParameterRow {
        parameter: parameter.to_string(),
        value: format!("{:.2}", value),
        unit: units.concentration_unit().to_string(),
    }
}

fn stock_stage_report(stage: &StockStage, units: UnitSystem) -> StageReport {
    let unit = units.amount_unit();
    // vessel sized to twice the prepared amount
    let vessel = stage.spec.target_amount * 2.0;

    let mut instructions = vec![
        format!("Use a clean beaker or bottle of at least {vessel:.0} mL."),
        "Prepare alkaline makeup water: 10-15 g/L NaOH in DI or plant water.".to_string(),
    ];
    match units {
        UnitSystem::Mass => {
            instructions.push(format!(
                "Tare the beaker and add {:.2} {unit} of alkaline water to exact mass.",
                stage.split.solvent_amount
            ));
            instructions.push(format!(
                "Tare a syringe, sample {:.2} {unit} of emulsion, weigh and adjust.",
                stage.split.solute_amount
            ));
        }
        UnitSystem::Volume => {
            instructions.push(format!(
                "Measure {:.2} {unit} of alkaline water with a graduated cylinder and pour.",
                stage.split.solvent_amount
            ));
            instructions.push(format!(
                "Measure {:.2} {unit} of emulsion by volume with a syringe.",
                stage.split.solute_amount
            ));
        }
    }
    instructions.push(
        "Stir at 700-900 rpm to a vortex and inject the emulsion into the vortex shoulder."
            .to_string(),
    );
    instructions.push(
        "Mix 30 min at high speed, then age 2 hours under gentle agitation (200-300 rpm)."
            .to_string(),
    );
    instructions.push("If undissolved strands remain, discard and remake.".to_string());

    StageReport {
        title: "Step 1: Stock Solution".to_string(),
        parameters: vec![
            amount_row("Target Amount", stage.spec.target_amount, units),
            concentration_row("Target Concentration", stage.spec.concentration_percent, units),
            amount_row("Emulsion Required", stage.split.solute_amount, units),
            amount_row("Water Required", stage.split.solvent_amount, units),
        ],
        instructions,
    }
}

fn dilution_stage_report(stage: &DilutionStage, units: UnitSystem) -> StageReport {
    let unit = units.amount_unit();
    let vessel = stage.spec.final_amount * 2.0;

    let instructions = vec![
        format!("Use a clean bottle of at least {vessel:.0} mL capacity."),
        format!(
            "Add water first: pour {:.2} {unit} of alkaline water into the bottle.",
            stage.plan.water_needed
        ),
        format!(
            "Add {:.2} {unit} of stock solution into the bottle.",
            stage.plan.stock_needed
        ),
        "Seal tightly and shake vigorously until fully homogeneous.".to_string(),
        "Use the working solution in this session; do not store overnight.".to_string(),
    ];

    StageReport {
        title: "Step 2: Final Dilution".to_string(),
        parameters: vec![
            amount_row("Final Amount", stage.spec.final_amount, units),
            concentration_row(
                "Final Concentration",
                stage.spec.final_concentration_percent,
                units,
            ),
            amount_row("Stock Solution Used", stage.plan.stock_needed, units),
            amount_row("Water Added", stage.plan.water_needed, units),
        ],
        instructions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flocprep_schemas::{config::SessionConfig, solution::SolutionSpec};

    fn complete_session(unit_system: UnitSystem) -> PreparationSession {
        let config = SessionConfig {
            unit_system,
            ..SessionConfig::default()
        };
        PreparationSession::new(config)
            .accept_stock(SolutionSpec {
                target_amount: 200.0,
                concentration_percent: 1.0,
            })
            .unwrap()
            .accept_dilution(200.0, 0.1)
            .unwrap()
    }

    #[test]
    fn report_has_eight_summary_rows_and_two_stages() {
        let report = build_report(&complete_session(UnitSystem::Mass), "Report").unwrap();
        assert_eq!(report.summary.len(), 8);
        assert_eq!(report.stages.len(), 2);
        assert_eq!(report.title, "Report");
    }

    #[test]
    fn values_are_formatted_to_two_decimals_with_units() {
        let report = build_report(&complete_session(UnitSystem::Mass), "Report").unwrap();
        let emulsion = &report.summary[2];
        assert_eq!(emulsion.parameter, "Emulsion Required");
        assert_eq!(emulsion.value, "2.00");
        assert_eq!(emulsion.unit, "g");

        let concentration = &report.summary[1];
        assert_eq!(concentration.value, "1.00");
        assert_eq!(concentration.unit, "% w/w");
    }

    #[test]
    fn volume_units_flow_into_rows() {
        let report = build_report(&complete_session(UnitSystem::Volume), "Report").unwrap();
        assert_eq!(report.summary[0].unit, "mL");
        assert_eq!(report.summary[1].unit, "% v/v");
    }

    #[test]
    fn instructions_scale_vessel_to_twice_the_amount() {
        let report = build_report(&complete_session(UnitSystem::Mass), "Report").unwrap();
        assert!(report.stages[0].instructions[0].contains("400 mL"));
        assert!(report.stages[1].instructions[0].contains("400 mL"));
    }

    #[test]
    fn instruction_measuring_steps_follow_the_unit_system() {
        let by_mass = build_report(&complete_session(UnitSystem::Mass), "Report").unwrap();
        assert!(by_mass.stages[0].instructions.iter().any(|l| l.contains("Tare")));

        let by_volume = build_report(&complete_session(UnitSystem::Volume), "Report").unwrap();
        assert!(by_volume.stages[0]
            .instructions
            .iter()
            .any(|l| l.contains("graduated cylinder")));
    }

    #[test]
    fn incomplete_session_cannot_be_reported() {
        let session = PreparationSession::new(SessionConfig::default());
        assert!(matches!(
            build_report(&session, "Report"),
            Err(FlocprepError::IncompleteSession)
        ));
    }
}
