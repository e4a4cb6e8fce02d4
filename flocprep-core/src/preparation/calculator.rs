use crate::error::FlocprepError;
use flocprep_schemas::{
    dilution::{DilutionPlan, DilutionSpec},
    solution::{SolutionSpec, SolutionSplit},
};

/// Splits a target amount into solute and solvent portions.
///
/// The split follows the percentage concentration directly: the solute
/// portion is `target_amount * concentration / 100` and the solvent makes up
/// the rest. Values are returned unrounded; two-decimal formatting is a
/// report concern.
///
/// # Errors
///
/// Returns `FlocprepError::InvalidInput` when the amount or concentration is
/// not strictly positive. Range checks beyond that (concentration below
/// 100%, the sanity bound on amounts) belong to
/// [`validation::validate_inputs`](crate::preparation::validation::validate_inputs).
pub fn compute_solution(spec: SolutionSpec) -> Result<SolutionSplit, FlocprepError> {
    if spec.target_amount <= 0.0 || spec.concentration_percent <= 0.0 {
        return Err(FlocprepError::InvalidInput {
            amount: spec.target_amount,
            concentration: spec.concentration_percent,
        });
    }

    let fraction = spec.concentration_percent / 100.0;
    let solute_amount = spec.target_amount * fraction;
    let solvent_amount = spec.target_amount - solute_amount;

    Ok(SolutionSplit {
        solute_amount,
        solvent_amount,
    })
}

/// Sizes the stock and water portions of a working dilution.
///
/// Concentration times volume is conserved when diluting with pure solvent
/// (C1*V1 = C2*V2), so the stock portion is `final_concentration *
/// final_amount / stock_concentration` and water makes up the rest. Running
/// short of stock is reported on the plan, not raised as an error; rejecting
/// an insufficient plan is the session's call.
///
/// # Errors
///
/// `InvalidInput` when a concentration or the final amount is not strictly
/// positive. `InvalidDilution` when the stock concentration does not exceed
/// the requested final concentration, since the "dilution" would then need at
/// least as much stock as final solution.
pub fn compute_dilution(spec: DilutionSpec) -> Result<DilutionPlan, FlocprepError> {
    if spec.final_amount <= 0.0 || spec.final_concentration_percent <= 0.0 {
        return Err(FlocprepError::InvalidInput {
            amount: spec.final_amount,
            concentration: spec.final_concentration_percent,
        });
    }
    if spec.stock_concentration_percent <= 0.0 {
        return Err(FlocprepError::InvalidInput {
            amount: spec.final_amount,
            concentration: spec.stock_concentration_percent,
        });
    }
    if spec.stock_concentration_percent <= spec.final_concentration_percent {
        return Err(FlocprepError::InvalidDilution {
            stock: spec.stock_concentration_percent,
            requested: spec.final_concentration_percent,
        });
    }

    let stock_needed =
        spec.final_concentration_percent * spec.final_amount / spec.stock_concentration_percent;
    let water_needed = spec.final_amount - stock_needed;

    Ok(DilutionPlan {
        stock_needed,
        water_needed,
        available_stock: spec.available_stock,
        sufficient: stock_needed <= spec.available_stock,
    })
}
