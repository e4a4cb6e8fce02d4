use std::fmt;
use thiserror::Error;

/// Upper sanity bound on amounts, in the reference unit (grams or
/// millilitres).
pub const MAX_REASONABLE_AMOUNT: f64 = 10_000.0;

/// The preparation stage an input belongs to, used to prefix messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    StockSolution,
    FinalDilution,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::StockSolution => write!(f, "Stock Solution"),
            Stage::FinalDilution => write!(f, "Final Dilution"),
        }
    }
}

/// A single rule violation. `Display` yields the operator-facing message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("{stage}: amount must be greater than 0")]
    NonPositiveAmount { stage: Stage },

    #[error("{stage}: concentration must be greater than 0")]
    NonPositiveConcentration { stage: Stage },

    #[error("{stage}: concentration must be less than 100%")]
    ConcentrationNotBelow100 { stage: Stage },

    #[error("final concentration should be lower than stock concentration")]
    FinalNotBelowStock,

    #[error("{stage}: amount seems unreasonably large (>{limit})")]
    UnreasonablyLargeAmount { stage: Stage, limit: f64 },
}

/// Checks every rule and returns every violation found, in rule order.
///
/// An empty list means the inputs may be accepted into the session. The
/// cross-stage rule only fires for the final dilution when the stock
/// concentration from stage one is known.
pub fn validate_inputs(
    amount: f64,
    concentration_percent: f64,
    stage: Stage,
    prior_concentration_percent: Option<f64>,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if amount <= 0.0 {
        violations.push(Violation::NonPositiveAmount { stage });
    }
    if concentration_percent <= 0.0 {
        violations.push(Violation::NonPositiveConcentration { stage });
    }
    if concentration_percent >= 100.0 {
        violations.push(Violation::ConcentrationNotBelow100 { stage });
    }
    if stage == Stage::FinalDilution {
        if let Some(stock_concentration) = prior_concentration_percent {
            if concentration_percent >= stock_concentration {
                violations.push(Violation::FinalNotBelowStock);
            }
        }
    }
    if amount > MAX_REASONABLE_AMOUNT {
        violations.push(Violation::UnreasonablyLargeAmount {
            stage,
            limit: MAX_REASONABLE_AMOUNT,
        });
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_amount_yields_exactly_one_violation() {
        let violations = validate_inputs(-5.0, 1.0, Stage::StockSolution, None);
        assert_eq!(
            violations,
            vec![Violation::NonPositiveAmount { stage: Stage::StockSolution }]
        );
        assert_eq!(
            violations[0].to_string(),
            "Stock Solution: amount must be greater than 0"
        );
    }

    #[test]
    fn all_violations_are_collected() {
        // rules are checked in order, not short-circuited
        let violations = validate_inputs(-1.0, 120.0, Stage::StockSolution, None);
        assert_eq!(
            violations,
            vec![
                Violation::NonPositiveAmount { stage: Stage::StockSolution },
                Violation::ConcentrationNotBelow100 { stage: Stage::StockSolution },
            ]
        );
    }

    #[test]
    fn concentration_of_exactly_100_is_rejected() {
        let violations = validate_inputs(200.0, 100.0, Stage::StockSolution, None);
        assert_eq!(
            violations,
            vec![Violation::ConcentrationNotBelow100 { stage: Stage::StockSolution }]
        );
    }

    #[test]
    fn final_concentration_must_stay_below_stock() {
        let violations = validate_inputs(200.0, 0.5, Stage::FinalDilution, Some(0.3));
        assert_eq!(violations, vec![Violation::FinalNotBelowStock]);
        assert_eq!(
            violations[0].to_string(),
            "final concentration should be lower than stock concentration"
        );
    }

    #[test]
    fn cross_stage_rule_ignored_without_prior_concentration() {
        assert!(validate_inputs(200.0, 0.5, Stage::FinalDilution, None).is_empty());
    }

    #[test]
    fn cross_stage_rule_does_not_apply_to_stock_stage() {
        assert!(validate_inputs(200.0, 0.5, Stage::StockSolution, Some(0.3)).is_empty());
    }

    #[test]
    fn oversized_amount_is_flagged() {
        let violations = validate_inputs(10_001.0, 1.0, Stage::StockSolution, None);
        assert_eq!(
            violations,
            vec![Violation::UnreasonablyLargeAmount {
                stage: Stage::StockSolution,
                limit: MAX_REASONABLE_AMOUNT,
            }]
        );
    }

    #[test]
    fn boundary_amount_passes() {
        assert!(validate_inputs(MAX_REASONABLE_AMOUNT, 1.0, Stage::StockSolution, None).is_empty());
    }

    #[test]
    fn valid_inputs_produce_no_violations() {
        assert!(validate_inputs(200.0, 1.0, Stage::StockSolution, None).is_empty());
    }
}
