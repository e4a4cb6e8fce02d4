use crate::preparation::validation::Violation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlocprepError {
    #[error("Amount and concentration must be positive (got amount {amount}, concentration {concentration})")]
    InvalidInput { amount: f64, concentration: f64 },

    #[error("Stock concentration {stock}% must be greater than the requested final concentration {requested}%")]
    InvalidDilution { stock: f64, requested: f64 },

    #[error("Insufficient stock solution: need {needed:.2} but only {available:.2} available")]
    InsufficientStock { needed: f64, available: f64 },

    #[error("Inputs rejected: {}", format_violations(.0))]
    ValidationFailed(Vec<Violation>),

    #[error("The stock solution stage has not been accepted yet")]
    StockNotAccepted,

    #[error("Both preparation stages must be accepted before a report can be assembled")]
    IncompleteSession,

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Failed to write CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
