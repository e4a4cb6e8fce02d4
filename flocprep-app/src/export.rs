//! Renders the report artifacts for a completed preparation run.

use anyhow::{Context, Result};
use flocprep_core::{preparation::session::PreparationSession, report, spreadsheet};
use flocprep_schemas::report::PreparationReport;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Writes all report artifacts into the run directory: the text document,
/// the CSV sheets and the session snapshot.
pub fn write_reports(
    output_dir: &Path,
    session: &PreparationSession,
    title: &str,
) -> Result<()> {
    println!("\n--- [Export] Writing report artifacts ---");

    let report = report::build_report(session, title)?;

    write_document(&output_dir.join("preparation_report.txt"), &report)?;
    spreadsheet::export_spreadsheets(output_dir, &report)?;
    session.write_snapshot(&output_dir.join("session.json"))?;

    println!("[Export] Artifacts written to '{}'.", output_dir.display());
    Ok(())
}

/// Renders the report read model as a plain-text document.
fn write_document(path: &Path, report: &PreparationReport) -> Result<()> {
    let units = report.config.unit_system;
    let mut doc = String::new();

    writeln!(doc, "{}", report.title)?;
    writeln!(
        doc,
        "Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(doc, "Preparation mode: {}", report.config.mode)?;
    writeln!(
        doc,
        "Units: {} / {}",
        units.amount_unit(),
        units.concentration_unit()
    )?;
    writeln!(doc)?;

    writeln!(doc, "Summary")?;
    writeln!(doc, "-------")?;
    for row in &report.summary {
        writeln!(doc, "{:<24} {:>10} {}", row.parameter, row.value, row.unit)?;
    }

    for stage in &report.stages {
        writeln!(doc)?;
        writeln!(doc, "{}", stage.title)?;
        writeln!(doc, "{}", "-".repeat(stage.title.len()))?;
        for row in &stage.parameters {
            writeln!(doc, "{:<24} {:>10} {}", row.parameter, row.value, row.unit)?;
        }
        writeln!(doc)?;
        for (i, line) in stage.instructions.iter().enumerate() {
            writeln!(doc, "{}. {}", i + 1, line)?;
        }
    }

    fs::write(path, doc).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
