use crate::error::FlocprepError;
use csv::Writer;
use flocprep_schemas::report::{ParameterRow, PreparationReport};
use std::fs;
use std::path::Path;

/// Writes parameter/value tables as CSV sheets, one file per sheet.
pub struct SpreadsheetWriter {
    path: String,
    writer: Writer<fs::File>,
}

impl SpreadsheetWriter {
    pub fn create(path: &Path) -> Result<Self, FlocprepError> {
        let writer = Writer::from_path(path)
            .map_err(|e| FlocprepError::CsvError(path.display().to_string(), e))?;
        Ok(Self {
            path: path.display().to_string(),
            writer,
        })
    }

    pub fn write_rows(&mut self, rows: &[ParameterRow]) -> Result<(), FlocprepError> {
        for row in rows {
            self.writer
                .serialize(row)
                .map_err(|e| FlocprepError::CsvError(self.path.clone(), e))?;
        }
        self.writer
            .flush()
            .map_err(|e| FlocprepError::FileIO(self.path.clone(), e))?;
        Ok(())
    }
}

/// Exports the report as `summary.csv` plus one sheet per stage.
///
/// The same parameter/value table the document renderer consumes is written
/// split per stage, standing in for a multi-sheet workbook.
pub fn export_spreadsheets(
    output_dir: &Path,
    report: &PreparationReport,
) -> Result<(), FlocprepError> {
    write_sheet(&output_dir.join("summary.csv"), &report.summary)?;
    for stage in &report.stages {
        let file_name = format!("{}.csv", sheet_name(&stage.title));
        write_sheet(&output_dir.join(file_name), &stage.parameters)?;
    }
    Ok(())
}

fn write_sheet(path: &Path, rows: &[ParameterRow]) -> Result<(), FlocprepError> {
    let mut writer = SpreadsheetWriter::create(path)?;
    writer.write_rows(rows)?;
    Ok(())
}

/// Lowercases a stage title into a file-system friendly sheet name.
fn sheet_name(title: &str) -> String {
    let mut name = String::new();
    let mut last_was_separator = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c.to_ascii_lowercase());
            last_was_separator = false;
        } else if !last_was_separator && !name.is_empty() {
            name.push('_');
            last_was_separator = true;
        }
    }
    name.trim_end_matches('_').to_string()
}
