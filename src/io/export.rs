//! Write run reports as JSON.
//!
//! The schema is defined by `domain::Report`. Non-finite values serialize as
//! `null`.

use std::fs::File;
use std::path::Path;

use crate::domain::Report;
use crate::error::AppError;

/// Render a report as pretty JSON.
pub fn report_to_json(report: &Report) -> Result<String, AppError> {
    serde_json::to_string_pretty(report)
        .map_err(|e| AppError::export(format!("Failed to serialize report: {e}")))
}

/// Write a report JSON file.
pub fn write_report_json(path: &Path, report: &Report) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::export(format!("Failed to create report JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::export(format!("Failed to write report JSON '{}': {e}", path.display())))?;

    Ok(())
}
