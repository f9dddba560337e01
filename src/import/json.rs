// src/import/json.rs

use crate::errors::{AppError, AppResult};
use crate::models::EmployeeRecord;
use std::fs;
use std::path::Path;

/// Parse a JSON array of employee records.
pub fn parse_json_records(text: &str) -> AppResult<Vec<EmployeeRecord>> {
    let trimmed = text.trim_start_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if !trimmed.starts_with('[') {
        return Err(AppError::Import(
            "expected a JSON array of employee records".into(),
        ));
    }

    Ok(serde_json::from_str(trimmed)?)
}

pub fn read_json_records(path: &Path) -> AppResult<Vec<EmployeeRecord>> {
    let text = fs::read_to_string(path)?;
    parse_json_records(&text)
}
