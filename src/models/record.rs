use serde::{Deserialize, Serialize};

/// Loosely shaped employee record, as it arrives from JSON files or CSV rows.
/// Every field is optional here; `core::ingest` turns it into an `Employee`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub total_days: Option<i64>,
    #[serde(default)]
    pub vacations: Vec<VacationRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VacationRecord {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    /// Informational only: the day count is always recomputed.
    #[serde(default)]
    pub days: Option<i64>,
}

impl VacationRecord {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
            days: None,
        }
    }
}
