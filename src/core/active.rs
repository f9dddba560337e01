use crate::models::Employee;
use chrono::NaiveDate;

/// Employees with at least one interval covering `today` (both bounds
/// inclusive). Collection order is preserved. Recomputed on every call.
pub fn active_on(today: NaiveDate, employees: &[Employee]) -> Vec<&Employee> {
    employees.iter().filter(|e| e.is_absent_on(today)).collect()
}
