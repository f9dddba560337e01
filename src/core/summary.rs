use crate::core::days::{remaining_days, used_days};
use crate::models::Employee;

/// Per-employee aggregate shown in lists and exports.
#[derive(Debug, Clone)]
pub struct Usage<'a> {
    pub employee: &'a Employee,
    pub used_days: i64,
    pub remaining_days: i64,
}

impl Usage<'_> {
    /// Used days exceed the allotment. Shown, never enforced.
    pub fn is_over_allotment(&self) -> bool {
        self.remaining_days < 0
    }
}

pub fn usage(employees: &[Employee]) -> Vec<Usage<'_>> {
    employees
        .iter()
        .map(|e| Usage {
            employee: e,
            used_days: used_days(e),
            remaining_days: remaining_days(e),
        })
        .collect()
}
