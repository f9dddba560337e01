use serde::Serialize;

/// Classification of a calendar date in the holiday overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayClass {
    Holiday,
    Weekend,
    Workday,
}

impl DayClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayClass::Holiday => "holiday",
            DayClass::Weekend => "weekend",
            DayClass::Workday => "workday",
        }
    }
}
