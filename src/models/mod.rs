pub mod day_class;
pub mod employee;
pub mod record;

pub use day_class::DayClass;
pub use employee::{Employee, VacationInterval};
pub use record::{EmployeeRecord, VacationRecord};
