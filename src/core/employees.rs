//! Lifecycle of stored employees: create, edit, delete, and interval changes.

use crate::core::colors::{ColorAssigner, is_valid_tag};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{
    append_vacation, count_employees, delete_employee, insert_employee, load_employees,
    replace_vacations, update_employee,
};
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, VacationInterval};

/// Find an employee by numeric id or exact (case-insensitive) name.
pub fn resolve<'a>(employees: &'a [Employee], key: &str) -> AppResult<&'a Employee> {
    let key = key.trim();

    if let Ok(id) = key.parse::<i64>()
        && let Some(e) = employees.iter().find(|e| e.id == id)
    {
        return Ok(e);
    }

    let mut matches = employees
        .iter()
        .filter(|e| e.name.to_lowercase() == key.to_lowercase());

    match (matches.next(), matches.next()) {
        (Some(e), None) => Ok(e),
        (Some(_), Some(_)) => Err(AppError::AmbiguousEmployee(key.to_string())),
        _ => Err(AppError::EmployeeNotFound(key.to_string())),
    }
}

/// Field changes requested by `edit`. `None` keeps the current value.
#[derive(Debug, Default)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub position: Option<String>,
    pub total_days: Option<u32>,
}

impl EmployeeChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.position.is_none() && self.total_days.is_none()
    }
}

pub struct EmployeeLogic;

impl EmployeeLogic {
    /// Store a new employee. The color tag is assigned here, from the
    /// ordinal the employee gets in the collection, and never recomputed.
    pub fn add(
        pool: &mut DbPool,
        assigner: &ColorAssigner,
        name: &str,
        position: &str,
        total_days: u32,
        color: Option<&str>,
    ) -> AppResult<Employee> {
        if name.trim().is_empty() {
            return Err(AppError::MissingRequiredField("name".into()));
        }

        let ordinal = count_employees(&pool.conn)?;
        let tag = match color.map(str::trim) {
            Some(c) if !c.is_empty() => {
                if !is_valid_tag(c) {
                    return Err(AppError::InvalidColor(c.to_string()));
                }
                c.to_string()
            }
            _ => assigner.tag_for(ordinal),
        };

        let mut emp = Employee::new(name, position, total_days, &tag);
        emp.id = insert_employee(&pool.conn, &emp)?;

        ttlog_quiet(
            &pool.conn,
            "add",
            &emp.name,
            &format!("Added employee #{} ({} days, color {})", emp.id, total_days, emp.color),
        );
        Ok(emp)
    }

    pub fn edit(pool: &mut DbPool, key: &str, changes: EmployeeChanges) -> AppResult<Employee> {
        let employees = load_employees(pool)?;
        let mut emp = resolve(&employees, key)?.clone();

        if let Some(name) = changes.name {
            if name.trim().is_empty() {
                return Err(AppError::MissingRequiredField("name".into()));
            }
            emp.name = name.trim().to_string();
        }
        if let Some(position) = changes.position {
            emp.position = position.trim().to_string();
        }
        if let Some(total) = changes.total_days {
            emp.total_days = total;
        }

        update_employee(&pool.conn, &emp)?;
        ttlog_quiet(&pool.conn, "edit", &emp.name, &format!("Edited employee #{}", emp.id));
        Ok(emp)
    }

    pub fn delete(pool: &mut DbPool, key: &str) -> AppResult<Employee> {
        let employees = load_employees(pool)?;
        let emp = resolve(&employees, key)?.clone();

        delete_employee(&pool.conn, emp.id)?;
        ttlog_quiet(&pool.conn, "del", &emp.name, &format!("Deleted employee #{}", emp.id));
        Ok(emp)
    }

    pub fn add_vacation(
        pool: &mut DbPool,
        key: &str,
        interval: VacationInterval,
    ) -> AppResult<Employee> {
        let employees = load_employees(pool)?;
        let mut emp = resolve(&employees, key)?.clone();

        append_vacation(&pool.conn, emp.id, &interval)?;
        ttlog_quiet(
            &pool.conn,
            "vacation",
            &emp.name,
            &format!(
                "Added {} → {} ({} days)",
                interval.start_str(),
                interval.end_str(),
                interval.days()
            ),
        );

        emp.vacations.push(interval);
        Ok(emp)
    }

    /// Replace the entire interval sequence (empty slice clears it).
    pub fn set_vacations(
        pool: &mut DbPool,
        key: &str,
        intervals: Vec<VacationInterval>,
    ) -> AppResult<Employee> {
        let employees = load_employees(pool)?;
        let mut emp = resolve(&employees, key)?.clone();

        replace_vacations(&pool.conn, emp.id, &intervals)?;
        ttlog_quiet(
            &pool.conn,
            "vacation",
            &emp.name,
            &format!("Replaced vacations with {} interval(s)", intervals.len()),
        );

        emp.vacations = intervals;
        Ok(emp)
    }
}
