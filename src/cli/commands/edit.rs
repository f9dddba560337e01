use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employees::{EmployeeChanges, EmployeeLogic};
use crate::db::open;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        employee,
        name,
        position,
        total_days,
    } = cmd
    {
        let changes = EmployeeChanges {
            name: name.clone(),
            position: position.clone(),
            total_days: *total_days,
        };

        if changes.is_empty() {
            warning("Nothing to change: use --name, --position or --days.");
            return Ok(());
        }

        let mut pool = open(&cfg.database)?;
        let emp = EmployeeLogic::edit(&mut pool, employee, changes)?;

        success(format!(
            "Employee #{} updated: {} | {} | {} days",
            emp.id, emp.name, emp.position, emp.total_days
        ));
    }
    Ok(())
}
