use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employees::{EmployeeLogic, resolve};
use crate::db::open;
use crate::db::queries::load_employees;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { employee, yes } = cmd {
        let mut pool = open(&cfg.database)?;

        // fail early on unknown employees, before prompting
        let employees = load_employees(&mut pool)?;
        let target = resolve(&employees, employee)?;

        if !*yes {
            let prompt = format!(
                "Delete employee #{} {} and {} vacation(s)? This action is irreversible.",
                target.id,
                target.name,
                target.vacations.len()
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = EmployeeLogic::delete(&mut pool, &target.id.to_string())?;
        success(format!("Employee #{} {} has been deleted.", removed.id, removed.name));
    }

    Ok(())
}
