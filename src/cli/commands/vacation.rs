use crate::cli::parser::{Commands, VacationAction};
use crate::config::Config;
use crate::core::employees::EmployeeLogic;
use crate::core::interval::{parse_span, validate_interval};
use crate::db::open;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::days_label;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Vacation { action } = cmd else {
        return Ok(());
    };

    let mut pool = open(&cfg.database)?;

    match action {
        VacationAction::Add {
            employee,
            start,
            end,
        } => {
            let interval = validate_interval(start, end)?;
            let label = format!(
                "{} → {} ({})",
                interval.start_str(),
                interval.end_str(),
                days_label(interval.days(), &cfg.language)
            );
            let emp = EmployeeLogic::add_vacation(&mut pool, employee, interval)?;
            success(format!("Vacation {} added for {}", label, emp.name));
        }
        VacationAction::Set { employee, spans } => {
            let intervals = spans
                .iter()
                .map(|s| parse_span(s))
                .collect::<AppResult<Vec<_>>>()?;
            let emp = EmployeeLogic::set_vacations(&mut pool, employee, intervals)?;
            success(format!(
                "{} now has {} vacation interval(s)",
                emp.name,
                emp.vacations.len()
            ));
        }
        VacationAction::Clear { employee } => {
            let emp = EmployeeLogic::set_vacations(&mut pool, employee, Vec::new())?;
            success(format!("All vacations of {} removed", emp.name));
        }
    }

    Ok(())
}
