use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employees::EmployeeLogic;
use crate::db::open;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::colors::paint_tag;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        position,
        total_days,
        color,
    } = cmd
    {
        let mut pool = open(&cfg.database)?;
        let emp = EmployeeLogic::add(
            &mut pool,
            &cfg.color_assigner(),
            name,
            position,
            *total_days,
            color.as_deref(),
        )?;

        success(format!(
            "Employee #{} {} added ({} days, color {})",
            emp.id,
            emp.name,
            emp.total_days,
            paint_tag(&emp.color, &emp.color)
        ));
    }
    Ok(())
}
