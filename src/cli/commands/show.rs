use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::days::{remaining_days, used_days};
use crate::core::employees::resolve;
use crate::db::open;
use crate::db::queries::load_employees;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{color_for_remaining, paint, paint_tag};
use crate::utils::date::format_display;
use crate::utils::days_label;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { employee } = cmd {
        let mut pool = open(&cfg.database)?;
        let employees = load_employees(&mut pool)?;
        let emp = resolve(&employees, employee)?;
        let lang = cfg.language.as_str();

        header(format!("#{} {}", emp.id, paint_tag(&emp.name, &emp.color)));
        println!("Position : {}", emp.position);
        println!("Allotment: {}", days_label(emp.total_days as i64, lang));
        println!("Used     : {}", days_label(used_days(emp), lang));

        let left = remaining_days(emp);
        println!(
            "Remaining: {}",
            paint(&days_label(left, lang), color_for_remaining(left))
        );

        println!("Vacations:");
        if emp.vacations.is_empty() {
            println!("  No vacations planned");
        } else {
            for v in &emp.vacations {
                println!(
                    "  {} — {} ({})",
                    format_display(v.start(), lang),
                    format_display(v.end(), lang),
                    days_label(v.days(), lang)
                );
            }
        }
    }
    Ok(())
}
