use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::active::active_on;
use crate::db::open;
use crate::db::queries::load_employees;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::colors::paint_tag;
use crate::utils::date::{self, format_display};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Active { date: date_arg } = cmd {
        let day = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let mut pool = open(&cfg.database)?;
        let employees = load_employees(&mut pool)?;
        let absent = active_on(day, &employees);

        let when = format_display(day, &cfg.language);
        if absent.is_empty() {
            info(format!("Nobody is on vacation on {}", when));
            return Ok(());
        }

        header(format!("On vacation on {} ({})", when, absent.len()));
        for emp in absent {
            // the interval that covers the day, for the "until" hint
            let until = emp
                .vacations
                .iter()
                .filter(|v| v.covers(day))
                .map(|v| v.end())
                .max();

            match until {
                Some(end) => println!(
                    "- {} ({}) until {}",
                    paint_tag(&emp.name, &emp.color),
                    emp.position,
                    format_display(end, &cfg.language)
                ),
                None => println!("- {} ({})", paint_tag(&emp.name, &emp.color), emp.position),
            }
        }
    }
    Ok(())
}
