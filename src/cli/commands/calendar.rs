use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::{build_month, build_year};
use crate::db::open;
use crate::db::queries::load_employees;
use crate::errors::{AppError, AppResult};
use crate::ui::calendar::{LabelMode, render_month};
use crate::utils::colors::{MAGENTA, RED, paint, paint_tag};
use crate::utils::date::{Period, parse_period};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { period, names } = cmd {
        let period = match period {
            Some(p) => parse_period(p).map_err(AppError::InvalidDate)?,
            None => Period::current_month(),
        };
        let mode = if *names {
            LabelMode::Names
        } else {
            LabelMode::Initials
        };

        let mut pool = open(&cfg.database)?;
        let employees = load_employees(&mut pool)?;
        let holidays = cfg.holiday_calendar()?;

        let grids = match period {
            Period::Month(y, m) => vec![build_month(y, m, &employees, &holidays)?],
            Period::Year(y) => build_year(y, &employees, &holidays)?,
        };

        for g in &grids {
            println!("{}", render_month(g, &cfg.language, mode));
        }

        // legend
        let people = employees
            .iter()
            .map(|e| paint_tag(&format!("{} ({})", e.name, e.initials()), &e.color))
            .collect::<Vec<_>>()
            .join("  ");
        println!(
            "{}  {}  {}",
            paint("holiday", MAGENTA),
            paint("weekend", RED),
            people
        );
    }
    Ok(())
}
