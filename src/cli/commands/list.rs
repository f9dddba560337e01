use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{Usage, usage};
use crate::db::open;
use crate::db::queries::load_employees;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::colors::{color_for_remaining, paint, paint_tag};
use crate::utils::date::format_display;
use crate::utils::days_label;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { details } = cmd {
        let mut pool = open(&cfg.database)?;
        let employees = load_employees(&mut pool)?;

        if employees.is_empty() {
            info("No employees yet. Use `rvacations add` or `rvacations import`.");
            return Ok(());
        }

        let rows = usage(&employees);
        print!("{}", usage_table(&rows).render());

        for u in rows.iter().filter(|u| u.is_over_allotment()) {
            warning(format!(
                "{} is {} over the allotment",
                u.employee.name,
                days_label(-u.remaining_days, &cfg.language)
            ));
        }

        if *details {
            for u in &rows {
                print_intervals(u, &cfg.language);
            }
        }
    }
    Ok(())
}

fn usage_table(rows: &[Usage<'_>]) -> Table {
    let mut table = Table::new(vec![
        Column::right("id"),
        Column::left("name"),
        Column::left("position"),
        Column::right("total"),
        Column::right("used"),
        Column::right("left"),
    ]);

    for u in rows {
        table.add_row(vec![
            u.employee.id.to_string(),
            paint_tag(&u.employee.name, &u.employee.color),
            u.employee.position.clone(),
            u.employee.total_days.to_string(),
            u.used_days.to_string(),
            paint(&u.remaining_days.to_string(), color_for_remaining(u.remaining_days)),
        ]);
    }
    table
}

fn print_intervals(u: &Usage<'_>, language: &str) {
    println!("\n{}:", paint_tag(&u.employee.name, &u.employee.color));
    if u.employee.vacations.is_empty() {
        println!("  -");
        return;
    }
    for v in &u.employee.vacations {
        println!(
            "  {} — {} ({})",
            format_display(v.start(), language),
            format_display(v.end(), language),
            days_label(v.days(), language)
        );
    }
}
