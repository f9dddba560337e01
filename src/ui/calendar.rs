//! Terminal rendering of calendar grids.

use crate::core::grid::{DayCell, MonthGrid, Occupant, WEEK_HEADERS};
use crate::utils::colors::{color_for_class, paint, paint_tag};
use crate::utils::date::{month_name, weekday_label};
use crate::utils::formatting::{pad_left, pad_right, truncate};
use unicode_width::UnicodeWidthStr;

const CELL_WIDTH: usize = 9;
const MAX_LABEL_LINES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    Initials,
    Names,
}

fn label(o: &Occupant, mode: LabelMode) -> String {
    let text = match mode {
        LabelMode::Initials => o
            .name
            .split_whitespace()
            .filter_map(|p| p.chars().next())
            .collect::<String>(),
        LabelMode::Names => o.name.clone(),
    };
    truncate(&text, CELL_WIDTH - 1)
}

fn day_number(cell: &DayCell) -> String {
    let n = pad_left(&cell.day_number.to_string(), 2);
    paint(&n, color_for_class(cell.classification))
}

/// Lines for one occupant slot of a week row.
fn occupant_slot(cell: Option<&DayCell>, line: usize, overflow: bool, mode: LabelMode) -> String {
    let Some(cell) = cell else {
        return " ".repeat(CELL_WIDTH);
    };

    if overflow && line == MAX_LABEL_LINES - 1 {
        let hidden = cell.occupants.len().saturating_sub(MAX_LABEL_LINES - 1);
        if hidden > 0 {
            return pad_right(&format!("+{hidden}"), CELL_WIDTH);
        }
    }

    match cell.occupants.get(line) {
        Some(o) => {
            let text = label(o, mode);
            let pad = " ".repeat(CELL_WIDTH.saturating_sub(UnicodeWidthStr::width(text.as_str())));
            format!("{}{}", paint_tag(&text, &o.color), pad)
        }
        None => " ".repeat(CELL_WIDTH),
    }
}

/// Month title, weekday header row, then one block per week: day numbers
/// (coloured by holiday/weekend) and the occupants of each day below.
pub fn render_month(grid: &MonthGrid, language: &str, mode: LabelMode) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", month_name(grid.month, language), grid.year));

    for w in WEEK_HEADERS {
        out.push_str(&pad_right(weekday_label(w, language), CELL_WIDTH));
    }
    out.push('\n');

    for week in grid.weeks() {
        for slot in &week {
            match slot {
                Some(cell) => {
                    out.push_str(&day_number(cell));
                    out.push_str(&" ".repeat(CELL_WIDTH - 2));
                }
                None => out.push_str(&pad_right(" .", CELL_WIDTH)),
            }
        }
        out.push('\n');

        let busiest = week
            .iter()
            .flatten()
            .map(|c| c.occupants.len())
            .max()
            .unwrap_or(0);
        let overflow = busiest > MAX_LABEL_LINES;
        let lines = busiest.min(MAX_LABEL_LINES);

        for line in 0..lines {
            for slot in &week {
                out.push_str(&occupant_slot(*slot, line, overflow, mode));
            }
            out.push('\n');
        }
    }

    out
}
