mod common;
use chrono::{Datelike, Weekday};
use common::{d, employee};
use rvacations::core::grid::{GridCell, WEEK_HEADERS, build_month, build_year};
use rvacations::core::holidays::HolidayCalendar;
use rvacations::errors::AppError;
use rvacations::models::DayClass;
use rvacations::utils::date::{Period, days_in_month, parse_period};

#[test]
fn test_february_2026_layout() {
    let grid = build_month(2026, 2, &[], &HolidayCalendar::empty()).expect("grid");

    // 2026-02-01 is a Sunday
    assert_eq!(grid.leading, 6);
    assert_eq!(grid.days.len(), 28);
    assert_eq!(grid.trailing, 1);
    assert_eq!(grid.padded_len(), 35);
    assert_eq!(grid.weeks().len(), 5);

    let first_week = grid.weeks()[0];
    assert!(first_week[..6].iter().all(|s| s.is_none()));
    assert_eq!(first_week[6].map(|c| c.day_number), Some(1));
}

#[test]
fn test_padding_properties_hold_for_every_month() {
    let holidays = HolidayCalendar::builtin();
    for year in [1900, 2000, 2023, 2024, 2025, 2026, 2027, 2100] {
        for month in 1..=12 {
            let grid = build_month(year, month, &[], &holidays).expect("grid");
            assert_eq!(grid.padded_len() % 7, 0, "{year}-{month}");
            assert!(grid.trailing < 7, "{year}-{month}");
            assert!(grid.leading < 7, "{year}-{month}");
            assert_eq!(
                grid.days.len() as u32,
                days_in_month(year, month).expect("month")
            );
            let first = grid.days.first().expect("day 1");
            assert_eq!(
                grid.leading,
                first.date.weekday().num_days_from_monday() as usize
            );
            for (i, cell) in grid.days.iter().enumerate() {
                assert_eq!(cell.day_number as usize, i + 1);
            }
        }
    }
}

#[test]
fn test_flat_cells_start_with_headers() {
    let grid = build_month(2026, 1, &[], &HolidayCalendar::empty()).expect("grid");
    let cells = grid.cells();

    assert_eq!(cells.len(), 7 + grid.padded_len());
    for (i, w) in WEEK_HEADERS.iter().enumerate() {
        assert!(matches!(cells[i], GridCell::Header(h) if h == *w));
    }
    assert!(matches!(cells[0], GridCell::Header(Weekday::Mon)));
    assert!(matches!(cells[6], GridCell::Header(Weekday::Sun)));

    // 2026-01-01 is a Thursday: three blanks, then day 1
    assert!(matches!(cells[7], GridCell::Blank));
    assert!(matches!(cells[9], GridCell::Blank));
    assert!(matches!(cells[10], GridCell::Day(c) if c.day_number == 1));
}

#[test]
fn test_occupants_follow_inclusive_intervals() {
    let employees = vec![
        employee(1, "Ivan Petrov", &[("2026-06-10", "2026-06-30")]),
        employee(2, "Anna Smirnova", &[("2026-06-29", "2026-07-05")]),
    ];
    let grid = build_month(2026, 6, &employees, &HolidayCalendar::empty()).expect("grid");

    let names = |n: u32| -> Vec<String> {
        grid.day(n)
            .expect("day")
            .occupants
            .iter()
            .map(|o| o.name.clone())
            .collect()
    };

    assert!(names(9).is_empty());
    assert_eq!(names(10), vec!["Ivan Petrov"]);
    assert_eq!(names(28), vec!["Ivan Petrov"]);
    assert_eq!(names(29), vec!["Ivan Petrov", "Anna Smirnova"]);
    assert_eq!(names(30), vec!["Ivan Petrov", "Anna Smirnova"]);

    let occupant = &grid.day(10).expect("day").occupants[0];
    assert_eq!(occupant.employee_id, 1);
    assert_eq!(occupant.color, "#4363d8");
}

#[test]
fn test_overlapping_intervals_occupy_twice() {
    let employees = vec![employee(
        7,
        "Ivan Petrov",
        &[("2026-03-02", "2026-03-06"), ("2026-03-05", "2026-03-10")],
    )];
    let grid = build_month(2026, 3, &employees, &HolidayCalendar::empty()).expect("grid");

    assert_eq!(grid.day(4).expect("day").occupants.len(), 1);
    assert_eq!(grid.day(5).expect("day").occupants.len(), 2);
    assert_eq!(grid.day(6).expect("day").occupants.len(), 2);
    assert_eq!(grid.day(7).expect("day").occupants.len(), 1);
}

#[test]
fn test_classification_with_builtin_holidays() {
    let holidays = HolidayCalendar::builtin();
    let jan = build_month(2026, 1, &[], &holidays).expect("grid");
    let feb = build_month(2026, 2, &[], &holidays).expect("grid");

    assert_eq!(jan.day(1).expect("day").classification, DayClass::Holiday);
    assert_eq!(jan.day(9).expect("day").classification, DayClass::Holiday);
    // Monday after the winter break
    assert_eq!(jan.day(12).expect("day").classification, DayClass::Workday);
    assert_eq!(feb.day(1).expect("day").classification, DayClass::Weekend);
    assert_eq!(feb.day(23).expect("day").classification, DayClass::Holiday);
    assert_eq!(feb.day(24).expect("day").classification, DayClass::Workday);
}

#[test]
fn test_year_without_holiday_set_only_marks_weekends() {
    let holidays = HolidayCalendar::builtin();
    assert!(!holidays.has_year(2031));

    let grid = build_month(2031, 1, &[], &holidays).expect("grid");
    // 2031-01-01 is a Wednesday
    assert_eq!(grid.day(1).expect("day").classification, DayClass::Workday);
    assert_eq!(grid.day(4).expect("day").classification, DayClass::Weekend);
    assert!(
        grid.days
            .iter()
            .all(|c| c.classification != DayClass::Holiday)
    );
}

#[test]
fn test_configured_year_replaces_builtin_set() {
    let mut overrides = std::collections::BTreeMap::new();
    overrides.insert(2026, vec!["2026-04-15".to_string()]);
    let holidays = HolidayCalendar::with_overrides(&overrides).expect("calendar");

    assert!(holidays.is_holiday(d("2026-04-15")));
    assert!(!holidays.is_holiday(d("2026-01-02")));
    // other built-in years untouched
    assert!(holidays.is_holiday(d("2025-01-02")));

    overrides.insert(2027, vec!["2026-05-01".to_string()]);
    assert!(matches!(
        HolidayCalendar::with_overrides(&overrides),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_build_year_and_invalid_month() {
    let grids = build_year(2026, &[], &HolidayCalendar::builtin()).expect("year");
    assert_eq!(grids.len(), 12);
    assert_eq!(
        grids.iter().map(|g| g.days.len()).sum::<usize>(),
        Period::Year(2026).dates().len()
    );
    for (i, g) in grids.iter().enumerate() {
        assert_eq!(g.month as usize, i + 1);
    }

    assert!(matches!(
        build_month(2026, 13, &[], &HolidayCalendar::empty()),
        Err(AppError::InvalidMonth(13))
    ));
    assert!(build_month(2026, 0, &[], &HolidayCalendar::empty()).is_err());
}

#[test]
fn test_parse_period() {
    assert_eq!(parse_period("2026-02"), Ok(Period::Month(2026, 2)));
    assert_eq!(parse_period("2026"), Ok(Period::Year(2026)));
    assert!(parse_period("2026-13").is_err());
    assert!(parse_period("feb").is_err());
    assert_eq!(Period::Month(2024, 2).dates().len(), 29);
}

#[test]
fn test_builtin_holiday_sets() {
    let holidays = HolidayCalendar::builtin();

    let y2025 = holidays.holidays_in(2025);
    let y2026 = holidays.holidays_in(2026);
    assert_eq!(y2025.len(), 19);
    assert_eq!(y2026.len(), 18);
    assert!(y2026.windows(2).all(|w| w[0] < w[1]));
    assert!(y2026.iter().all(|d| d.year() == 2026));
    assert!(holidays.holidays_in(2024).is_empty());
    assert!(HolidayCalendar::empty().holidays_in(2026).is_empty());
}
