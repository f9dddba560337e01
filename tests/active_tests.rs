mod common;
use common::{d, employee};
use rvacations::core::active::active_on;

fn names(today: &str, employees: &[rvacations::models::Employee]) -> Vec<String> {
    active_on(d(today), employees)
        .iter()
        .map(|e| e.name.clone())
        .collect()
}

#[test]
fn test_active_on_inside_interval() {
    let employees = vec![
        employee(1, "Ivan Petrov", &[("2026-06-10", "2026-06-30")]),
        employee(2, "Anna Smirnova", &[("2026-08-01", "2026-08-14")]),
    ];
    assert_eq!(names("2026-06-15", &employees), vec!["Ivan Petrov"]);
}

#[test]
fn test_active_bounds_are_inclusive() {
    let employees = vec![employee(1, "Ivan Petrov", &[("2026-06-10", "2026-06-30")])];

    assert_eq!(names("2026-06-10", &employees), vec!["Ivan Petrov"]);
    assert_eq!(names("2026-06-30", &employees), vec!["Ivan Petrov"]);
    assert!(names("2026-06-09", &employees).is_empty());
    assert!(names("2026-07-01", &employees).is_empty());
}

#[test]
fn test_active_keeps_collection_order_and_lists_once() {
    let employees = vec![
        employee(
            3,
            "Boris",
            &[("2026-05-01", "2026-05-10"), ("2026-05-05", "2026-05-20")],
        ),
        employee(1, "Alla", &[("2026-05-07", "2026-05-07")]),
        employee(2, "Vera", &[]),
    ];

    assert_eq!(names("2026-05-07", &employees), vec!["Boris", "Alla"]);
    assert_eq!(names("2026-05-15", &employees), vec!["Boris"]);
}

#[test]
fn test_active_on_empty_collection() {
    assert!(names("2026-01-01", &[]).is_empty());
}
