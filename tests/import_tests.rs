use rvacations::core::colors::ColorAssigner;
use rvacations::core::ingest::{ingest, normalize_record};
use rvacations::errors::AppError;
use rvacations::import::{parse_csv_records, parse_json_records};
use rvacations::models::{EmployeeRecord, VacationRecord};

#[test]
fn test_parse_json_records() {
    let text = r#"[
        {
            "name": "Ivan Petrov",
            "position": "Engineer",
            "total_days": 28,
            "vacations": [
                { "start": "2026-06-10", "end": "2026-06-30", "days": 21 }
            ]
        },
        { "name": "Anna Smirnova" }
    ]"#;

    let records = parse_json_records(text).expect("json");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name.as_deref(), Some("Ivan Petrov"));
    assert_eq!(records[0].vacations.len(), 1);
    assert_eq!(records[0].vacations[0].days, Some(21));
    assert!(records[1].vacations.is_empty());
    assert_eq!(records[1].total_days, None);
}

#[test]
fn test_parse_json_edge_cases() {
    assert!(parse_json_records("").expect("empty").is_empty());
    assert!(parse_json_records("\u{feff}[]").expect("bom").is_empty());
    assert!(matches!(
        parse_json_records(r#"{"name": "x"}"#),
        Err(AppError::Import(_))
    ));
    assert!(parse_json_records("[{").is_err());
}

#[test]
fn test_parse_csv_groups_rows_by_name() {
    let data = "\
name,position,total_days,start,end,days
Ivan Petrov,Engineer,28,2026-06-10,2026-06-30,21
Anna Smirnova,Accountant,14,2026-06-29,2026-07-05,7
Ivan Petrov,,,2026-12-28,2026-12-31,4
Boris Orlov,Driver,20,,,
";
    let (records, discarded) = parse_csv_records(data.as_bytes()).expect("csv");

    assert!(discarded.is_empty());
    let names: Vec<_> = records.iter().filter_map(|r| r.name.as_deref()).collect();
    assert_eq!(names, vec!["Ivan Petrov", "Anna Smirnova", "Boris Orlov"]);
    assert_eq!(records[0].vacations.len(), 2);
    assert_eq!(records[0].position.as_deref(), Some("Engineer"));
    assert_eq!(records[0].total_days, Some(28));
    assert!(records[2].vacations.is_empty());
}

#[test]
fn test_parse_csv_russian_headers() {
    let data = "\
ФИО;Должность;Всего дней;Дата начала;Дата окончания
Иванов Иван;Инженер;28;2026-02-09;2026-02-20
";
    let data = data.replace(';', ",");
    let (records, discarded) = parse_csv_records(data.as_bytes()).expect("csv");

    assert!(discarded.is_empty());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name.as_deref(), Some("Иванов Иван"));
    assert_eq!(records[0].position.as_deref(), Some("Инженер"));
    assert_eq!(records[0].total_days, Some(28));
    assert_eq!(records[0].vacations[0].start.as_deref(), Some("2026-02-09"));
}

#[test]
fn test_parse_csv_rows_without_name_are_discarded() {
    let data = "\
employee,start,end
,2026-01-12,2026-01-16
Vera,2026-01-12,2026-01-16
";
    let (records, discarded) = parse_csv_records(data.as_bytes()).expect("csv");

    assert_eq!(records.len(), 1);
    assert_eq!(discarded.len(), 1);
    assert!(matches!(&discarded[0], AppError::MissingRequiredField(f) if f.contains("row 1")));

    assert!(matches!(
        parse_csv_records("start,end\n2026-01-01,2026-01-02\n".as_bytes()),
        Err(AppError::Import(_))
    ));
}

#[test]
fn test_normalize_drops_invalid_intervals_and_recomputes_days() {
    let rec = EmployeeRecord {
        name: Some("  Ivan Petrov ".into()),
        position: None,
        total_days: Some(28),
        vacations: vec![
            VacationRecord {
                start: Some("2026-06-10".into()),
                end: Some("2026-06-30".into()),
                days: Some(20),
            },
            VacationRecord::new("2026-07-05", "2026-07-01"),
            VacationRecord {
                start: None,
                end: Some("2026-08-01".into()),
                days: None,
            },
            VacationRecord::new("2026-09-01", "2026-09-01"),
        ],
        color: None,
    };

    let n = normalize_record(&rec, "#000000").expect("record");
    assert_eq!(n.employee.name, "Ivan Petrov");
    assert_eq!(n.employee.color, "#000000");
    assert_eq!(n.employee.vacations.len(), 2);
    assert_eq!(n.employee.vacations[0].days(), 21);
    assert_eq!(n.dropped_intervals, 2);
    assert_eq!(n.days_mismatches, 1);
}

#[test]
fn test_normalize_rejects_missing_name_and_negative_allotment() {
    let nameless = EmployeeRecord {
        name: Some("   ".into()),
        ..Default::default()
    };
    assert!(matches!(
        normalize_record(&nameless, "#000000"),
        Err(AppError::MissingRequiredField(_))
    ));

    let negative = EmployeeRecord {
        name: Some("Vera".into()),
        total_days: Some(-3),
        ..Default::default()
    };
    assert!(matches!(
        normalize_record(&negative, "#000000"),
        Err(AppError::InvalidAllotment(-3))
    ));
}

#[test]
fn test_ingest_assigns_colors_by_ordinal() {
    let records = vec![
        EmployeeRecord {
            name: Some("A".into()),
            ..Default::default()
        },
        EmployeeRecord::default(),
        EmployeeRecord {
            name: Some("B".into()),
            color: Some("#123456".into()),
            ..Default::default()
        },
        EmployeeRecord {
            name: Some("C".into()),
            ..Default::default()
        },
    ];
    let assigner = ColorAssigner::default();
    let (employees, report) = ingest(&records, &assigner, 2);

    assert_eq!(report.accepted, 3);
    assert_eq!(report.discarded.len(), 1);
    assert!(!report.is_clean());
    assert_eq!(employees[0].color, assigner.tag_for(2));
    assert_eq!(employees[1].color, "#123456");
    assert_eq!(employees[2].color, assigner.tag_for(4));
}

#[test]
fn test_unusable_record_color_falls_back_to_assigned_tag() {
    let rec = EmployeeRecord {
        name: Some("Vera".into()),
        color: Some("#aéaaa".into()),
        ..Default::default()
    };
    let n = normalize_record(&rec, "#3cb44b").expect("record");
    assert_eq!(n.employee.color, "#3cb44b");
}
