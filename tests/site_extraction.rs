use chrono::NaiveDate;
use registrar_calendar::calendar::{export_selected, grouped_event_names};
use registrar_calendar::ics::decode_events;
use registrar_calendar::registrar::{ErrorKind, ExtractOptions};
use registrar_calendar::{Event, EventTable, SiteExtractor};

const FALL_2024: &str = include_str!("fixtures/fall2024.html");

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn fall_2024() -> EventTable {
    SiteExtractor::new().extract_document(FALL_2024).unwrap()
}

#[test]
fn tables_keep_page_order() {
    assert_eq!(
        fall_2024().list_tables(),
        vec![
            "General Calendar Dates",
            "Semester Length Classes",
            "First Half Classes",
            "Second Half Classes",
            "Holidays",
        ]
    );
}

#[test]
fn holidays_are_read_with_exact_dates() {
    let table = fall_2024();

    assert_eq!(
        table.events("Holidays").to_vec(),
        vec![
            Event::single_day("Labor Day", date(2024, 9, 2)),
            Event::new("Fall Break", date(2024, 10, 6), date(2024, 10, 13)),
            Event::new("Thanksgiving Break", date(2024, 11, 28), date(2024, 12, 1)),
            Event::new("Holiday Recess", date(2024, 12, 14), date(2025, 1, 5)),
        ]
    );
}

#[test]
fn unreadable_rows_are_left_out() {
    let (names, starts, ends) = fall_2024().get_events("General Calendar Dates");

    assert_eq!(names, vec!["Registration Opens", "Classes Begin", "Grades Due"]);
    assert_eq!(starts, vec![date(2024, 4, 1), date(2024, 8, 19), date(2024, 12, 17)]);
    assert_eq!(starts, ends);
}

#[test]
fn strict_mode_rejects_the_page() {
    let error = SiteExtractor::new()
        .with_options(ExtractOptions { strict: true })
        .extract_document(FALL_2024)
        .unwrap_err();

    assert_eq!(error.kind, ErrorKind::DateParse);
    assert!(error.message.contains("Commencement"));
}

#[test]
fn same_event_name_in_several_tables() {
    let grouped = grouped_event_names(&fall_2024());
    let with_classes_begin = grouped
        .iter()
        .filter(|(_, names)| names.iter().any(|name| name == "Classes Begin"))
        .count();

    assert_eq!(with_classes_begin, 3);
}

#[test]
fn selected_tables_round_trip_through_icalendar() {
    let table = fall_2024();
    let bytes = export_selected(&table, |name, _| name == "Holidays").unwrap();

    assert_eq!(decode_events(&bytes).unwrap(), table.events("Holidays").to_vec());
}

#[test]
fn json_preset_round_trip() {
    let table = fall_2024();
    let json = table.to_json().unwrap();

    assert_eq!(EventTable::from_json(&json).unwrap(), table);
    assert!(json.contains("\"2025-01-05\""));
}
