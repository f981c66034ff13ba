use addressbook_core::{AddressBook, Record, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn contact(name: &str, birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).unwrap();
    if let Some(value) = birthday {
        record.add_birthday(value).unwrap();
    }
    record
}

fn book_of(records: Vec<Record>) -> AddressBook {
    let mut book = AddressBook::new();
    for record in records {
        book.add_record(record);
    }
    book
}

#[test]
fn find_returns_none_for_absent_name() {
    let book = book_of(vec![contact("Alice", None)]);

    assert!(book.find("Alice").is_some());
    assert!(book.find("alice").is_none());
    assert!(book.find("Bob").is_none());
}

#[test]
fn add_record_with_same_name_overwrites() {
    let mut book = AddressBook::new();
    book.add_record(contact("Alice", None));
    book.add_record(contact("Alice", Some("15.06.1990")));

    assert_eq!(book.len(), 1);
    assert_eq!(
        book.find("Alice").unwrap().birthday().unwrap().to_string(),
        "15.06.1990"
    );
}

#[test]
fn delete_removes_entry_and_ignores_missing_name() {
    let mut book = book_of(vec![contact("Alice", None), contact("Bob", None)]);

    assert!(book.delete("Alice").is_some());
    assert!(book.delete("Alice").is_none());
    assert!(book.find("Alice").is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn render_joins_records_in_insertion_order() {
    let mut alice = contact("Alice", None);
    alice.add_phone("1111111111").unwrap();
    let book = book_of(vec![alice, contact("Bob", Some("20.06.1985"))]);

    assert_eq!(
        book.to_string(),
        "Contact name: Alice, phones: 1111111111, birthday: None\n\
         Contact name: Bob, phones: , birthday: 20.06.1985"
    );
}

#[test]
fn upcoming_shifts_saturday_birthday_to_monday() {
    let book = book_of(vec![contact("Alice", Some("15.06.1990"))]);

    let upcoming = book.get_upcoming_birthdays(date(2024, 6, 10), DEFAULT_WINDOW_DAYS);
    assert_eq!(
        upcoming,
        vec![UpcomingBirthday {
            name: "Alice".to_string(),
            celebration_date: date(2024, 6, 17),
        }]
    );
}

#[test]
fn upcoming_excludes_birthdays_beyond_window() {
    let book = book_of(vec![contact("Bob", Some("20.06.1985"))]);

    assert!(book
        .get_upcoming_birthdays(date(2024, 6, 10), DEFAULT_WINDOW_DAYS)
        .is_empty());
    assert_eq!(book.get_upcoming_birthdays(date(2024, 6, 10), 10).len(), 1);
}

#[test]
fn upcoming_wraps_into_next_year() {
    let book = book_of(vec![contact("Carol", Some("02.01.1990"))]);

    let upcoming = book.get_upcoming_birthdays(date(2024, 12, 30), DEFAULT_WINDOW_DAYS);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].celebration_date, date(2025, 1, 2));
}

#[test]
fn upcoming_includes_today_and_window_edge() {
    let book = book_of(vec![
        contact("Today", Some("10.06.2000")),
        contact("Edge", Some("17.06.2000")),
        contact("Past", Some("09.06.2000")),
    ]);

    let upcoming = book.get_upcoming_birthdays(date(2024, 6, 10), 7);
    let names: Vec<&str> = upcoming.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Today", "Edge"]);
}

#[test]
fn upcoming_keeps_insertion_order_not_date_order() {
    let book = book_of(vec![
        contact("Later", Some("14.06.1980")),
        contact("NoBirthday", None),
        contact("Sooner", Some("11.06.1980")),
    ]);

    let upcoming = book.get_upcoming_birthdays(date(2024, 6, 10), 7);
    let names: Vec<&str> = upcoming.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Later", "Sooner"]);
}

#[test]
fn upcoming_shift_may_cross_window_end() {
    // Sunday 2024-06-16 is within 6 days; its Monday celebration is day 7.
    let book = book_of(vec![contact("Sunday", Some("16.06.1995"))]);

    let upcoming = book.get_upcoming_birthdays(date(2024, 6, 10), 6);
    assert_eq!(upcoming[0].celebration_date, date(2024, 6, 17));
}

#[test]
fn upcoming_celebrates_leap_day_on_march_first_in_common_years() {
    let book = book_of(vec![contact("Leap", Some("29.02.2000"))]);

    let upcoming = book.get_upcoming_birthdays(date(2023, 2, 25), 7);
    // 2023-03-01 is a Wednesday.
    assert_eq!(upcoming[0].celebration_date, date(2023, 3, 1));

    let upcoming = book.get_upcoming_birthdays(date(2024, 2, 25), 7);
    // 2024-02-29 is a Thursday.
    assert_eq!(upcoming[0].celebration_date, date(2024, 2, 29));
}

#[test]
fn upcoming_birthday_serializes_celebration_as_birthday() {
    let item = UpcomingBirthday {
        name: "Alice".to_string(),
        celebration_date: date(2024, 6, 17),
    };

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["birthday"], "2024-06-17");
    assert!(json.get("celebration_date").is_none());
}
