// File: ./tests/recurrence_kinds.rs
use chrono::NaiveDate;
use pal::model::Event;
use pal::store::EventStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn store_with(spec: &str) -> EventStore {
    let mut store = EventStore::new();
    store.insert(Event::from_spec(spec, spec).unwrap()).unwrap();
    store
}

fn occurs(store: &EventStore, d: NaiveDate) -> bool {
    store.event_count(d) > 0
}

#[test]
fn test_weekly() {
    let store = store_with("WED");
    assert!(occurs(&store, date(2024, 1, 3)));
    assert!(occurs(&store, date(2024, 1, 10)));
    assert!(!occurs(&store, date(2024, 1, 4)));
}

#[test]
fn test_weekly_every_other_week() {
    let store = store_with("MON/2:20240101:20241231");
    assert!(occurs(&store, date(2024, 1, 1)));
    assert!(!occurs(&store, date(2024, 1, 8)));
    assert!(occurs(&store, date(2024, 1, 15)));
    assert!(!occurs(&store, date(2024, 1, 22)));
    assert!(occurs(&store, date(2024, 1, 29)));
    assert!(!occurs(&store, date(2025, 1, 13)), "past the end date");
}

#[test]
fn test_monthly_by_day() {
    let store = store_with("00000031");
    assert!(occurs(&store, date(2024, 1, 31)));
    assert!(occurs(&store, date(2024, 3, 31)));
    assert!(!occurs(&store, date(2024, 4, 30)), "April has no 31st");
}

#[test]
fn test_monthly_every_other_month() {
    let store = store_with("00000015/2:20240115");
    assert!(occurs(&store, date(2024, 1, 15)));
    assert!(!occurs(&store, date(2024, 2, 15)));
    assert!(occurs(&store, date(2024, 3, 15)));
    assert!(occurs(&store, date(2025, 1, 15)));
}

#[test]
fn test_yearly() {
    let store = store_with("00001225");
    assert!(occurs(&store, date(1999, 12, 25)));
    assert!(occurs(&store, date(2024, 12, 25)));
    assert!(!occurs(&store, date(2024, 12, 24)));

    let leap = store_with("00000229");
    assert!(occurs(&leap, date(2024, 2, 29)));
    assert!(!occurs(&leap, date(2023, 3, 1)));
}

#[test]
fn test_yearly_every_other_year() {
    let store = store_with("00001225/2:20201225");
    assert!(occurs(&store, date(2022, 12, 25)));
    assert!(!occurs(&store, date(2023, 12, 25)));
    assert!(occurs(&store, date(2024, 12, 25)));
}

#[test]
fn test_period_counts_from_first_occurrence_after_start() {
    // Each start date falls after that period's own occurrence.
    let weekly = store_with("MON/2:20240103");
    assert!(occurs(&weekly, date(2024, 1, 8)));
    assert!(!occurs(&weekly, date(2024, 1, 15)));
    assert!(occurs(&weekly, date(2024, 1, 22)));

    let monthly = store_with("00000015/2:20240120");
    assert!(!occurs(&monthly, date(2024, 1, 15)), "before the start date");
    assert!(occurs(&monthly, date(2024, 2, 15)));
    assert!(!occurs(&monthly, date(2024, 3, 15)));
    assert!(occurs(&monthly, date(2024, 4, 15)));

    let yearly = store_with("00001225/2:20241226");
    assert!(!occurs(&yearly, date(2024, 12, 25)));
    assert!(occurs(&yearly, date(2025, 12, 25)));
    assert!(!occurs(&yearly, date(2026, 12, 25)));
    assert!(occurs(&yearly, date(2027, 12, 25)));
}

#[test]
fn test_period_with_moving_yearly_dates() {
    // Easter 2024 is March 31; 2025 April 20; 2026 April 5; 2027 March 28.
    let easter = store_with("EASTER/2:20240401");
    assert!(occurs(&easter, date(2025, 4, 20)));
    assert!(!occurs(&easter, date(2026, 4, 5)));
    assert!(occurs(&easter, date(2027, 3, 28)));

    // Second Sunday of May: 2024-05-12 is already past.
    let mothers_day = store_with("*0521/2:20240520");
    assert!(occurs(&mothers_day, date(2025, 5, 11)));
    assert!(!occurs(&mothers_day, date(2026, 5, 10)));
    assert!(occurs(&mothers_day, date(2027, 5, 9)));
}

#[test]
fn test_period_with_monthly_weekday_kinds() {
    // Last Friday of February 2024 is the 23rd.
    let store = store_with("*00L6/2:20240227");
    assert!(occurs(&store, date(2024, 3, 29)));
    assert!(!occurs(&store, date(2024, 4, 26)));
    assert!(occurs(&store, date(2024, 5, 31)));
}

#[test]
fn test_period_when_start_month_has_no_occurrence() {
    // April has no 31st, so May 31 is the first occurrence.
    let store = store_with("00000031/2:20240410");
    assert!(occurs(&store, date(2024, 5, 31)));
    assert!(occurs(&store, date(2024, 7, 31)));
    assert!(!occurs(&store, date(2024, 8, 31)));
}

#[test]
fn test_todo_shows_every_day() {
    let store = store_with("TODO");
    assert!(occurs(&store, date(2024, 1, 1)));
    assert!(occurs(&store, date(2031, 7, 19)));
}

#[test]
fn test_easter() {
    let store = store_with("EASTER");
    assert!(occurs(&store, date(2024, 3, 31)));
    assert!(occurs(&store, date(2025, 4, 20)));
    assert!(!occurs(&store, date(2025, 3, 31)));
}

#[test]
fn test_easter_offsets() {
    let good_friday = store_with("EASTER-002");
    assert!(occurs(&good_friday, date(2024, 3, 29)));
    assert!(occurs(&good_friday, date(2025, 4, 18)));
    assert!(!occurs(&good_friday, date(2024, 3, 31)));

    let ash_wednesday = store_with("EASTER-046");
    assert!(occurs(&ash_wednesday, date(2024, 2, 14)));

    let easter_monday = store_with("EASTER+001");
    assert!(occurs(&easter_monday, date(2024, 4, 1)));

    let explicit_zero = store_with("EASTER+000");
    assert!(occurs(&explicit_zero, date(2024, 3, 31)));
}

#[test]
fn test_nth_weekday_of_month() {
    // Thanksgiving: 4th Thursday of November.
    let thanksgiving = store_with("*1145");
    assert!(occurs(&thanksgiving, date(2024, 11, 28)));
    assert!(occurs(&thanksgiving, date(2023, 11, 23)));
    assert!(!occurs(&thanksgiving, date(2024, 11, 21)));
    assert!(!occurs(&thanksgiving, date(2024, 10, 24)));

    // Mother's Day (US): 2nd Sunday of May.
    let mothers_day = store_with("*0521");
    assert!(occurs(&mothers_day, date(2024, 5, 12)));

    // 1st Tuesday of every month.
    let first_tuesday = store_with("*0013");
    assert!(occurs(&first_tuesday, date(2024, 1, 2)));
    assert!(occurs(&first_tuesday, date(2024, 2, 6)));
    assert!(!occurs(&first_tuesday, date(2024, 2, 13)));
}

#[test]
fn test_last_weekday_of_month() {
    // Memorial Day: last Monday of May.
    let memorial = store_with("*05L2");
    assert!(occurs(&memorial, date(2024, 5, 27)));
    assert!(!occurs(&memorial, date(2024, 5, 20)));

    // Last Friday of every month.
    let last_friday = store_with("*00L6");
    assert!(occurs(&last_friday, date(2024, 1, 26)));
    assert!(occurs(&last_friday, date(2024, 2, 23)));
    assert!(occurs(&last_friday, date(2024, 5, 31)));
    assert!(!occurs(&last_friday, date(2024, 5, 24)));
}

#[test]
fn test_canonical_keys_round_trip() {
    for spec in [
        "20241225", "DAILY", "TUE", "00000009", "00000704", "TODO", "EASTER", "EASTER+039",
        "EASTER-007", "*1145", "*00L1",
    ] {
        let event = Event::from_spec(spec, "").unwrap();
        assert_eq!(event.kind.unwrap().to_key(), spec);
    }
    // The sign of a zero offset is not kept.
    let zero = Event::from_spec("EASTER-000", "").unwrap();
    assert_eq!(zero.kind.unwrap().to_key(), "EASTER");
}
