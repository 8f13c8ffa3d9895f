// File: ./src/model/display.rs
use crate::config::Settings;
use crate::model::item::Event;
use crate::model::parser::open_end_date;
use crate::model::recurrence::RecurrenceKind;
use chrono::{NaiveDate, Weekday};
use std::fmt::Write;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st` ...
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("?")
}

/// Formats `date` with a strftime-style pattern, falling back to ISO
/// format when the pattern is not valid.
pub fn format_date(date: NaiveDate, fmt: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(fmt)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

fn month_scope(month: Option<u32>) -> String {
    match month {
        Some(m) => month_name(m).to_string(),
        None => "every month".to_string(),
    }
}

pub fn describe_kind(kind: &RecurrenceKind, date_fmt: &str) -> String {
    match kind {
        RecurrenceKind::OneTime(date) => format_date(*date, date_fmt),
        RecurrenceKind::Daily => "Every day".to_string(),
        RecurrenceKind::Weekly(day) => format!("Every {}", weekday_name(*day)),
        RecurrenceKind::MonthlyByDay(day) => format!("{} day of every month", ordinal(*day)),
        RecurrenceKind::YearlyByMonthDay { month, day } => {
            format!("{} {} every year", month_name(*month), ordinal(*day))
        }
        RecurrenceKind::Todo => "TODO event".to_string(),
        RecurrenceKind::Easter(0) => "Easter".to_string(),
        RecurrenceKind::Easter(offset) => {
            let n = offset.unsigned_abs();
            let unit = if n == 1 { "day" } else { "days" };
            let side = if *offset > 0 { "after" } else { "before" };
            format!("{} {} {} Easter", n, unit, side)
        }
        RecurrenceKind::NthWeekday {
            month,
            nth,
            weekday,
        } => format!(
            "{} {} of {}",
            ordinal(*nth),
            weekday_name(*weekday),
            month_scope(*month)
        ),
        RecurrenceKind::LastWeekday { month, weekday } => {
            format!("Last {} of {}", weekday_name(*weekday), month_scope(*month))
        }
    }
}

impl Event {
    /// Human-readable description of when this event occurs, or `None`
    /// if the event was never parsed.
    pub fn describe(&self, settings: &Settings) -> Option<String> {
        let kind = self.kind.as_ref()?;
        let mut s = describe_kind(kind, &settings.date_fmt);

        if self.period_count > 1 {
            s.push_str(&format!(" (every {} occurrence)", ordinal(self.period_count)));
        }
        if let Some(start) = self.start_date {
            s.push_str(" starting ");
            s.push_str(&format_date(start, &settings.date_fmt));
        }
        if let Some(end) = self.end_date
            && end != open_end_date()
        {
            s.push_str(" until ");
            s.push_str(&format_date(end, &settings.date_fmt));
        }
        Some(s)
    }
}
