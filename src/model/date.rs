// File: ./src/model/date.rs
//! Conversions between `YYYYMMDD` keys and calendar dates, plus the small
//! amount of calendar arithmetic the matcher needs.
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Length of every date key (`YYYYMMDD`).
pub const KEY_LEN: usize = 8;

const WEEKDAY_TOKENS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "MON"),
    (Weekday::Tue, "TUE"),
    (Weekday::Wed, "WED"),
    (Weekday::Thu, "THU"),
    (Weekday::Fri, "FRI"),
    (Weekday::Sat, "SAT"),
    (Weekday::Sun, "SUN"),
];

/// Parses an 8-digit `YYYYMMDD` key into a date.
///
/// Returns `None` for anything that is not a real Gregorian date: wrong length,
/// non-digit characters, year 0, month 0 or > 12, or a day past the end of the month.
pub fn parse_date(key: &str) -> Option<NaiveDate> {
    if !is_digit_key(key) {
        return None;
    }
    let year: i32 = key[0..4].parse().ok()?;
    let month: u32 = key[4..6].parse().ok()?;
    let day: u32 = key[6..8].parse().ok()?;
    if year == 0 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Renders a date as its zero-padded `YYYYMMDD` key.
pub fn format_key(date: NaiveDate) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// True when `s` is exactly eight ASCII digits.
pub fn is_digit_key(s: &str) -> bool {
    s.len() == KEY_LEN && s.bytes().all(|b| b.is_ascii_digit())
}

pub fn weekday_token(day: Weekday) -> &'static str {
    WEEKDAY_TOKENS[day.num_days_from_monday() as usize].1
}

/// Case-sensitive lookup of `MON`..`SUN`.
pub fn parse_weekday_token(token: &str) -> Option<Weekday> {
    WEEKDAY_TOKENS
        .iter()
        .find(|(_, t)| *t == token)
        .map(|(w, _)| *w)
}

/// Weekday from its pal digit, where 1 is Sunday and 7 is Saturday.
pub fn weekday_from_digit(digit: u32) -> Option<Weekday> {
    WEEKDAY_TOKENS
        .iter()
        .map(|(w, _)| *w)
        .find(|w| w.number_from_sunday() == digit)
}

/// Easter Sunday for `year` (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if year <= 0 {
        return None;
    }
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    NaiveDate::from_ymd_opt(year, (n / 31) as u32, (n % 31 + 1) as u32)
}

/// Calendar months from `from`'s month to `to`'s month (day of month ignored).
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to.year() as i64 - from.year() as i64) * 12 + to.month() as i64 - from.month() as i64
}

/// The last `weekday` of the given month.
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    let back = (last_day.weekday().num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
    last_day.checked_sub_days(Days::new(u64::from(back)))
}

/// 1-based index of `date`'s weekday within its month (1..=5).
pub fn week_of_month(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

/// True when no later day of the same month shares `date`'s weekday.
pub fn is_last_weekday_of_month(date: NaiveDate) -> bool {
    date.checked_add_days(Days::new(7))
        .is_none_or(|next| next.month() != date.month())
}
