// File: src/model/parser.rs
use crate::model::date::{is_digit_key, parse_date, parse_weekday_token, weekday_from_digit};
use crate::model::recurrence::RecurrenceKind;
use chrono::NaiveDate;
use thiserror::Error;

/// Why an event specification was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid date '{0}'")]
    InvalidDate(String),

    #[error("Unrecognized event key '{0}'")]
    InvalidSpec(String),

    #[error("Invalid period '{0}': expected a positive integer")]
    InvalidPeriod(String),

    #[error("Invalid date range '{0}'")]
    InvalidRange(String),
}

/// Result of parsing `BASE[/PERIOD][:START[:END]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSpec {
    /// `BASE`, verbatim. This is the index key.
    pub key: String,
    pub kind: RecurrenceKind,
    pub period_count: u32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// End date used when a spec gives a start date but no end date.
pub fn open_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(3000, 1, 1).unwrap_or(NaiveDate::MAX)
}

pub fn parse_spec(raw: &str) -> Result<ParsedSpec, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::InvalidSpec(String::new()));
    }

    let mut fields = raw.splitn(3, ':');
    let head = fields.next().unwrap_or_default();
    let start_field = fields.next();
    let end_field = fields.next();

    let (base, period_field) = match head.split_once('/') {
        Some((base, period)) => (base, Some(period)),
        None => (head, None),
    };

    let kind = classify(base)?;
    let period_count = match period_field {
        Some(p) => parse_period(p)?,
        None => 1,
    };
    let (start_date, end_date) = parse_range(start_field, end_field)?;

    log::debug!("Parsed '{}' as {:?} (period {})", raw, kind, period_count);

    Ok(ParsedSpec {
        key: base.to_string(),
        kind,
        period_count,
        start_date,
        end_date,
    })
}

/// Maps a base key to its recurrence kind. First match wins.
pub fn classify(base: &str) -> Result<RecurrenceKind, ParseError> {
    if let Some(weekday) = parse_weekday_token(base) {
        return Ok(RecurrenceKind::Weekly(weekday));
    }
    match base {
        "DAILY" => return Ok(RecurrenceKind::Daily),
        "TODO" => return Ok(RecurrenceKind::Todo),
        _ => {}
    }
    if let Some(rest) = base.strip_prefix("EASTER") {
        return parse_easter_offset(rest)
            .map(RecurrenceKind::Easter)
            .ok_or_else(|| ParseError::InvalidSpec(base.to_string()));
    }
    if is_digit_key(base) {
        return classify_digits(base);
    }
    if let Some(rest) = base.strip_prefix('*') {
        return classify_weekday_of_month(base, rest);
    }
    Err(ParseError::InvalidSpec(base.to_string()))
}

fn parse_easter_offset(rest: &str) -> Option<i64> {
    if rest.is_empty() {
        return Some(0);
    }
    let (sign, digits) = rest.split_at_checked(1)?;
    if digits.len() != 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    match sign {
        "+" => Some(magnitude),
        "-" => Some(-magnitude),
        _ => None,
    }
}

fn classify_digits(base: &str) -> Result<RecurrenceKind, ParseError> {
    let invalid = || ParseError::InvalidDate(base.to_string());

    if &base[0..4] == "0000" {
        let month: u32 = base[4..6].parse().map_err(|_| invalid())?;
        let day: u32 = base[6..8].parse().map_err(|_| invalid())?;
        if month != 0 && day != 0 {
            // Leap year so that 0000 0229 is accepted.
            return NaiveDate::from_ymd_opt(2000, month, day)
                .map(|_| RecurrenceKind::YearlyByMonthDay { month, day })
                .ok_or_else(invalid);
        }
        if month == 0 && day != 0 {
            return if day <= 31 {
                Ok(RecurrenceKind::MonthlyByDay(day))
            } else {
                Err(invalid())
            };
        }
    }

    parse_date(base)
        .map(RecurrenceKind::OneTime)
        .ok_or_else(invalid)
}

fn classify_weekday_of_month(base: &str, rest: &str) -> Result<RecurrenceKind, ParseError> {
    let bytes = rest.as_bytes();
    if bytes.len() != 4 || !bytes[0..2].iter().all(u8::is_ascii_digit) {
        return Err(ParseError::InvalidSpec(base.to_string()));
    }

    let month: u32 = rest[0..2]
        .parse()
        .map_err(|_| ParseError::InvalidSpec(base.to_string()))?;
    if month > 12 {
        return Err(ParseError::InvalidDate(base.to_string()));
    }
    let month = (month != 0).then_some(month);

    let weekday = char::from(bytes[3])
        .to_digit(10)
        .and_then(weekday_from_digit)
        .ok_or_else(|| ParseError::InvalidSpec(base.to_string()))?;

    match bytes[2] {
        b'L' => Ok(RecurrenceKind::LastWeekday { month, weekday }),
        b'1'..=b'5' => Ok(RecurrenceKind::NthWeekday {
            month,
            nth: u32::from(bytes[2] - b'0'),
            weekday,
        }),
        _ => Err(ParseError::InvalidSpec(base.to_string())),
    }
}

fn parse_period(field: &str) -> Result<u32, ParseError> {
    let invalid = || ParseError::InvalidPeriod(field.to_string());
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match field.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(invalid()),
    }
}

fn parse_range(
    start_field: Option<&str>,
    end_field: Option<&str>,
) -> Result<(Option<NaiveDate>, Option<NaiveDate>), ParseError> {
    let Some(start_str) = start_field else {
        return Ok((None, None));
    };

    if start_str.is_empty() {
        return match end_field {
            Some(end) => Err(ParseError::InvalidRange(format!(":{}", end))),
            None => Err(ParseError::InvalidDate(String::new())),
        };
    }

    let start = parse_date(start_str).ok_or_else(|| ParseError::InvalidDate(start_str.to_string()))?;
    let end = match end_field {
        Some(end_str) => {
            parse_date(end_str).ok_or_else(|| ParseError::InvalidRange(end_str.to_string()))?
        }
        None => open_end_date(),
    };

    Ok((Some(start), Some(end)))
}
