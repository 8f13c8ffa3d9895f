// File: ./src/model/item.rs
use crate::model::parser::{ParseError, parse_spec};
use crate::model::recurrence::RecurrenceKind;
use crate::model::template::expand_ages;
use chrono::{NaiveDate, NaiveTime};
use std::fmt;

/// Wall-clock time attached to the start or end of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PalTime {
    pub hour: u32,
    pub min: u32,
}

impl PalTime {
    pub fn new(hour: u32, min: u32) -> Option<Self> {
        (hour < 24 && min < 60).then_some(Self { hour, min })
    }

    /// Parses `H:MM` or `HH:MM`.
    pub fn parse(s: &str) -> Option<Self> {
        let (h, m) = s.split_once(':')?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return None;
        }
        if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        Self::new(h.parse().ok()?, m.parse().ok()?)
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.min, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for PalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.min)
    }
}

/// One calendar entry.
///
/// Every field is owned, so `clone()` is a full deep copy: no string, date or
/// time is shared between an event and its copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Display text. May contain `!YYYY!` age markers.
    pub text: Option<String>,
    /// Free-form category label (e.g. "Birthday").
    pub event_type: Option<String>,
    pub kind: Option<RecurrenceKind>,
    /// Index key: the base of the spec, without `/period` or `:dates`.
    pub key: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<PalTime>,
    pub end_time: Option<PalTime>,
    /// Cached human-readable recurrence description.
    pub date_string: Option<String>,
    pub file_name: Option<String>,
    pub file_num: i32,
    pub color: i32,
    /// Hidden events are still counted but not displayed.
    pub hide: bool,
    /// Only every Nth occurrence counts. Always >= 1.
    pub period_count: u32,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            text: None,
            event_type: None,
            kind: None,
            key: None,
            start_date: None,
            end_date: None,
            start_time: None,
            end_time: None,
            date_string: None,
            file_name: None,
            file_num: 0,
            color: 0,
            hide: false,
            period_count: 1,
        }
    }
}

impl Event {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an event from a raw spec and its text.
    pub fn from_spec(spec: &str, text: &str) -> Result<Self, ParseError> {
        let mut event = Self::new();
        event.parse_spec(spec)?;
        event.text = Some(text.to_string());
        Ok(event)
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Parses `BASE[/PERIOD][:START[:END]]` into this event.
    ///
    /// On error the event is left exactly as it was.
    pub fn parse_spec(&mut self, raw: &str) -> Result<(), ParseError> {
        let parsed = parse_spec(raw)?;
        self.key = Some(parsed.key);
        self.kind = Some(parsed.kind);
        self.period_count = parsed.period_count;
        self.start_date = parsed.start_date;
        self.end_date = parsed.end_date;
        Ok(())
    }

    /// Event text with every `!YYYY!` marker replaced by the age in `today`'s year.
    pub fn escape(&self, today: NaiveDate) -> String {
        expand_ages(self.text.as_deref().unwrap_or_default(), today)
    }
}
