// File: ./src/model/recurrence.rs
use crate::model::date::{easter_sunday, last_weekday_of_month, months_between, weekday_token};
use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use strum::EnumIter;

/// How an event repeats. Computed once from the event key at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrenceKind {
    /// `YYYYMMDD`
    OneTime(NaiveDate),
    /// `DAILY`
    Daily,
    /// `MON`..`SUN`
    Weekly(Weekday),
    /// `000000DD`
    MonthlyByDay(u32),
    /// `0000MMDD`
    YearlyByMonthDay { month: u32, day: u32 },
    /// `TODO`
    Todo,
    /// `EASTER`, `EASTER+NNN`, `EASTER-NNN`
    Easter(i64),
    /// `*MMND`: the Nth weekday D of month MM (`00` = every month).
    NthWeekday {
        month: Option<u32>,
        nth: u32,
        weekday: Weekday,
    },
    /// `*MMLD`: the last weekday D of month MM (`00` = every month).
    LastWeekday { month: Option<u32>, weekday: Weekday },
}

/// Payload-free family of a [`RecurrenceKind`], used for listings and help.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum KindTag {
    OneTime,
    Daily,
    Weekly,
    MonthlyByDay,
    YearlyByMonthDay,
    Todo,
    Easter,
    NthWeekday,
    LastWeekday,
}

impl KindTag {
    pub fn label(&self) -> &'static str {
        match self {
            KindTag::OneTime => "One-time",
            KindTag::Daily => "Daily",
            KindTag::Weekly => "Weekly",
            KindTag::MonthlyByDay => "Monthly",
            KindTag::YearlyByMonthDay => "Yearly",
            KindTag::Todo => "TODO",
            KindTag::Easter => "Easter",
            KindTag::NthWeekday => "Nth weekday of month",
            KindTag::LastWeekday => "Last weekday of month",
        }
    }

    /// Key syntax as written in event files.
    pub fn syntax(&self) -> &'static str {
        match self {
            KindTag::OneTime => "YYYYMMDD",
            KindTag::Daily => "DAILY",
            KindTag::Weekly => "MON|TUE|WED|THU|FRI|SAT|SUN",
            KindTag::MonthlyByDay => "000000DD",
            KindTag::YearlyByMonthDay => "0000MMDD",
            KindTag::Todo => "TODO",
            KindTag::Easter => "EASTER[+NNN|-NNN]",
            KindTag::NthWeekday => "*MMND (MM=00 every month, N=1-5, D=1 Sun..7 Sat)",
            KindTag::LastWeekday => "*MMLD (MM=00 every month, D=1 Sun..7 Sat)",
        }
    }

    pub fn example(&self) -> &'static str {
        match self {
            KindTag::OneTime => "20241225",
            KindTag::Daily => "DAILY",
            KindTag::Weekly => "MON",
            KindTag::MonthlyByDay => "00000015",
            KindTag::YearlyByMonthDay => "00001225",
            KindTag::Todo => "TODO",
            KindTag::Easter => "EASTER-002",
            KindTag::NthWeekday => "*0521",
            KindTag::LastWeekday => "*05L2",
        }
    }
}

impl RecurrenceKind {
    pub fn tag(&self) -> KindTag {
        match self {
            RecurrenceKind::OneTime(_) => KindTag::OneTime,
            RecurrenceKind::Daily => KindTag::Daily,
            RecurrenceKind::Weekly(_) => KindTag::Weekly,
            RecurrenceKind::MonthlyByDay(_) => KindTag::MonthlyByDay,
            RecurrenceKind::YearlyByMonthDay { .. } => KindTag::YearlyByMonthDay,
            RecurrenceKind::Todo => KindTag::Todo,
            RecurrenceKind::Easter(_) => KindTag::Easter,
            RecurrenceKind::NthWeekday { .. } => KindTag::NthWeekday,
            RecurrenceKind::LastWeekday { .. } => KindTag::LastWeekday,
        }
    }

    /// Canonical key for this kind. For Easter the sign of a zero offset is
    /// not preserved, so this may differ from the key it was parsed from.
    pub fn to_key(&self) -> String {
        match self {
            RecurrenceKind::OneTime(date) => crate::model::date::format_key(*date),
            RecurrenceKind::Daily => "DAILY".to_string(),
            RecurrenceKind::Weekly(w) => weekday_token(*w).to_string(),
            RecurrenceKind::MonthlyByDay(day) => format!("000000{:02}", day),
            RecurrenceKind::YearlyByMonthDay { month, day } => {
                format!("0000{:02}{:02}", month, day)
            }
            RecurrenceKind::Todo => "TODO".to_string(),
            RecurrenceKind::Easter(0) => "EASTER".to_string(),
            RecurrenceKind::Easter(offset) => easter_key(*offset),
            RecurrenceKind::NthWeekday {
                month,
                nth,
                weekday,
            } => format!(
                "*{:02}{}{}",
                month.unwrap_or(0),
                nth,
                weekday.number_from_sunday()
            ),
            RecurrenceKind::LastWeekday { month, weekday } => format!(
                "*{:02}L{}",
                month.unwrap_or(0),
                weekday.number_from_sunday()
            ),
        }
    }

    /// Occurrences from `start` up to `date` (an occurrence itself), minus one,
    /// so the first occurrence on or after `start` is unit 0.
    ///
    /// Monthly and yearly kinds count calendar months or years from the
    /// first one whose occurrence does not fall before `start`.
    /// `None` for kinds that do not repeat.
    pub fn elapsed_units(&self, start: NaiveDate, date: NaiveDate) -> Option<i64> {
        let days = (date - start).num_days();
        let periods = match self {
            RecurrenceKind::OneTime(_) | RecurrenceKind::Todo => return None,
            RecurrenceKind::Daily => return Some(days),
            RecurrenceKind::Weekly(_) => return Some(days.div_euclid(7)),
            RecurrenceKind::MonthlyByDay(_)
            | RecurrenceKind::NthWeekday { month: None, .. }
            | RecurrenceKind::LastWeekday { month: None, .. } => months_between(start, date),
            RecurrenceKind::YearlyByMonthDay { .. }
            | RecurrenceKind::Easter(_)
            | RecurrenceKind::NthWeekday { month: Some(_), .. }
            | RecurrenceKind::LastWeekday { month: Some(_), .. } => {
                date.year() as i64 - start.year() as i64
            }
        };
        let missed_first = self
            .occurrence_in(start.year(), start.month())
            .is_none_or(|first| first < start);
        Some(if missed_first { periods - 1 } else { periods })
    }

    /// The occurrence in the month (or, for yearly kinds, the year) holding
    /// `year`/`month`. `None` if that period has none.
    fn occurrence_in(&self, year: i32, month: u32) -> Option<NaiveDate> {
        match *self {
            RecurrenceKind::OneTime(_)
            | RecurrenceKind::Daily
            | RecurrenceKind::Weekly(_)
            | RecurrenceKind::Todo => None,
            RecurrenceKind::MonthlyByDay(day) => NaiveDate::from_ymd_opt(year, month, day),
            RecurrenceKind::YearlyByMonthDay { month, day } => {
                NaiveDate::from_ymd_opt(year, month, day)
            }
            RecurrenceKind::Easter(offset) => {
                easter_sunday(year)?.checked_add_signed(TimeDelta::try_days(offset)?)
            }
            RecurrenceKind::NthWeekday {
                month: m,
                nth,
                weekday,
            } => NaiveDate::from_weekday_of_month_opt(
                year,
                m.unwrap_or(month),
                weekday,
                u8::try_from(nth).ok()?,
            ),
            RecurrenceKind::LastWeekday { month: m, weekday } => {
                last_weekday_of_month(year, m.unwrap_or(month), weekday)
            }
        }
    }
}

/// `EASTER+NNN` / `EASTER-NNN` for a non-zero offset.
pub fn easter_key(offset: i64) -> String {
    let sign = if offset < 0 { '-' } else { '+' };
    format!("EASTER{}{:03}", sign, offset.abs())
}
