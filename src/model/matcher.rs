// File: ./src/model/matcher.rs
use crate::model::date::{
    easter_sunday, format_key, is_last_weekday_of_month, week_of_month, weekday_token,
};
use crate::model::item::Event;
use crate::model::recurrence::easter_key;
use chrono::{Datelike, NaiveDate};

/// Every index key that can hold an event occurring on `date`, in probe order:
/// exact date, weekday, yearly, monthly, `DAILY`, `TODO`, Easter, then the
/// nth-weekday and last-weekday families.
pub fn candidate_keys(date: NaiveDate) -> Vec<String> {
    let mut keys = vec![
        format_key(date),
        weekday_token(date.weekday()).to_string(),
        format!("0000{:02}{:02}", date.month(), date.day()),
        format!("000000{:02}", date.day()),
        "DAILY".to_string(),
        "TODO".to_string(),
    ];

    if let Some(easter) = easter_sunday(date.year()) {
        let offset = (date - easter).num_days();
        if offset == 0 {
            keys.push("EASTER".to_string());
            keys.push("EASTER+000".to_string());
            keys.push("EASTER-000".to_string());
        } else if offset.abs() <= 999 {
            keys.push(easter_key(offset));
        }
    }

    let weekday = date.weekday().number_from_sunday();
    let nth = week_of_month(date);
    keys.push(format!("*{:02}{}{}", date.month(), nth, weekday));
    keys.push(format!("*00{}{}", nth, weekday));
    if is_last_weekday_of_month(date) {
        keys.push(format!("*{:02}L{}", date.month(), weekday));
        keys.push(format!("*00L{}", weekday));
    }

    keys
}

impl Event {
    /// Whether this event, already found under one of `date`'s candidate keys,
    /// counts on `date` once its date range and period are applied.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start_date
            && date < start
        {
            return false;
        }
        if let Some(end) = self.end_date
            && date > end
        {
            return false;
        }
        if self.period_count <= 1 {
            return true;
        }

        // Without a start date there is nothing to count from.
        let (Some(start), Some(kind)) = (self.start_date, self.kind.as_ref()) else {
            return true;
        };
        match kind.elapsed_units(start, date) {
            Some(units) => units % i64::from(self.period_count) == 0,
            None => true,
        }
    }
}
