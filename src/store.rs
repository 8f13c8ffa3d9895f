// File: src/store.rs
use crate::config::{MAX_RANGE_DAYS, Settings};
use crate::model::Event;
use crate::model::matcher::candidate_keys;
use anyhow::Result;
use chrono::{Days, NaiveDate};
use std::collections::HashMap;

/// One persisted event record, as handed over by a file loader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRecord {
    pub file_name: String,
    pub file_num: i32,
    /// Raw `BASE[/PERIOD][:START[:END]]` spec.
    pub spec: String,
    pub text: String,
    pub event_type: String,
    pub color: Option<i32>,
    pub hide: bool,
}

/// Outcome of a bulk load. Malformed records are skipped, not fatal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Events grouped by recurrence key, in insertion order within each key.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: HashMap<String, Vec<Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `event` under its key. Duplicates under one key are allowed.
    pub fn insert(&mut self, event: Event) -> Result<()> {
        let Some(key) = event.key.clone() else {
            anyhow::bail!("Cannot index an event without a key");
        };
        if key.is_empty() {
            anyhow::bail!("Cannot index an event with an empty key");
        }
        log::debug!("Indexing event under '{}'", key);
        self.events.entry(key).or_default().push(event);
        Ok(())
    }

    /// Events stored under exactly `key`.
    pub fn get(&self, key: &str) -> &[Event] {
        self.events.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of stored events.
    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.events.values().all(Vec::is_empty)
    }

    /// Parses one record and indexes the resulting event.
    pub fn load_record(&mut self, record: EventRecord, settings: &Settings) -> Result<()> {
        let mut event = Event::new();
        event
            .parse_spec(&record.spec)
            .map_err(|e| anyhow::anyhow!("{}:{}: {}", record.file_name, record.file_num, e))?;

        event.text = Some(record.text);
        event.event_type = Some(record.event_type);
        event.file_name = Some(record.file_name);
        event.file_num = record.file_num;
        event.color = record.color.unwrap_or(settings.event_color);
        event.hide = record.hide;
        event.date_string = event.describe(settings);

        self.insert(event)
    }

    /// Loads every record, logging and counting the ones that fail to parse.
    pub fn load_records<I>(&mut self, records: I, settings: &Settings) -> LoadReport
    where
        I: IntoIterator<Item = EventRecord>,
    {
        let mut report = LoadReport::default();
        for record in records {
            match self.load_record(record, settings) {
                Ok(()) => report.loaded += 1,
                Err(e) => {
                    log::warn!("Skipping event record: {}", e);
                    report.skipped += 1;
                }
            }
        }
        log::info!("Loaded {} events ({} skipped)", report.loaded, report.skipped);
        report
    }

    fn matches(&self, date: NaiveDate) -> impl Iterator<Item = &Event> + '_ {
        candidate_keys(date)
            .into_iter()
            .flat_map(move |key| self.events.get(&key).into_iter().flatten())
            .filter(move |event| event.occurs_on(date))
    }

    /// Every event occurring on `date`, hidden ones included.
    ///
    /// Keys are probed in a fixed order and each key's events keep their
    /// insertion order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.matches(date).collect()
    }

    /// Same as `events_on(date).len()` without building the list.
    pub fn event_count(&self, date: NaiveDate) -> usize {
        self.matches(date).count()
    }

    pub fn visible_events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.matches(date).filter(|e| !e.hide).collect()
    }

    /// Visible events for each day from `center - range_neg_days` to
    /// `center + range_days`, skipping days with nothing to show.
    /// Each side is clamped to [`MAX_RANGE_DAYS`].
    pub fn agenda(&self, center: NaiveDate, settings: &Settings) -> Vec<(NaiveDate, Vec<&Event>)> {
        let before = u64::from(settings.range_neg_days.min(MAX_RANGE_DAYS));
        let after = u64::from(settings.range_days.min(MAX_RANGE_DAYS));
        let Some(first) = center.checked_sub_days(Days::new(before)) else {
            return Vec::new();
        };
        let span = before + after;

        (0..=span)
            .filter_map(|offset| {
                let date = first.checked_add_days(Days::new(offset))?;
                let events = self.visible_events_on(date);
                (!events.is_empty()).then_some((date, events))
            })
            .collect()
    }
}
