//! Deduplication against already-registered hearings.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime, Timelike};
use pauta_core::Error;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::types::ParsedHearingEvent;

/// Identity of a hearing: case number, date and start time (minute precision).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    pub case_number: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
}

impl DedupKey {
    pub fn new(case_number: impl Into<String>, date: NaiveDate, start_time: NaiveTime) -> Self {
        let start_time = start_time
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(start_time);
        Self {
            case_number: case_number.into().trim().to_string(),
            date,
            start_time,
        }
    }
}

/// Anything that can be compared against a freshly parsed hearing.
pub trait RegisteredHearing {
    /// `None` when the record lacks a usable key; such records never match.
    fn dedup_key(&self) -> Option<DedupKey>;
}

impl RegisteredHearing for ParsedHearingEvent {
    fn dedup_key(&self) -> Option<DedupKey> {
        Some(DedupKey::new(self.case_number.as_str(), self.date, self.start_time))
    }
}

/// A hearing already registered by the persistence side. Only the three key
/// fields are read; anything else in the JSON is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingRecord {
    #[serde(default)]
    pub case_number: Option<String>,
    /// `YYYY-MM-DD`, optionally followed by a time part.
    #[serde(default)]
    pub date: Option<String>,
    /// `HH:MM` or `HH:MM:SS`.
    #[serde(default)]
    pub start_time: Option<String>,
}

impl ExistingRecord {
    pub fn new(case_number: &str, date: &str, start_time: &str) -> Self {
        Self {
            case_number: Some(case_number.to_string()),
            date: Some(date.to_string()),
            start_time: Some(start_time.to_string()),
        }
    }

    /// Parse a JSON array of records, or a previous parse outcome
    /// (`newEvents` and `duplicateEvents` are both taken).
    pub fn list_from_json(text: &str) -> pauta_core::Result<Vec<Self>> {
        match serde_json::from_str::<Value>(text)? {
            Value::Array(items) => Ok(serde_json::from_value(Value::Array(items))?),
            Value::Object(mut map) => {
                let mut records = Vec::new();
                for field in ["newEvents", "duplicateEvents"] {
                    if let Some(value) = map.remove(field) {
                        records.extend(serde_json::from_value::<Vec<Self>>(value)?);
                    }
                }
                if records.is_empty() && !map.is_empty() && !map.contains_key("strategy") {
                    return Err(Error::InvalidRecord(
                        "expected an array of records or a parse outcome".into(),
                    ));
                }
                Ok(records)
            }
            other => Err(Error::InvalidRecord(format!(
                "expected an array of records, found {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let head = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

impl RegisteredHearing for ExistingRecord {
    fn dedup_key(&self) -> Option<DedupKey> {
        let case_number = self.case_number.as_deref()?;
        let date = parse_date(self.date.as_deref()?)?;
        let time = parse_time(self.start_time.as_deref()?)?;
        Some(DedupKey::new(case_number, date, time))
    }
}

/// Split fresh events into (new, already registered). Order is kept.
pub fn partition<R: RegisteredHearing>(
    events: Vec<ParsedHearingEvent>,
    existing: &[R],
) -> (Vec<ParsedHearingEvent>, Vec<ParsedHearingEvent>) {
    let known: HashSet<DedupKey> = existing.iter().filter_map(|r| r.dedup_key()).collect();
    if known.len() < existing.len() {
        debug!(
            skipped = existing.len() - known.len(),
            "existing records without a usable key or repeated"
        );
    }

    events.into_iter().partition(|event| {
        event
            .dedup_key()
            .map(|key| !known.contains(&key))
            .unwrap_or(true)
    })
}
