//! Anchor scanning: locate every `(date, time, case number)` triple.
//!
//! An anchor marks where a hearing starts; the next anchor (or the end of
//! the text) marks where it ends. The loose date/time and case-number
//! scanners here back the fallback segmenter when no anchor is found.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use pauta_core::case_number::CASE_NUMBER_PATTERN;
use pauta_core::CaseNumber;
use regex::{Captures, Regex};
use tracing::warn;

/// `DD/MM/YY[YY] HH:MM` with 2- or 4-digit year.
const DATE_TIME_PATTERN: &str =
    r"([0-9]{2})/([0-9]{2})/([0-9]{4}|[0-9]{2})\s+([0-9]{2}):([0-9]{2})";

static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{}\s+({})", DATE_TIME_PATTERN, CASE_NUMBER_PATTERN)).unwrap()
});
static DATE_TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(DATE_TIME_PATTERN).unwrap());
static CASE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("({})", CASE_NUMBER_PATTERN)).unwrap());

/// A located hearing start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Byte offset of the date in the normalised text.
    pub offset: usize,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub case_number: CaseNumber,
}

/// A compound match whose date or time is not a real calendar value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedStamp {
    pub offset: usize,
    pub raw: String,
}

/// All compound matches in text order.
#[derive(Debug, Clone, Default)]
pub struct AnchorScan {
    pub anchors: Vec<Anchor>,
    pub rejected: Vec<RejectedStamp>,
}

impl AnchorScan {
    /// Offsets of every match, valid or not. Each one ends the block before it.
    pub fn boundaries(&self) -> Vec<usize> {
        let mut offsets: Vec<usize> = self
            .anchors
            .iter()
            .map(|a| a.offset)
            .chain(self.rejected.iter().map(|r| r.offset))
            .collect();
        offsets.sort_unstable();
        offsets
    }
}

/// A loose `DD/MM/YY HH:MM` occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeHit {
    pub offset: usize,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// A loose case-number occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseNumberHit {
    pub offset: usize,
    pub case_number: CaseNumber,
}

/// Find every compound anchor in the normalised text.
pub fn scan_anchors(text: &str) -> AnchorScan {
    let mut scan = AnchorScan::default();

    for caps in ANCHOR_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let offset = whole.start();
        let stamp = stamp_from_captures(&caps);
        let case_number = CaseNumber::parse(&caps[6]);

        match (stamp, case_number) {
            (Some((date, time)), Ok(case_number)) => scan.anchors.push(Anchor {
                offset,
                date,
                time,
                case_number,
            }),
            _ => {
                warn!("Rejecting anchor at offset {}: {:?}", offset, whole.as_str());
                scan.rejected.push(RejectedStamp {
                    offset,
                    raw: whole.as_str().to_string(),
                });
            }
        }
    }

    scan
}

/// Every valid date/time occurrence, independent of case numbers.
pub fn scan_date_times(text: &str) -> Vec<DateTimeHit> {
    DATE_TIME_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let offset = caps.get(0)?.start();
            let (date, time) = stamp_from_captures(&caps)?;
            Some(DateTimeHit { offset, date, time })
        })
        .collect()
}

/// Every case-number occurrence.
pub fn scan_case_numbers(text: &str) -> Vec<CaseNumberHit> {
    CASE_NUMBER_RE
        .find_iter(text)
        .filter_map(|m| {
            CaseNumber::parse(m.as_str()).ok().map(|case_number| CaseNumberHit {
                offset: m.start(),
                case_number,
            })
        })
        .collect()
}

/// Build date and time from groups 1..=5 (day, month, year, hour, minute).
fn stamp_from_captures(caps: &Captures<'_>) -> Option<(NaiveDate, NaiveTime)> {
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let year_raw = caps.get(3)?.as_str();
    let mut year: i32 = year_raw.parse().ok()?;
    if year_raw.len() == 2 {
        year += 2000;
    }
    let hour: u32 = caps.get(4)?.as_str().parse().ok()?;
    let minute: u32 = caps.get(5)?.as_str().parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some((date, time))
}
