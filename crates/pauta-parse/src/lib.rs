//! Pauta Parse — turns a pasted PJe hearing-schedule export into structured
//! hearing records, split into new and already-registered sets.
//!
//! Stages: normalise, scan anchors, segment (anchored, else fallback),
//! extract fields, classify, compose, deduplicate.

pub mod anchors;
pub mod classify;
pub mod compose;
pub mod dedup;
pub mod extract;
pub mod normalize;
pub mod pipeline;
pub mod segment;
pub mod summary;
pub mod title_case;
pub mod types;

pub use dedup::{DedupKey, ExistingRecord, RegisteredHearing};
pub use pipeline::{parse, HearingParser};
pub use summary::ImportSummary;
pub use title_case::to_title_case;
pub use types::{
    Diagnostic, HearingKind, ParseOutcome, ParsedHearingEvent, PartyRecord, PartyRole, ReviewField,
    SegmentStrategy,
};
