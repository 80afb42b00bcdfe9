//! End-to-end parse: normalise, segment, extract, classify, compose, deduplicate.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use pauta_core::{JurisdictionChoice, ParserConfig};
use tracing::{debug, error, info};

use crate::anchors::scan_anchors;
use crate::classify::classify;
use crate::compose::compose;
use crate::dedup::{partition, RegisteredHearing};
use crate::extract::extract_fields;
use crate::normalize::normalize;
use crate::segment::{segment_anchored, segment_fallback, RawBlock};
use crate::types::{Diagnostic, ParseOutcome, ParsedHearingEvent, ReviewField, SegmentStrategy};

/// Hearing-schedule parser. Holds only configuration, so one instance can be
/// shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct HearingParser {
    config: ParserConfig,
}

impl HearingParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a pasted export. Never fails: faults surface as a
    /// [`Diagnostic::Failure`] with no events.
    pub fn parse<R: RegisteredHearing>(
        &self,
        raw: &str,
        choice: JurisdictionChoice,
        existing: &[R],
    ) -> ParseOutcome {
        match panic::catch_unwind(AssertUnwindSafe(|| self.run(raw, choice, existing))) {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(e)) => {
                error!("Parse failed: {}", e);
                ParseOutcome::failure(e.to_string())
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!("Parse panicked: {}", message);
                ParseOutcome::failure(message)
            }
        }
    }

    fn run<R: RegisteredHearing>(
        &self,
        raw: &str,
        choice: JurisdictionChoice,
        existing: &[R],
    ) -> pauta_core::Result<ParseOutcome> {
        self.config.validate()?;
        let text = normalize(raw);
        let scan = scan_anchors(&text);
        let mut diagnostics: Vec<Diagnostic> = scan
            .rejected
            .iter()
            .map(|r| Diagnostic::MalformedStamp {
                offset: r.offset,
                raw: r.raw.clone(),
            })
            .collect();

        let (strategy, blocks) = if !scan.anchors.is_empty() {
            (SegmentStrategy::Anchored, segment_anchored(&text, &scan))
        } else {
            info!("No anchors found, trying fallback segmentation");
            let blocks = segment_fallback(&text, &self.config);
            if blocks.is_empty() {
                (SegmentStrategy::None, blocks)
            } else {
                (SegmentStrategy::Fallback, blocks)
            }
        };
        debug!("{} blocks via {:?} segmentation", blocks.len(), strategy);

        if blocks.is_empty() {
            info!("No hearings recognized");
            diagnostics.push(Diagnostic::NoHearingsRecognized);
            return Ok(ParseOutcome::empty(strategy, diagnostics));
        }

        let events: Vec<ParsedHearingEvent> = blocks
            .iter()
            .map(|block| self.build_event(block, choice))
            .collect();

        let detected_jurisdiction = events.first().map(|e| e.jurisdiction);
        let detected_authority = events
            .iter()
            .find(|e| !e.review_fields.contains(&ReviewField::IssuingAuthority))
            .map(|e| e.issuing_authority.clone());

        let (new_events, duplicate_events) = partition(events, existing);
        info!(
            "Parsed {} hearings ({} new, {} already registered)",
            new_events.len() + duplicate_events.len(),
            new_events.len(),
            duplicate_events.len()
        );

        Ok(ParseOutcome {
            new_events,
            duplicate_events,
            detected_jurisdiction,
            detected_authority,
            strategy,
            diagnostics,
        })
    }

    fn build_event(
        &self,
        block: &RawBlock<'_>,
        choice: JurisdictionChoice,
    ) -> ParsedHearingEvent {
        let fields = extract_fields(block.text);
        let classified = classify(&fields, block.text, choice);
        debug!(
            case_number = %block.anchor.case_number,
            jurisdiction = %classified.jurisdiction,
            kind = %classified.kind.kind,
            "Classified block"
        );
        compose(block, fields, classified, &self.config.venue)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "internal error".to_string())
}

/// Parse with the default configuration.
pub fn parse<R: RegisteredHearing>(
    raw: &str,
    choice: JurisdictionChoice,
    existing: &[R],
) -> ParseOutcome {
    HearingParser::default().parse(raw, choice, existing)
}
