//! Block segmentation: slice the normalised text into one span per hearing.

use std::collections::HashSet;

use pauta_core::ParserConfig;
use tracing::debug;

use crate::anchors::{scan_case_numbers, scan_date_times, Anchor, AnchorScan};

/// A span believed to describe exactly one hearing, with the anchor it starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock<'a> {
    pub text: &'a str,
    pub anchor: Anchor,
}

/// Primary strategy: each anchor runs to the next match (valid or not) or the end.
pub fn segment_anchored<'a>(text: &'a str, scan: &AnchorScan) -> Vec<RawBlock<'a>> {
    let boundaries = scan.boundaries();

    scan.anchors
        .iter()
        .map(|anchor| {
            let end = boundaries
                .iter()
                .copied()
                .find(|&b| b > anchor.offset)
                .unwrap_or(text.len());
            RawBlock {
                text: &text[anchor.offset..end],
                anchor: anchor.clone(),
            }
        })
        .collect()
}

/// Fallback strategy: pair each date with the nearest following case number.
///
/// The block is a bounded window around the date, never the rest of the
/// document. Pairings repeating an earlier `(case number, date, time)` are dropped.
pub fn segment_fallback<'a>(text: &'a str, config: &ParserConfig) -> Vec<RawBlock<'a>> {
    let dates = scan_date_times(text);
    let cases = scan_case_numbers(text);
    debug!(
        "Fallback segmentation: {} dates, {} case numbers",
        dates.len(),
        cases.len()
    );

    let mut blocks = Vec::new();
    let mut seen = HashSet::new();

    for hit in &dates {
        let Some(case) = cases.iter().find(|c| c.offset > hit.offset) else {
            continue;
        };
        let distance = text[hit.offset..case.offset].chars().count();
        if distance >= config.fallback_pair_distance {
            debug!(
                "Date at {} has no case number within {} chars",
                hit.offset, config.fallback_pair_distance
            );
            continue;
        }
        if !seen.insert((case.case_number.clone(), hit.date, hit.time)) {
            continue;
        }

        let start = back_chars(text, hit.offset, config.fallback_lookbehind);
        let end = forward_chars(text, hit.offset, config.fallback_window);
        blocks.push(RawBlock {
            text: &text[start..end],
            anchor: Anchor {
                offset: hit.offset,
                date: hit.date,
                time: hit.time,
                case_number: case.case_number.clone(),
            },
        });
    }

    blocks
}

/// Byte offset `n` characters before `from`, clamped to the start.
fn back_chars(text: &str, from: usize, n: usize) -> usize {
    text[..from]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(from)
}

/// Byte offset `n` characters after `from`, clamped to the end.
fn forward_chars(text: &str, from: usize, n: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(n)
        .map(|(i, _)| from + i)
        .unwrap_or(text.len())
}
