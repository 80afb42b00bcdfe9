//! Classification of extracted fields into the fixed enumerations.

pub mod hearing_kind;
pub mod jurisdiction;
pub mod status;

use pauta_core::{HearingStatus, Jurisdiction, JurisdictionChoice};

use crate::extract::ExtractedFields;
pub use hearing_kind::{classify_hearing_kind, KindMatch, KindSource};
pub use jurisdiction::classify_jurisdiction;
pub use status::classify_status;

/// Situation assumed when the block names none.
pub const DEFAULT_SITUATION: &str = "designada";

/// Fields mapped onto fixed categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFields {
    pub jurisdiction: Jurisdiction,
    pub kind: KindMatch,
    pub status: HearingStatus,
    /// Raw situation word the status was derived from.
    pub situation: String,
}

/// Classify one block. A forced jurisdiction is used unconditionally.
pub fn classify(fields: &ExtractedFields, block: &str, choice: JurisdictionChoice) -> ClassifiedFields {
    let jurisdiction = choice.forced().unwrap_or_else(|| {
        classify_jurisdiction(
            fields.issuing_authority.as_deref(),
            fields.procedure_class.as_deref(),
            block,
        )
    });
    let kind = classify_hearing_kind(fields.kind_cue.unwrap_or_default(), jurisdiction);
    let situation = fields
        .situation
        .clone()
        .unwrap_or_else(|| DEFAULT_SITUATION.to_string());
    let status = classify_status(&situation);

    ClassifiedFields {
        jurisdiction,
        kind,
        status,
        situation,
    }
}
