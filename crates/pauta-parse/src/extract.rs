//! Per-block field extraction.
//!
//! Each extractor looks at one block of text and either finds its field or
//! reports it missing; nothing here decides placeholders or categories.

pub mod authority;
pub mod cue;
pub mod parties;
pub mod procedure;
pub mod situation;

use crate::types::PartyRecord;

/// Raw fields pulled out of one block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    /// Issuing court, whitespace-collapsed.
    pub issuing_authority: Option<String>,
    /// Procedural class, title-cased.
    pub procedure_class: Option<String>,
    /// Defendant-side parties, unique, in order of appearance.
    pub parties: Vec<PartyRecord>,
    /// Hearing-type cue for the kind classifier.
    pub kind_cue: Option<&'static str>,
    /// Raw situation word, e.g. `redesignada`.
    pub situation: Option<String>,
}

impl ExtractedFields {
    /// Name of the first surviving party.
    pub fn primary_party(&self) -> Option<&str> {
        self.parties.first().map(|p| p.name.as_str())
    }
}

/// Run every extractor on a block.
pub fn extract_fields(block: &str) -> ExtractedFields {
    ExtractedFields {
        issuing_authority: authority::extract_authority(block),
        procedure_class: procedure::extract_procedure_class(block),
        parties: parties::extract_parties(block),
        kind_cue: cue::detect_kind_cue(block),
        situation: situation::extract_situation(block),
    }
}
