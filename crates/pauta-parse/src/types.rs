//! Records produced by the hearing-schedule parser.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use pauta_core::{CaseNumber, HearingStatus, Jurisdiction};
use serde::{Serialize, Serializer};

/// Role tag a party was listed with, e.g. `(REU)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyRole {
    Defendant,
    Investigated,
    Respondent,
    Flagrant,
    AppealRespondent,
    Appellee,
    Authority,
}

impl PartyRole {
    /// Parse the tag found between parentheses. Case-insensitive, accents optional.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_uppercase().as_str() {
            "REU" | "RÉU" => Some(Self::Defendant),
            "INVESTIGADO" => Some(Self::Investigated),
            "REQUERIDO" => Some(Self::Respondent),
            "FLAGRANTEADO" => Some(Self::Flagrant),
            "RECORRIDO" => Some(Self::AppealRespondent),
            "APELADO" => Some(Self::Appellee),
            "AUTORIDADE" => Some(Self::Authority),
            _ => None,
        }
    }
}

/// A defendant-side party assisted by the office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyRecord {
    pub name: String,
    /// CPF, when the export lists one.
    pub national_id: Option<String>,
    pub role: PartyRole,
}

/// Canonical hearing kinds. `Other` keeps an unrecognised cue verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HearingKind {
    JurySession,
    InstructionAndJudgment,
    Custody,
    Justification,
    EarlyEvidence,
    NonProsecutionAgreement,
    Admonitory,
    Retraction,
    SpecialTestimony,
    Conciliation,
    Other(String),
}

impl HearingKind {
    pub fn abbreviation(&self) -> &str {
        match self {
            Self::JurySession => "Júri",
            Self::InstructionAndJudgment => "AIJ",
            Self::Custody => "Custódia",
            Self::Justification => "Justificação",
            Self::EarlyEvidence => "PAP",
            Self::NonProsecutionAgreement => "ANPP",
            Self::Admonitory => "Admonitória",
            Self::Retraction => "Retratação",
            Self::SpecialTestimony => "Oitiva especial",
            Self::Conciliation => "Conciliação",
            Self::Other(text) => text,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::JurySession => "Sessão de Julgamento do Tribunal do Júri",
            Self::InstructionAndJudgment => "Audiência de Instrução e Julgamento",
            Self::Custody => "Audiência de Custódia",
            Self::Justification => "Audiência de Justificação",
            Self::EarlyEvidence => "Produção Antecipada de Provas",
            Self::NonProsecutionAgreement => "Acordo de Não Persecução Penal",
            Self::Admonitory => "Audiência Admonitória",
            Self::Retraction => "Audiência de Retratação",
            Self::SpecialTestimony => "Oitiva Especial",
            Self::Conciliation => "Audiência de Conciliação",
            Self::Other(text) => text,
        }
    }

    /// Scheduled length in minutes.
    pub fn duration_minutes(&self) -> i64 {
        match self {
            Self::JurySession => 480,
            Self::InstructionAndJudgment => 90,
            Self::Other(text) if text.contains("Júri") => 480,
            _ => 30,
        }
    }
}

impl fmt::Display for HearingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl Serialize for HearingKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.abbreviation())
    }
}

/// Fields that fell back to a placeholder or default and need a human look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewField {
    IssuingAuthority,
    ProcedureClass,
    Parties,
    HearingKind,
}

/// One hearing, ready to hand to the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedHearingEvent {
    pub title: String,
    pub hearing_kind: HearingKind,
    pub hearing_kind_description: String,
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_hhmm")]
    pub start_time: NaiveTime,
    #[serde(serialize_with = "serialize_hhmm")]
    pub end_time: NaiveTime,
    pub venue: String,
    pub case_number: CaseNumber,
    pub primary_party_name: Option<String>,
    pub parties: Vec<PartyRecord>,
    pub jurisdiction: Jurisdiction,
    pub status: HearingStatus,
    pub description: String,
    pub procedure_class: String,
    pub hearing_situation: String,
    pub issuing_authority: String,
    pub review_fields: Vec<ReviewField>,
}

fn serialize_hhmm<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format("%H:%M"))
}

/// Which segmentation strategy produced the blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentStrategy {
    Anchored,
    Fallback,
    None,
}

/// Messages for the caller, distinct from degraded-but-successful fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Neither strategy found a hearing.
    NoHearingsRecognized,
    /// A date/time/case-number match whose date or time does not exist.
    MalformedStamp { offset: usize, raw: String },
    /// Unexpected internal fault; no events were emitted.
    Failure { message: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHearingsRecognized => f.write_str(
                "no hearings recognized: confirm this is a hearing-schedule export, not a notice export",
            ),
            Self::MalformedStamp { offset, raw } => {
                write!(f, "skipped impossible date/time at offset {}: {}", offset, raw)
            }
            Self::Failure { message } => write!(f, "failed to process the export: {}", message),
        }
    }
}

/// Result of one parse invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    pub new_events: Vec<ParsedHearingEvent>,
    pub duplicate_events: Vec<ParsedHearingEvent>,
    pub detected_jurisdiction: Option<Jurisdiction>,
    pub detected_authority: Option<String>,
    pub strategy: SegmentStrategy,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    pub(crate) fn empty(strategy: SegmentStrategy, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            new_events: Vec::new(),
            duplicate_events: Vec::new(),
            detected_jurisdiction: None,
            detected_authority: None,
            strategy,
            diagnostics,
        }
    }

    pub(crate) fn failure(message: impl Into<String>) -> Self {
        Self::empty(
            SegmentStrategy::None,
            vec![Diagnostic::Failure {
                message: message.into(),
            }],
        )
    }

    /// New plus already-registered events.
    pub fn total_found(&self) -> usize {
        self.new_events.len() + self.duplicate_events.len()
    }

    pub fn failed(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::Failure { .. }))
    }

    /// Fields across all recognised events that degraded to a placeholder.
    pub fn review_field_count(&self) -> usize {
        self.new_events
            .iter()
            .chain(&self.duplicate_events)
            .map(|e| e.review_fields.len())
            .sum()
    }

    pub fn all_events(&self) -> impl Iterator<Item = &ParsedHearingEvent> {
        self.new_events.iter().chain(&self.duplicate_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_role_tags() {
        assert_eq!(PartyRole::from_tag("REU"), Some(PartyRole::Defendant));
        assert_eq!(PartyRole::from_tag("réu"), Some(PartyRole::Defendant));
        assert_eq!(PartyRole::from_tag("Flagranteado"), Some(PartyRole::Flagrant));
        assert_eq!(PartyRole::from_tag("AUTOR"), None);
    }

    #[test]
    fn test_kind_durations() {
        assert_eq!(HearingKind::InstructionAndJudgment.duration_minutes(), 90);
        assert_eq!(HearingKind::JurySession.duration_minutes(), 480);
        assert_eq!(HearingKind::Custody.duration_minutes(), 30);
        assert_eq!(HearingKind::Other("Júri simulado".into()).duration_minutes(), 480);
        assert_eq!(HearingKind::Other("Leitura".into()).duration_minutes(), 30);
    }

    #[test]
    fn test_kind_serializes_as_abbreviation() {
        let json = serde_json::to_value(HearingKind::NonProsecutionAgreement).unwrap();
        assert_eq!(json, serde_json::json!("ANPP"));
    }

    #[test]
    fn test_diagnostic_shape() {
        let json = serde_json::to_value(Diagnostic::NoHearingsRecognized).unwrap();
        assert_eq!(json["kind"], "no_hearings_recognized");
        assert!(Diagnostic::NoHearingsRecognized
            .to_string()
            .contains("hearing-schedule export"));
    }
}
