//! Builds the final event record from a block's extracted and classified fields.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::classify::ClassifiedFields;
use crate::extract::procedure::DEFAULT_PROCEDURE_CLASS;
use crate::extract::ExtractedFields;
use crate::segment::RawBlock;
use crate::title_case::to_title_case;
use crate::types::{HearingKind, ParsedHearingEvent, ReviewField};

pub const NO_PARTY_TITLE: &str = "Sem assistido";
pub const NOT_INFORMED: &str = "Não informado";
pub const NOT_IDENTIFIED: &str = "Não identificado";

/// Start plus the kind's duration, wrapped at midnight. The date is not rolled over.
pub fn end_time(start: NaiveTime, kind: &HearingKind) -> NaiveTime {
    let (end, _wrapped_days) = start.overflowing_add_signed(Duration::minutes(kind.duration_minutes()));
    end
}

pub fn compose_title(kind: &HearingKind, primary_party: Option<&str>, case_number: &str) -> String {
    format!(
        "{} - {} - {}",
        kind.abbreviation(),
        primary_party.unwrap_or(NO_PARTY_TITLE),
        case_number
    )
}

/// Fixed-order description block.
#[allow(clippy::too_many_arguments)]
pub fn compose_description(
    authority: Option<&str>,
    kind: &HearingKind,
    case_number: &str,
    procedure_class: &str,
    party_names: &str,
    date: NaiveDate,
    time: NaiveTime,
    situation: &str,
) -> String {
    let authority = authority
        .map(to_title_case)
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| NOT_INFORMED.to_string());
    let party_names = if party_names.is_empty() {
        NOT_IDENTIFIED
    } else {
        party_names
    };

    [
        "INFORMAÇÕES DA AUDIÊNCIA".to_string(),
        format!("Órgão Julgador: {}", authority),
        format!("Tipo de Audiência: {}", kind.description()),
        format!("Processo: {}", case_number),
        format!("Classe Processual: {}", procedure_class),
        format!("Parte(s) Assistida(s): {}", party_names),
        format!("Data e Horário: {} {}", date.format("%d/%m/%y"), time.format("%H:%M")),
        format!("Status: {}", situation),
    ]
    .join("\n\n")
}

/// Assemble the event, recording every field that fell back to a placeholder.
pub fn compose(
    block: &RawBlock<'_>,
    fields: ExtractedFields,
    classified: ClassifiedFields,
    venue: &str,
) -> ParsedHearingEvent {
    let anchor = &block.anchor;
    let case_number = anchor.case_number.as_str();
    let kind_needs_review = classified.kind.needs_review();
    let kind = classified.kind.kind;

    let mut review_fields = Vec::new();
    if fields.issuing_authority.is_none() {
        review_fields.push(ReviewField::IssuingAuthority);
    }
    if fields.procedure_class.is_none() {
        review_fields.push(ReviewField::ProcedureClass);
    }
    if fields.parties.is_empty() {
        review_fields.push(ReviewField::Parties);
    }
    if kind_needs_review {
        review_fields.push(ReviewField::HearingKind);
    }

    let procedure_class = fields
        .procedure_class
        .clone()
        .unwrap_or_else(|| DEFAULT_PROCEDURE_CLASS.to_string());
    let party_names = fields
        .parties
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let primary_party_name = fields.primary_party().map(str::to_string);

    let title = compose_title(&kind, primary_party_name.as_deref(), case_number);
    let description = compose_description(
        fields.issuing_authority.as_deref(),
        &kind,
        case_number,
        &procedure_class,
        &party_names,
        anchor.date,
        anchor.time,
        &classified.situation,
    );

    ParsedHearingEvent {
        title,
        hearing_kind_description: kind.description().to_string(),
        end_time: end_time(anchor.time, &kind),
        hearing_kind: kind,
        date: anchor.date,
        start_time: anchor.time,
        venue: venue.to_string(),
        case_number: anchor.case_number.clone(),
        primary_party_name,
        parties: fields.parties,
        jurisdiction: classified.jurisdiction,
        status: classified.status,
        description,
        procedure_class,
        hearing_situation: classified.situation,
        issuing_authority: fields
            .issuing_authority
            .unwrap_or_else(|| NOT_INFORMED.to_string()),
        review_fields,
    }
}
