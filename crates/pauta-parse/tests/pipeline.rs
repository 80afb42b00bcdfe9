//! End-to-end tests over realistic schedule exports.

use chrono::{NaiveDate, NaiveTime};
use pauta_core::case_number::CASE_NUMBER_PATTERN;
use pauta_core::{HearingStatus, Jurisdiction, JurisdictionChoice};
use pauta_parse::{
    parse, Diagnostic, ExistingRecord, HearingKind, ParseOutcome, ParsedHearingEvent, SegmentStrategy,
};
use regex::Regex;

const NONE: &[ExistingRecord] = &[];

/// Three hearings, the first with its case number wrapped across lines.
const SCHEDULE: &str = "Pauta de audiências
Data/Hora Processo Classe Partes Órgão julgador Tipo Situação
15/01/2025 09:00 8012906-
74.2025.8.05.0039
Ação Penal - Procedimento Ordinário
Ministério Público do Estado da Bahia X
JOAO PEREIRA LIMA - CPF: 111.222.333-44 (RÉU)
VARA DO JÚRI E EXECUÇÕES PENAIS DE CAMAÇARI
Sessão de Julgamento do Tribunal do Júri
Designada
15/01/2025 14:00 8001234-56.2024.8.05.0039
Medidas Protetivas de Urgência
MARIA APARECIDA SOUZA (REQUERIDO)
VARA DE VIOLÊNCIA DOMÉSTICA FAM CONTRA A MULHER DE CAMAÇARI
Audiência de Justificação
Redesignada
16/01/2025 08:30 0500123-11.2023.8.05.0039
Execução Penal
Ministério Público do Estado da Bahia X
ANTONIO CARLOS REIS (REU)
VARA DE EXECUÇÕES PENAIS DE CAMAÇARI
Audiência Admonitória
Cancelada
";

fn auto(text: &str) -> ParseOutcome {
    parse(text, JurisdictionChoice::Auto, NONE)
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_jury_scenario() {
    let text = "15/01/25 09:00 8012906-74.2025.8.05.0039 … RÉU (REU) … VARA DO JÚRI …";
    let outcome = auto(text);

    assert_eq!(outcome.strategy, SegmentStrategy::Anchored);
    assert_eq!(outcome.new_events.len(), 1);
    let event = &outcome.new_events[0];
    assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    assert_eq!(event.start_time, hm(9, 0));
    assert_eq!(event.end_time, hm(10, 30));
    assert_eq!(event.jurisdiction, Jurisdiction::Jury);
    assert_eq!(event.hearing_kind, HearingKind::InstructionAndJudgment);
    assert_eq!(event.hearing_kind.abbreviation(), "AIJ");
    assert_eq!(event.case_number.as_str(), "8012906-74.2025.8.05.0039");
}

#[test]
fn test_full_schedule() {
    let outcome = auto(SCHEDULE);
    assert_eq!(outcome.strategy, SegmentStrategy::Anchored);
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.new_events.len(), 3);
    assert_eq!(outcome.detected_jurisdiction, Some(Jurisdiction::Jury));
    assert_eq!(
        outcome.detected_authority.as_deref(),
        Some("VARA DO JÚRI E EXECUÇÕES PENAIS DE CAMAÇARI")
    );

    let jury = &outcome.new_events[0];
    assert_eq!(jury.case_number.as_str(), "8012906-74.2025.8.05.0039");
    assert_eq!(jury.jurisdiction, Jurisdiction::Jury);
    assert_eq!(jury.hearing_kind, HearingKind::JurySession);
    assert_eq!(jury.end_time, hm(17, 0));
    assert_eq!(jury.title, "Júri - Joao Pereira Lima - 8012906-74.2025.8.05.0039");
    assert_eq!(jury.parties.len(), 1);
    assert_eq!(jury.parties[0].national_id.as_deref(), Some("111.222.333-44"));
    assert_eq!(jury.procedure_class, "Ação Penal - Procedimento Ordinário");
    assert_eq!(jury.status, HearingStatus::Confirmed);
    assert!(jury.review_fields.is_empty());

    let dv = &outcome.new_events[1];
    assert_eq!(dv.jurisdiction, Jurisdiction::DomesticViolence);
    assert_eq!(dv.hearing_kind, HearingKind::Justification);
    assert_eq!(dv.primary_party_name.as_deref(), Some("Maria Aparecida Souza"));
    assert_eq!(dv.status, HearingStatus::Rescheduled);
    assert_eq!(dv.hearing_situation, "redesignada");
    assert_eq!(dv.end_time, hm(14, 30));

    let enforcement = &outcome.new_events[2];
    assert_eq!(enforcement.jurisdiction, Jurisdiction::PenalEnforcement);
    assert_eq!(enforcement.hearing_kind, HearingKind::Admonitory);
    assert_eq!(enforcement.status, HearingStatus::Canceled);
    assert_eq!(enforcement.date, NaiveDate::from_ymd_opt(2025, 1, 16).unwrap());
}

#[test]
fn test_dedup_idempotence() {
    let text = "15/01/25 09:00 8012906-74.2025.8.05.0039 … RÉU (REU) … VARA DO JÚRI …";
    let first = auto(text);
    assert_eq!(first.new_events.len(), 1);

    let second = parse(text, JurisdictionChoice::Auto, &first.new_events);
    assert!(second.new_events.is_empty());
    assert_eq!(second.duplicate_events.len(), 1);
    assert_eq!(second.duplicate_events, first.new_events);
}

#[test]
fn test_dedup_against_serialized_output() {
    let first = auto(SCHEDULE);
    let json = serde_json::to_string(&first).unwrap();
    let existing = ExistingRecord::list_from_json(&json).unwrap();
    assert_eq!(existing.len(), 3);

    let second = parse(SCHEDULE, JurisdictionChoice::Auto, &existing);
    assert!(second.new_events.is_empty());
    assert_eq!(second.duplicate_events.len(), 3);
}

#[test]
fn test_partial_dedup_keeps_order() {
    let existing = vec![ExistingRecord::new(
        "8001234-56.2024.8.05.0039",
        "2025-01-15",
        "14:00:00",
    )];
    let outcome = parse(SCHEDULE, JurisdictionChoice::Auto, &existing);
    let new: Vec<&str> = outcome.new_events.iter().map(|e| e.case_number.as_str()).collect();
    assert_eq!(new, vec!["8012906-74.2025.8.05.0039", "0500123-11.2023.8.05.0039"]);
    assert_eq!(outcome.duplicate_events.len(), 1);
}

#[test]
fn test_fallback_activation() {
    let text = "Audiência designada para 20/02/2025 10:30, sala 2, processo 8000123-45.2024.8.05.0039\n\
                Réu: PEDRO ALVES (REU)\n\
                1ª VARA CRIMINAL DE CAMAÇARI";
    let outcome = auto(text);

    assert_eq!(outcome.strategy, SegmentStrategy::Fallback);
    assert_eq!(outcome.new_events.len(), 1);
    let event = &outcome.new_events[0];
    assert_eq!(event.case_number.as_str(), "8000123-45.2024.8.05.0039");
    assert_eq!(event.start_time, hm(10, 30));
    assert_eq!(event.jurisdiction, Jurisdiction::Criminal);
    assert_eq!(event.primary_party_name.as_deref(), Some("Pedro Alves"));
}

#[test]
fn test_fallback_suppresses_repeated_pairings() {
    let line = "Em 20/02/2025 10:30, processo 8000123-45.2024.8.05.0039\n";
    let outcome = auto(&line.repeat(3));
    assert_eq!(outcome.strategy, SegmentStrategy::Fallback);
    assert_eq!(outcome.new_events.len(), 1);
}

#[test]
fn test_fallback_rejects_distant_case_number() {
    let text = format!(
        "Em 20/02/2025 10:30 {} 8000123-45.2024.8.05.0039",
        "texto ".repeat(30)
    );
    let outcome = auto(&text);
    assert_eq!(outcome.strategy, SegmentStrategy::None);
    assert_eq!(outcome.diagnostics, vec![Diagnostic::NoHearingsRecognized]);
}

#[test]
fn test_domestic_violence_precedence() {
    let text = "10/02/2025 09:00 8001234-56.2024.8.05.0039\n\
                Ação Penal - Procedimento Ordinário\n\
                VARA DE VIOLÊNCIA DOMÉSTICA FAM CONTRA A MULHER DE CAMAÇARI\n";
    let outcome = auto(text);
    assert_eq!(outcome.new_events[0].jurisdiction, Jurisdiction::DomesticViolence);
}

#[test]
fn test_plenary_beats_instruction_under_jury() {
    let text = "10/02/2025 08:00 8012906-74.2025.8.05.0039\n\
                Ação Penal de Competência do Júri\n\
                VARA DO JÚRI DE CAMAÇARI\n\
                Plenário - Instrução em plenário\n";
    let outcome = auto(text);
    let event = &outcome.new_events[0];
    assert_eq!(event.jurisdiction, Jurisdiction::Jury);
    assert_eq!(event.hearing_kind, HearingKind::JurySession);
    assert_eq!(event.end_time, hm(16, 0));
}

#[test]
fn test_end_time_wraps_without_rolling_the_date() {
    let text = "10/03/2025 23:50 8012906-74.2025.8.05.0039 Instrução e Julgamento";
    let outcome = auto(text);
    let event = &outcome.new_events[0];
    assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    assert_eq!(event.end_time, hm(1, 20));

    let json = serde_json::to_value(event).unwrap();
    assert_eq!(json["endTime"], "01:20");
    assert_eq!(json["date"], "2025-03-10");
}

#[test]
fn test_determinism() {
    assert_eq!(auto(SCHEDULE), auto(SCHEDULE));
}

#[test]
fn test_date_and_case_number_formats() {
    let date_re = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
    let case_re = Regex::new(&format!("^{}$", CASE_NUMBER_PATTERN)).unwrap();
    let time_re = Regex::new(r"^[0-9]{2}:[0-9]{2}$").unwrap();

    let outcome = auto(SCHEDULE);
    for event in outcome.all_events() {
        let json = serde_json::to_value(event).unwrap();
        assert!(date_re.is_match(json["date"].as_str().unwrap()));
        assert!(case_re.is_match(json["caseNumber"].as_str().unwrap()));
        assert!(time_re.is_match(json["startTime"].as_str().unwrap()));
        assert!(time_re.is_match(json["endTime"].as_str().unwrap()));
    }
}

#[test]
fn test_missing_fields_degrade_to_placeholders() {
    let outcome = auto("15/01/2025 09:00 8012906-74.2025.8.05.0039");
    let event: &ParsedHearingEvent = &outcome.new_events[0];
    assert_eq!(event.issuing_authority, "Não informado");
    assert_eq!(event.procedure_class, "Ação Penal");
    assert_eq!(event.title, "AIJ - Sem assistido - 8012906-74.2025.8.05.0039");
    assert_eq!(outcome.review_field_count(), 4);
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn test_outcome_json_shape() {
    let outcome = auto(SCHEDULE);
    let json = serde_json::to_value(&outcome).unwrap();

    assert!(json["newEvents"].is_array());
    assert!(json["duplicateEvents"].is_array());
    assert_eq!(json["detectedJurisdiction"], "jury");
    assert_eq!(json["strategy"], "anchored");

    let first = &json["newEvents"][0];
    assert_eq!(first["hearingKind"], "Júri");
    assert_eq!(first["hearingKindDescription"], "Sessão de Julgamento do Tribunal do Júri");
    assert_eq!(first["venue"], "Fórum Clemente Mariani - Camaçari");
    assert_eq!(first["status"], "confirmed");
    assert_eq!(first["parties"][0]["role"], "defendant");
    assert!(first["parties"][0]["nationalId"].is_string());
    assert!(first["reviewFields"].is_array());

    let empty = serde_json::to_value(auto("nada")).unwrap();
    assert_eq!(
        empty["diagnostics"],
        serde_json::json!([{ "kind": "no_hearings_recognized" }])
    );
}

#[test]
fn test_hyphenated_not_held_is_canceled() {
    let text = "15/01/2025 09:00 8012906-74.2025.8.05.0039\n\
                1ª VARA CRIMINAL DE CAMAÇARI\n\
                Instrução e Julgamento\n\
                Não-Realizada\n";
    let event = &auto(text).new_events[0];
    assert_eq!(event.hearing_situation, "não-realizada");
    assert_eq!(event.status, HearingStatus::Canceled);
}

#[test]
fn test_judgment_session_under_general_criminal() {
    let text = "15/01/2025 09:00 8012906-74.2025.8.05.0039\n\
                1ª VARA CRIMINAL DE CAMAÇARI\n\
                Sessão de Julgamento\n";
    let event = &auto(text).new_events[0];
    assert_eq!(event.jurisdiction, Jurisdiction::Criminal);
    assert_eq!(event.hearing_kind, HearingKind::InstructionAndJudgment);
    assert_eq!(event.end_time, hm(10, 30));
}
