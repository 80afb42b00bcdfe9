//! Output shape tests — the JSON printed by `pauta parse` is what the
//! persistence side consumes, so field names and value formats are fixed.

use pauta_core::JurisdictionChoice;
use pauta_parse::{parse, ExistingRecord};

const EXPORT: &str = "15/01/2025 09:00 8012906-74.2025.8.05.0039
Ação Penal - Procedimento Ordinário
Ministério Público do Estado da Bahia X
JOAO PEREIRA LIMA - CPF: 111.222.333-44 (RÉU)
1ª VARA CRIMINAL DE CAMAÇARI
Audiência de Custódia
Designada
";

/// Every event field the persistence side reads.
#[test]
fn test_event_fields() {
    let outcome = parse::<ExistingRecord>(EXPORT, JurisdictionChoice::Auto, &[]);
    let json = serde_json::to_value(&outcome).unwrap();
    let event = &json["newEvents"][0];

    for field in [
        "title",
        "hearingKind",
        "hearingKindDescription",
        "date",
        "startTime",
        "endTime",
        "venue",
        "caseNumber",
        "primaryPartyName",
        "parties",
        "jurisdiction",
        "status",
        "description",
        "procedureClass",
        "hearingSituation",
        "issuingAuthority",
        "reviewFields",
    ] {
        assert!(!event[field].is_null(), "missing field {}", field);
    }

    assert_eq!(event["hearingKind"], "Custódia");
    assert_eq!(event["startTime"], "09:00");
    assert_eq!(event["endTime"], "09:30");
    assert_eq!(event["jurisdiction"], "criminal");
    assert_eq!(event["issuingAuthority"], "1ª VARA CRIMINAL DE CAMAÇARI");
    assert_eq!(
        event["title"],
        "Custódia - Joao Pereira Lima - 8012906-74.2025.8.05.0039"
    );
}

/// A printed outcome can be fed back through `--existing`.
#[test]
fn test_output_is_accepted_as_existing() {
    let first = parse::<ExistingRecord>(EXPORT, JurisdictionChoice::Auto, &[]);
    let printed = serde_json::to_string_pretty(&first).unwrap();
    let existing = ExistingRecord::list_from_json(&printed).unwrap();

    let second = parse(EXPORT, JurisdictionChoice::Auto, &existing);
    assert_eq!(second.new_events.len(), 0);
    assert_eq!(second.duplicate_events.len(), 1);
}

/// The collaborator's own record shape, with extra fields.
#[test]
fn test_collaborator_records() {
    let records = serde_json::json!([
        {
            "id": 41,
            "caseNumber": "8012906-74.2025.8.05.0039",
            "date": "2025-01-15",
            "startTime": "09:00:00",
            "title": "Custódia - Joao Pereira Lima",
            "assigned": null,
        },
        { "id": 42, "caseNumber": "0000000-00.0000.0.00.0000" },
    ]);
    let existing = ExistingRecord::list_from_json(&records.to_string()).unwrap();
    assert_eq!(existing.len(), 2);

    let outcome = parse(EXPORT, JurisdictionChoice::Auto, &existing);
    assert_eq!(outcome.duplicate_events.len(), 1);
}
