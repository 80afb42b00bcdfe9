//! Defendant-side party extraction.
//!
//! The export lists the plaintiff side, a lone `X`, then the defendant side.
//! Only the defendant side is scanned. Each party looks like
//! `NAME [- CPF: 000.000.000-00] (ROLE)`.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::title_case::to_title_case;
use crate::types::{PartyRecord, PartyRole};

static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\n]X[ \t]*\n").unwrap());

static PARTY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)([A-ZÁÀÂÃÉÈÊÍÏÓÔÕÖÚÇÑ][A-ZÁÀÂÃÉÈÊÍÏÓÔÕÖÚÇÑa-záàâãéèêíïóôõöúçñ' \t]+?)",
        r"(?:\s*-\s*CPF:\s*([0-9.\-]+))?",
        r"\s*\((R[ÉE]U|INVESTIGADO|REQUERIDO|FLAGRANTEADO|RECORRIDO|APELADO|AUTORIDADE)\)",
    ))
    .unwrap()
});

/// "registrado(a) civilmente como <civil name>": keep the name before it.
static CIVIL_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[ \t]*registrad[oa](?:\(a\))?\s+civilmente\s+como\s+[^()\n\-]*").unwrap()
});

static LEADING_X_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^X\s+").unwrap());

static POLICE_UNIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bDT\b|^[0-9]{1,2}ª?\s*DT").unwrap());

/// Institutions listed on the defendant side, never assisted parties.
static INSTITUTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:minist[ée]rio|vara|deam|pol[íi]cia|delegacia|segredo\s+de\s+justi[çc]a|defensoria|ju[íi]zo)\b",
    )
    .unwrap()
});

/// Extract unique defendant-side parties, in order of appearance.
pub fn extract_parties(block: &str) -> Vec<PartyRecord> {
    let defendant_side = defendant_side(block);
    let cleaned = CIVIL_NAME_RE.replace_all(defendant_side, " ");

    let mut parties: Vec<PartyRecord> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    for caps in PARTY_RE.captures_iter(&cleaned) {
        let raw_name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let name = LEADING_X_RE
            .replace(raw_name.trim(), "")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if name.chars().count() <= 2 || is_institution(&name) {
            continue;
        }

        let Some(role) = caps.get(3).and_then(|m| PartyRole::from_tag(m.as_str())) else {
            continue;
        };
        let national_id = caps
            .get(2)
            .map(|m| m.as_str().trim_matches(|c| c == '.' || c == '-').to_string())
            .filter(|id| !id.is_empty());

        let name = to_title_case(&name);
        let duplicate = seen_names.contains(&name)
            || national_id.as_ref().is_some_and(|id| seen_ids.contains(id));
        if duplicate {
            continue;
        }

        if let Some(id) = &national_id {
            seen_ids.insert(id.clone());
        }
        seen_names.insert(name.clone());
        parties.push(PartyRecord {
            name,
            national_id,
            role,
        });
    }

    parties
}

/// Text after the `X` separator, or the whole block when there is none.
fn defendant_side(block: &str) -> &str {
    match SEPARATOR_RE.find(block) {
        Some(m) => &block[m.start()..],
        None => block,
    }
}

fn is_institution(name: &str) -> bool {
    INSTITUTION_RE.is_match(name) || POLICE_UNIT_RE.is_match(name)
}
