//! Issuing court ("órgão julgador") extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// The long-form domestic-violence court name, matched literally first.
static DOMESTIC_VIOLENCE_COURT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)VARA\s+DE\s+VIOL[ÊE]NCIA\s+DOM[ÉE]STICA\s+FAM(?:ILIAR)?\s+CONTRA\s+A\s+MULHER\s+DE\s+CAMA[ÇC]ARI",
    )
    .unwrap()
});

/// `VARA DO/DA/DE <free text>` up to a trailing marker or the end of the line.
static GENERIC_COURT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)((?:[0-9]{1,2}ª\s+)?VARA\s+(?:D[OAE]S?\s|CRIMINAL\b)[^()\n]*?)(?:\s+(?:Minist[ée]rio|Em\s+segredo|DEAM|Delegacia|Pol[íi]cia|[0-9]{1,2}ª\s*D\.?T)\b|\s*$)",
    )
    .unwrap()
});

/// Find the issuing court in a block.
pub fn extract_authority(block: &str) -> Option<String> {
    let found = DOMESTIC_VIOLENCE_COURT_RE
        .find(block)
        .map(|m| m.as_str())
        .or_else(|| {
            GENERIC_COURT_RE
                .captures(block)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
        })?;

    let collapsed = found.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}
