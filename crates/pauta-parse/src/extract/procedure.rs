//! Procedural class ("classe judicial") extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::title_case::to_title_case;

/// Known classes, most specific first. Leftmost match wins.
static PROCEDURE_CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)A[ÇC][ÃA]O\s+PENAL\s*-?\s*PROCEDIMENTO\s+(?:ORDIN[ÁA]RIO|SUM[ÁA]RIO|SUMAR[ÍI]SSIMO)",
        r"|A[ÇC][ÃA]O\s+PENAL\s+DE\s+COMPET[ÊE]NC?IA\s+D[OAE]\s+J[ÚU]RI",
        r"|A[ÇC][ÃA]O\s+PENAL",
        r"|MEDIDAS\s+PROTETIVAS\s+DE\s+URG[ÊE]NCIA",
        r"|MEDIDAS\s+PROTETIVAS",
        r"|INQU[ÉE]RITO\s+POLICIAL",
        r"|AUTO\s+DE\s+PRIS[ÃA]O\s+EM\s+FLAGRANTE",
        r"|EXECU[ÇC][ÃA]O\s+(?:DA\s+)?PENA(?:L)?",
    ))
    .unwrap()
});

/// Procedural class used when none of the known phrases appears.
pub const DEFAULT_PROCEDURE_CLASS: &str = "Ação Penal";

/// Find the procedural class in a block, title-cased.
pub fn extract_procedure_class(block: &str) -> Option<String> {
    PROCEDURE_CLASS_RE
        .find(block)
        .map(|m| to_title_case(m.as_str()))
}
