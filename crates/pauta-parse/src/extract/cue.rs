//! Hearing-type cue detection.
//!
//! Detectors run in fixed precedence against the whole block; the first hit
//! yields a cue phrase. The cue is not the final kind: the classifier maps
//! it per jurisdiction.

use once_cell::sync::Lazy;
use regex::Regex;

pub const CUE_JURY_SESSION: &str = "Sessão de Julgamento do Tribunal do Júri";
pub const CUE_NON_PROSECUTION: &str = "ANPP";
pub const CUE_EARLY_EVIDENCE: &str = "Produção Antecipada de Provas";
pub const CUE_ADMONITORY: &str = "Admonitória";
pub const CUE_SPECIAL_TESTIMONY: &str = "Oitiva especial";
pub const CUE_RETRACTION: &str = "Retratação";
pub const CUE_JUSTIFICATION: &str = "Justificação";
pub const CUE_CUSTODY: &str = "Custódia";
pub const CUE_INSTRUCTION: &str = "Instrução e Julgamento";
pub const CUE_CONCILIATION: &str = "Conciliação";

static DETECTORS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (
            r"(?i)sess[ãa]o\s+de\s+julgamento|plen[áa]ri[oa]|tribunal\s+do\s+j[uú]ri.*julgamento",
            CUE_JURY_SESSION,
        ),
        (
            r"(?i)\bANPP\b|n[ãa]o[\s-]*persecu[çc][ãa]o|acordo.*penal",
            CUE_NON_PROSECUTION,
        ),
        (
            r"(?i)produ[çc][ãa]o\s+antecipada|\bPAP\b|antecipada\s+de\s+provas|coleta.*provas",
            CUE_EARLY_EVIDENCE,
        ),
        (r"(?i)admonit[óo]ria", CUE_ADMONITORY),
        (r"(?i)oitiva\s*especial|depoimento\s+especial", CUE_SPECIAL_TESTIMONY),
        (r"(?i)retrata[çc][ãa]o", CUE_RETRACTION),
        (r"(?i)justifica[çc][ãa]o", CUE_JUSTIFICATION),
        (r"(?i)cust[óo]dia", CUE_CUSTODY),
        (
            r"(?i)audi[êe]ncia\s+de\s+instru[çc][ãa]o|instru[çc][ãa]o|\bAIJ\b",
            CUE_INSTRUCTION,
        ),
        (r"(?i)concilia[çc][ãa]o", CUE_CONCILIATION),
    ]
    .into_iter()
    .map(|(pattern, cue)| (Regex::new(pattern).unwrap(), cue))
    .collect()
});

/// First matching cue in precedence order, if any.
pub fn detect_kind_cue(block: &str) -> Option<&'static str> {
    DETECTORS
        .iter()
        .find(|(re, _)| re.is_match(block))
        .map(|(_, cue)| *cue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plenary_beats_instruction() {
        let block = "Audiência de Instrução e Julgamento\nSessão de Julgamento - Plenário";
        assert_eq!(detect_kind_cue(block), Some(CUE_JURY_SESSION));
    }

    #[test]
    fn test_special_testimony_before_justification() {
        let block = "Depoimento Especial / Justificação";
        assert_eq!(detect_kind_cue(block), Some(CUE_SPECIAL_TESTIMONY));
    }

    #[test]
    fn test_word_boundaries() {
        assert_eq!(detect_kind_cue("juntada de papel"), None);
        assert_eq!(detect_kind_cue("Audiência PAP"), Some(CUE_EARLY_EVIDENCE));
        assert_eq!(detect_kind_cue("AIJ designada"), Some(CUE_INSTRUCTION));
    }

    #[test]
    fn test_custody_unaccented() {
        assert_eq!(detect_kind_cue("AUDIENCIA DE CUSTODIA"), Some(CUE_CUSTODY));
    }

    #[test]
    fn test_no_cue() {
        assert_eq!(detect_kind_cue("VARA DO JÚRI designada"), None);
    }
}
