//! Jurisdiction classifier: ordered predicate table, first hit wins.

use once_cell::sync::Lazy;
use pauta_core::Jurisdiction;
use regex::Regex;

/// Upper-cased text the predicates look at.
pub struct JurisdictionSignals {
    /// Authority, procedure class and block, joined.
    pub text: String,
    /// Procedure class alone.
    pub class: String,
}

impl JurisdictionSignals {
    pub fn new(authority: Option<&str>, class: Option<&str>, block: &str) -> Self {
        let authority = authority.unwrap_or_default();
        let class = class.unwrap_or_default();
        Self {
            text: format!("{} {} {}", authority, class, block).to_uppercase(),
            class: class.to_uppercase(),
        }
    }

    fn mentions(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.text.contains(n))
    }
}

pub struct JurisdictionRule {
    pub applies: fn(&JurisdictionSignals) -> bool,
    pub jurisdiction: Jurisdiction,
}

/// Precedence: domestic violence, jury (class before venue), enforcement, guardianship.
pub const JURISDICTION_RULES: &[JurisdictionRule] = &[
    JurisdictionRule {
        applies: domestic_violence,
        jurisdiction: Jurisdiction::DomesticViolence,
    },
    JurisdictionRule {
        applies: jury_competence_class,
        jurisdiction: Jurisdiction::Jury,
    },
    JurisdictionRule {
        applies: jury_venue,
        jurisdiction: Jurisdiction::Jury,
    },
    JurisdictionRule {
        applies: penal_enforcement,
        jurisdiction: Jurisdiction::PenalEnforcement,
    },
    JurisdictionRule {
        applies: guardianship,
        jurisdiction: Jurisdiction::Guardianship,
    },
];

static JURY_VENUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"VARA\s+D[OAE]\s+J[UÚ]RI|COMPET[EÊ]NCIA\s+D[OAE]\s+J[UÚ]RI").unwrap());

static JURY_AND_ENFORCEMENT_VENUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"VARA\s+D[OAE]\s+J[UÚ]RI\s+E\s+EXECU[CÇ]").unwrap());

static DOMESTIC_VIOLENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"VIOL[EÊ]NCIA\s+DOM|CONTRA\s+A\s+MULHER").unwrap());

fn domestic_violence(s: &JurisdictionSignals) -> bool {
    DOMESTIC_VIOLENCE_RE.is_match(&s.text)
        || s.mentions(&["MARIA DA PENHA", "MEDIDAS PROTETIVAS", "VARA DE VIOLÊNCIA", "VARA DE VIOLENCIA"])
}

fn jury_competence_class(s: &JurisdictionSignals) -> bool {
    s.class.contains("COMPET") && (s.class.contains("JÚRI") || s.class.contains("JURI"))
}

fn jury_venue(s: &JurisdictionSignals) -> bool {
    s.mentions(&["TRIBUNAL DO JÚRI", "TRIBUNAL DO JURI", "PLENÁRIO", "PLENARIO"])
        || JURY_VENUE_RE.is_match(&s.text)
}

/// Explicit enforcement wording, unless it only comes from a "Júri e Execuções" venue name.
fn penal_enforcement(s: &JurisdictionSignals) -> bool {
    !JURY_AND_ENFORCEMENT_VENUE_RE.is_match(&s.text)
        && s.mentions(&["EXECUÇÃO PENAL", "EXECUCAO PENAL", "EXECUÇÕES", "EXECUCOES"])
}

fn guardianship(s: &JurisdictionSignals) -> bool {
    s.mentions(&["CURADORIA"])
}

/// Classify from authority, procedure class and the full block.
pub fn classify_jurisdiction(authority: Option<&str>, class: Option<&str>, block: &str) -> Jurisdiction {
    let signals = JurisdictionSignals::new(authority, class, block);
    JURISDICTION_RULES
        .iter()
        .find(|rule| (rule.applies)(&signals))
        .map(|rule| rule.jurisdiction)
        .unwrap_or(Jurisdiction::Criminal)
}
