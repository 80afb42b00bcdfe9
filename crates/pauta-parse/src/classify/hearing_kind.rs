//! Hearing-kind classifier.
//!
//! The raw cue is matched first against the table of the classified
//! jurisdiction, then against the generic table. A cue nothing matches is
//! kept verbatim; an absent cue defaults to instruction-and-judgment.

use once_cell::sync::Lazy;
use pauta_core::Jurisdiction;

use crate::types::HearingKind;

/// Keyword rule over the upper-cased cue.
pub struct KindRule {
    /// Any of these must appear.
    pub any: &'static [&'static str],
    /// None of these may appear.
    pub unless: &'static [&'static str],
    pub kind: HearingKind,
}

impl KindRule {
    fn matches(&self, upper: &str) -> bool {
        self.any.iter().any(|k| upper.contains(k)) && !self.unless.iter().any(|k| upper.contains(k))
    }
}

fn rule(any: &'static [&'static str], kind: HearingKind) -> KindRule {
    KindRule { any, unless: &[], kind }
}

fn rule_unless(any: &'static [&'static str], unless: &'static [&'static str], kind: HearingKind) -> KindRule {
    KindRule { any, unless, kind }
}

const INSTRUCTION: &[&str] = &["INSTRUÇÃO", "INSTRUCAO"];
const INSTRUCTION_OR_JUDGMENT: &[&str] = &["INSTRUÇÃO", "INSTRUCAO", "JULGAMENTO"];
const CUSTODY: &[&str] = &["CUSTÓDIA", "CUSTODIA"];
const JUSTIFICATION: &[&str] = &["JUSTIFICAÇÃO", "JUSTIFICACAO"];
const RETRACTION: &[&str] = &["RETRATAÇÃO", "RETRATACAO"];
const SPECIAL_TESTIMONY: &[&str] = &["OITIVA", "DEPOIMENTO ESPECIAL"];
const NON_PROSECUTION: &[&str] = &[
    "ANPP",
    "NÃO PERSECUÇÃO",
    "NAO PERSECUCAO",
    "NÃO-PERSECUÇÃO",
    "NAO-PERSECUCAO",
    "ACORDO",
];
const EARLY_EVIDENCE: &[&str] = &["PRODUÇÃO ANTECIPADA", "PRODUCAO ANTECIPADA", "ANTECIPADA DE PROVAS", "PAP"];

static JURY_RULES: Lazy<Vec<KindRule>> = Lazy::new(|| {
    vec![
        rule(
            &[
                "SESSÃO",
                "SESSAO",
                "PLENÁRIO",
                "PLENARIO",
                "JULGAMENTO DO JÚRI",
                "JULGAMENTO DO JURI",
                "TRIBUNAL DO JÚRI",
                "TRIBUNAL DO JURI",
            ],
            HearingKind::JurySession,
        ),
        rule(INSTRUCTION, HearingKind::InstructionAndJudgment),
        rule_unless(&["JULGAMENTO"], &["SESSÃO", "SESSAO"], HearingKind::InstructionAndJudgment),
        rule(CUSTODY, HearingKind::Custody),
        rule(
            &["PRODUÇÃO ANTECIPADA", "PRODUCAO ANTECIPADA", "PAP", "ANTECIPADA DE PROVAS", "PRESENCIAL"],
            HearingKind::EarlyEvidence,
        ),
    ]
});

static DOMESTIC_VIOLENCE_RULES: Lazy<Vec<KindRule>> = Lazy::new(|| {
    vec![
        rule(INSTRUCTION_OR_JUDGMENT, HearingKind::InstructionAndJudgment),
        rule(JUSTIFICATION, HearingKind::Justification),
        rule(CUSTODY, HearingKind::Custody),
        rule(SPECIAL_TESTIMONY, HearingKind::SpecialTestimony),
        rule(RETRACTION, HearingKind::Retraction),
    ]
});

static PENAL_ENFORCEMENT_RULES: Lazy<Vec<KindRule>> = Lazy::new(|| {
    vec![
        rule(JUSTIFICATION, HearingKind::Justification),
        rule(&["ADMONIT"], HearingKind::Admonitory),
    ]
});

static CRIMINAL_RULES: Lazy<Vec<KindRule>> = Lazy::new(|| {
    vec![
        rule(INSTRUCTION_OR_JUDGMENT, HearingKind::InstructionAndJudgment),
        rule(CUSTODY, HearingKind::Custody),
        rule(NON_PROSECUTION, HearingKind::NonProsecutionAgreement),
        rule(JUSTIFICATION, HearingKind::Justification),
    ]
});

/// Same precedence as the cue detectors.
static GENERIC_RULES: Lazy<Vec<KindRule>> = Lazy::new(|| {
    vec![
        rule(
            &[
                "SESSÃO DE JULGAMENTO",
                "SESSAO DE JULGAMENTO",
                "TRIBUNAL DO JÚRI",
                "TRIBUNAL DO JURI",
                "PLENÁRIO",
                "PLENARIO",
            ],
            HearingKind::JurySession,
        ),
        rule(NON_PROSECUTION, HearingKind::NonProsecutionAgreement),
        rule(EARLY_EVIDENCE, HearingKind::EarlyEvidence),
        rule(&["ADMONIT"], HearingKind::Admonitory),
        rule(SPECIAL_TESTIMONY, HearingKind::SpecialTestimony),
        rule(RETRACTION, HearingKind::Retraction),
        rule(JUSTIFICATION, HearingKind::Justification),
        rule(CUSTODY, HearingKind::Custody),
        rule(INSTRUCTION, HearingKind::InstructionAndJudgment),
        rule_unless(
            &["JULGAMENTO"],
            &["SESSÃO", "SESSAO", "TRIBUNAL"],
            HearingKind::InstructionAndJudgment,
        ),
        rule(&["CONCILIAÇÃO", "CONCILIACAO"], HearingKind::Conciliation),
    ]
});

/// Rule table specific to a jurisdiction.
pub fn rules_for(jurisdiction: Jurisdiction) -> &'static [KindRule] {
    match jurisdiction {
        Jurisdiction::Jury => JURY_RULES.as_slice(),
        Jurisdiction::DomesticViolence => DOMESTIC_VIOLENCE_RULES.as_slice(),
        Jurisdiction::PenalEnforcement => PENAL_ENFORCEMENT_RULES.as_slice(),
        Jurisdiction::Criminal => CRIMINAL_RULES.as_slice(),
        Jurisdiction::Guardianship => &[],
    }
}

/// Where the classified kind came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindSource {
    Jurisdiction,
    Generic,
    /// Unrecognised cue kept as-is. The pipeline only hands over the fixed
    /// cue phrases, which the generic table always matches, so this is
    /// reachable only through direct calls with free text.
    Verbatim,
    /// No usable cue.
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindMatch {
    pub kind: HearingKind,
    pub source: KindSource,
}

impl KindMatch {
    /// Verbatim and defaulted kinds are flagged for review.
    pub fn needs_review(&self) -> bool {
        matches!(self.source, KindSource::Verbatim | KindSource::Default)
    }
}

/// Map a raw hearing-kind cue onto a canonical kind.
pub fn classify_hearing_kind(raw: &str, jurisdiction: Jurisdiction) -> KindMatch {
    let raw = raw.trim();
    let upper = raw.to_uppercase();

    if !raw.is_empty() {
        let hit = |rules: &'static [KindRule]| rules.iter().find(|r| r.matches(&upper));
        if let Some(r) = hit(rules_for(jurisdiction)) {
            return KindMatch {
                kind: r.kind.clone(),
                source: KindSource::Jurisdiction,
            };
        }
        if let Some(r) = hit(GENERIC_RULES.as_slice()) {
            return KindMatch {
                kind: r.kind.clone(),
                source: KindSource::Generic,
            };
        }
        if upper != "AUDIÊNCIA" && upper != "AUDIENCIA" {
            return KindMatch {
                kind: HearingKind::Other(raw.to_string()),
                source: KindSource::Verbatim,
            };
        }
    }

    KindMatch {
        kind: HearingKind::InstructionAndJudgment,
        source: KindSource::Default,
    }
}
