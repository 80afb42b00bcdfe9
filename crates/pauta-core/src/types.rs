//! Fixed enumerations shared by the parser and its callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Court competence a hearing is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Jurisdiction {
    /// Tribunal do Júri.
    Jury,
    /// Violência Doméstica.
    DomesticViolence,
    /// Execução Penal.
    PenalEnforcement,
    /// Criminal Geral.
    Criminal,
    /// Curadoria.
    Guardianship,
}

impl Jurisdiction {
    pub fn all() -> &'static [Jurisdiction] {
        &[
            Self::Jury,
            Self::DomesticViolence,
            Self::PenalEnforcement,
            Self::Criminal,
            Self::Guardianship,
        ]
    }

    /// Machine slug, as accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Jury => "jury",
            Self::DomesticViolence => "domestic-violence",
            Self::PenalEnforcement => "penal-enforcement",
            Self::Criminal => "criminal",
            Self::Guardianship => "guardianship",
        }
    }

    /// Label used by the office in titles and descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Jury => "Tribunal do Júri",
            Self::DomesticViolence => "Violência Doméstica",
            Self::PenalEnforcement => "Execução Penal",
            Self::Criminal => "Criminal Geral",
            Self::Guardianship => "Curadoria",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Jurisdiction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = fold(s);
        Self::all()
            .iter()
            .copied()
            .find(|j| wanted == j.slug() || wanted == fold(j.label()))
            .ok_or_else(|| Error::InvalidJurisdiction(s.to_string()))
    }
}

/// Either let the classifier decide, or force one jurisdiction for every block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JurisdictionChoice {
    #[default]
    Auto,
    Forced(Jurisdiction),
}

impl JurisdictionChoice {
    pub fn forced(&self) -> Option<Jurisdiction> {
        match self {
            Self::Auto => None,
            Self::Forced(j) => Some(*j),
        }
    }
}

impl fmt::Display for JurisdictionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Forced(j) => f.write_str(j.slug()),
        }
    }
}

impl FromStr for JurisdictionChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        s.parse().map(Self::Forced)
    }
}

impl From<Jurisdiction> for JurisdictionChoice {
    fn from(value: Jurisdiction) -> Self {
        Self::Forced(value)
    }
}

/// Normalised hearing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HearingStatus {
    Confirmed,
    Canceled,
    Rescheduled,
    Completed,
}

impl HearingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmado",
            Self::Canceled => "cancelado",
            Self::Rescheduled => "remarcado",
            Self::Completed => "concluido",
        }
    }
}

impl fmt::Display for HearingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercase, strip Portuguese diacritics, turn spaces/underscores into hyphens.
fn fold(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' | 'ü' => 'u',
            'ç' => 'c',
            ' ' | '_' => '-',
            other => other,
        })
        .collect()
}
