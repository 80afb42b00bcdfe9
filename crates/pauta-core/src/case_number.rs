//! Unified judicial case numbers (`NNNNNNN-DD.AAAA.J.TR.OOOO`).
//!
//! Every hearing record carries one of these. The scanners in `pauta-parse`
//! share [`CASE_NUMBER_PATTERN`] so that anything they extract is accepted
//! by [`CaseNumber::parse`].

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Unanchored pattern for a case number, suitable for embedding in larger regexes.
pub const CASE_NUMBER_PATTERN: &str = r"[0-9]{7}-[0-9]{2}\.[0-9]{4}\.[0-9]\.[0-9]{2}\.[0-9]{4}";

static CASE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{7})-([0-9]{2})\.([0-9]{4})\.([0-9])\.([0-9]{2})\.([0-9]{4})$").unwrap()
});

/// A validated case number in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CaseNumber(String);

impl CaseNumber {
    /// Validate and wrap a case number. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if CASE_NUMBER_RE.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(Error::InvalidCaseNumber(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Seven-digit sequential number within the origin unit and year.
    pub fn sequential(&self) -> &str {
        &self.0[0..7]
    }

    /// Two verification digits.
    pub fn check_digits(&self) -> &str {
        &self.0[8..10]
    }

    /// Filing year.
    pub fn year(&self) -> u16 {
        self.0[11..15].parse().unwrap_or(0)
    }

    /// Justice segment (8 = state courts).
    pub fn segment(&self) -> &str {
        &self.0[16..17]
    }

    /// Two-digit court code within the segment.
    pub fn court(&self) -> &str {
        &self.0[18..20]
    }

    /// Four-digit origin unit.
    pub fn origin(&self) -> &str {
        &self.0[21..25]
    }
}

impl fmt::Display for CaseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CaseNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CaseNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CaseNumber {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CaseNumber> for String {
    fn from(value: CaseNumber) -> Self {
        value.0
    }
}
