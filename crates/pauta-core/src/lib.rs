//! Pauta Core — shared vocabulary for the hearing-schedule importer:
//! error type, parser configuration, case numbers and the fixed enumerations.

pub mod case_number;
pub mod config;
pub mod error;
pub mod types;

pub use case_number::CaseNumber;
pub use config::ParserConfig;
pub use error::{Error, Result};
pub use types::{HearingStatus, Jurisdiction, JurisdictionChoice};
