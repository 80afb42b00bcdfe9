//! Review report shown before handing new events to persistence.

use std::fmt;

use pauta_core::Jurisdiction;
use serde::Serialize;

use crate::compose::NO_PARTY_TITLE;
use crate::types::{ParseOutcome, ParsedHearingEvent};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub total_found: usize,
    pub new_count: usize,
    pub duplicate_count: usize,
    pub detected_jurisdiction: Option<Jurisdiction>,
    pub detected_authority: Option<String>,
    /// `party - case number`, in input order.
    pub duplicates: Vec<String>,
    /// `kind - party - date time`, in input order.
    pub to_import: Vec<String>,
    /// Fields that fell back to a placeholder, across all events.
    pub review_field_count: usize,
    pub failure: Option<String>,
}

fn duplicate_line(event: &ParsedHearingEvent) -> String {
    format!(
        "{} - {}",
        event.primary_party_name.as_deref().unwrap_or(NO_PARTY_TITLE),
        event.case_number
    )
}

fn import_line(event: &ParsedHearingEvent) -> String {
    format!(
        "{} - {} - {} {}",
        event.hearing_kind,
        event.primary_party_name.as_deref().unwrap_or(NO_PARTY_TITLE),
        event.date.format("%d/%m/%Y"),
        event.start_time.format("%H:%M")
    )
}

impl ImportSummary {
    pub fn from_outcome(outcome: &ParseOutcome) -> Self {
        let failure = outcome.diagnostics.iter().find_map(|d| match d {
            crate::types::Diagnostic::Failure { message } => Some(message.clone()),
            _ => None,
        });

        Self {
            total_found: outcome.total_found(),
            new_count: outcome.new_events.len(),
            duplicate_count: outcome.duplicate_events.len(),
            detected_jurisdiction: outcome.detected_jurisdiction,
            detected_authority: outcome.detected_authority.clone(),
            duplicates: outcome.duplicate_events.iter().map(duplicate_line).collect(),
            to_import: outcome.new_events.iter().map(import_line).collect(),
            review_field_count: outcome.review_field_count(),
            failure,
        }
    }
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = &self.failure {
            writeln!(f, "Falha ao processar o texto: {}", message)?;
            return write!(f, "Nenhuma audiência foi importada.");
        }
        if self.total_found == 0 {
            writeln!(f, "Nenhuma audiência encontrada no texto.")?;
            return write!(
                f,
                "Verifique se o texto foi copiado da pauta de audiências do PJe, e não da lista de intimações."
            );
        }

        writeln!(f, "Análise de importação")?;
        writeln!(f)?;
        if let Some(jurisdiction) = self.detected_jurisdiction {
            writeln!(f, "Atribuição detectada: {}", jurisdiction)?;
        }
        if let Some(authority) = &self.detected_authority {
            writeln!(f, "Vara: {}", authority)?;
        }
        writeln!(f, "Audiências encontradas: {}", self.total_found)?;
        writeln!(f, "Audiências novas: {}", self.new_count)?;

        if self.duplicate_count > 0 {
            writeln!(f, "Audiências já cadastradas: {}", self.duplicate_count)?;
            writeln!(f)?;
            writeln!(f, "Audiências duplicadas:")?;
            for (i, line) in self.duplicates.iter().enumerate() {
                writeln!(f, "{}. {}", i + 1, line)?;
            }
        } else {
            writeln!(f, "Nenhuma duplicata encontrada.")?;
        }

        if !self.to_import.is_empty() {
            writeln!(f)?;
            writeln!(f, "Audiências que serão importadas:")?;
            for (i, line) in self.to_import.iter().enumerate() {
                writeln!(f, "{}. {}", i + 1, line)?;
            }
        }

        if self.review_field_count > 0 {
            writeln!(f)?;
            write!(f, "Campos que precisam de revisão manual: {}", self.review_field_count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedup::ExistingRecord;
    use crate::pipeline::parse;
    use pauta_core::JurisdictionChoice;

    const SCHEDULE: &str = "15/01/2025 09:00 8012906-74.2025.8.05.0039\n\
        Ação Penal de Competência do Júri\n\
        JOSÉ CARLOS DOS SANTOS - CPF: 123.456.789-00 (RÉU)\n\
        VARA DO JÚRI DE CAMAÇARI\n\
        Instrução e Julgamento Designada\n\
        16/01/2025 14:00 8000001-11.2024.8.05.0039\n\
        Audiência de Custódia Designada\n";

    #[test]
    fn test_summary_lists_new_and_duplicates() {
        let existing = vec![ExistingRecord::new("8000001-11.2024.8.05.0039", "2025-01-16", "14:00")];
        let outcome = parse(SCHEDULE, JurisdictionChoice::Auto, &existing);
        let summary = ImportSummary::from_outcome(&outcome);

        assert_eq!(summary.total_found, 2);
        assert_eq!(summary.new_count, 1);
        assert_eq!(summary.duplicates, vec!["Sem assistido - 8000001-11.2024.8.05.0039"]);
        assert_eq!(
            summary.to_import,
            vec!["AIJ - José Carlos dos Santos - 15/01/2025 09:00"]
        );

        let text = summary.to_string();
        assert!(text.contains("Atribuição detectada: Tribunal do Júri"));
        assert!(text.contains("Audiências já cadastradas: 1"));
        assert!(text.contains("1. Sem assistido - 8000001-11.2024.8.05.0039"));
    }

    #[test]
    fn test_summary_for_empty_input() {
        let outcome = parse::<ExistingRecord>("nada aqui", JurisdictionChoice::Auto, &[]);
        let text = ImportSummary::from_outcome(&outcome).to_string();
        assert!(text.starts_with("Nenhuma audiência encontrada no texto."));
    }

    #[test]
    fn test_summary_for_failure() {
        let outcome = ParseOutcome::failure("boom");
        let text = ImportSummary::from_outcome(&outcome).to_string();
        assert!(text.starts_with("Falha ao processar o texto: boom"));
    }
}
