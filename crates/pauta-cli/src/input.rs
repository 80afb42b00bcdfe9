//! Reading the export, the registered hearings and the configuration.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use pauta_core::ParserConfig;
use pauta_parse::ExistingRecord;
use tracing::debug;

/// The pasted export, from a file or stdin.
pub fn read_export(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read export {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read export from stdin")?;
            Ok(raw)
        }
    }
}

/// Registered hearings to deduplicate against; none when no file is given.
pub fn load_existing(path: Option<&Path>) -> anyhow::Result<Vec<ExistingRecord>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read existing records {}", path.display()))?;
    let records = ExistingRecord::list_from_json(&text)
        .with_context(|| format!("Invalid existing records in {}", path.display()))?;
    debug!("Loaded {} existing records from {}", records.len(), path.display());
    Ok(records)
}

/// An explicitly named config file must exist; otherwise defaults plus env.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ParserConfig> {
    let config = match path {
        Some(path) if !path.exists() => bail!("Config file not found: {}", path.display()),
        Some(path) => ParserConfig::load(path),
        None => ParserConfig::from_env(),
    };
    config.validate().context("Invalid parser configuration")?;
    Ok(config)
}
