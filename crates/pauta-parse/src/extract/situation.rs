//! Raw hearing situation ("situação da audiência").

use once_cell::sync::Lazy;
use regex::Regex;

/// Situation words in precedence order. "Não realizada" must precede "realizada",
/// "redesignada" must precede "designada".
static SITUATIONS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bn[ãa]o[\s-]+realizada\b",
        r"(?i)\bcancelada\b",
        r"(?i)\bredesignada\b",
        r"(?i)\brealizada\b",
        r"(?i)\bdesignada\b",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// The first situation word found, lower-cased as written.
pub fn extract_situation(block: &str) -> Option<String> {
    SITUATIONS
        .iter()
        .find_map(|re| re.find(block))
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase())
}
