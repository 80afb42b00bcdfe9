//! Text clean-up before scanning: rejoin wrapped case numbers, normalise line endings.

use once_cell::sync::Lazy;
use regex::Regex;

/// Break right after the sequential number: `8012906-\n74.2025`.
static SPLIT_AFTER_SEQUENTIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{7})-[ \t]*\r?\n\s*([0-9]{2}\.[0-9]{4})").unwrap());

/// Break before the hyphen: `8012906\n-74.2025`.
static SPLIT_BEFORE_HYPHEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{7})[ \t]*\r?\n\s*-[ \t]*([0-9]{2}\.[0-9]{4})").unwrap());

/// Break after the year: `74.2025.\n8.05.0039`.
static SPLIT_AFTER_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{2}\.[0-9]{4})\.[ \t]*\r?\n\s*([0-9]\.[0-9]{2}\.[0-9]{4})").unwrap()
});

static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalise a pasted export. Total: never fails, idempotent.
pub fn normalize(raw: &str) -> String {
    let text = SPLIT_AFTER_SEQUENTIAL.replace_all(raw, "${1}-${2}");
    let text = SPLIT_BEFORE_HYPHEN.replace_all(&text, "${1}-${2}");
    let text = SPLIT_AFTER_YEAR.replace_all(&text, "${1}.${2}");
    let text = text.replace("\r\n", "\n");
    BLANK_RUNS.replace_all(&text, "\n\n").into_owned()
}
