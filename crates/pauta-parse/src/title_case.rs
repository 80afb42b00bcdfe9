//! Title casing for names, courts and procedural classes.

/// Connectives kept in lower case unless they open the string.
pub const CONNECTIVES: &[&str] = &[
    "de", "da", "do", "das", "dos", "e", "em", "para", "por", "com", "sem", "a", "o", "as", "os",
];

/// Convert to Title Case, keeping Portuguese connectives lower-case.
///
/// Whitespace runs collapse to a single space. Idempotent.
pub fn to_title_case(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if i > 0 && CONNECTIVES.contains(&word) {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
