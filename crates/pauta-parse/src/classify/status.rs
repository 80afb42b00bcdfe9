use pauta_core::HearingStatus;

/// Map the raw situation word onto a status.
///
/// Hyphens count as spaces ("não-realizada"). "não realizada" is checked
/// before "realizada" since the latter is a substring of the former.
pub fn classify_status(situation: &str) -> HearingStatus {
    let s = situation
        .to_lowercase()
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if s.contains("não realizada") || s.contains("nao realizada") || s.contains("cancelad") {
        HearingStatus::Canceled
    } else if s.contains("redesignad") || s.contains("remarcad") {
        HearingStatus::Rescheduled
    } else if s.contains("realizada") {
        HearingStatus::Completed
    } else {
        HearingStatus::Confirmed
    }
}
