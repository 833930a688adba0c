use crate::types::ConfirmationRecord;
use regex::Regex;
use std::sync::OnceLock;

/// The user message that arms extraction for the next successful reply.
/// Matched exactly (case- and diacritic-sensitive) against trimmed input;
/// the backend prompt is written around this literal, so no normalization.
pub const CONFIRMATION_TRIGGER: &str = "Επιβεβαιωση Κρατησης";

fn date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // day/month/4-digit-year with `/` separators, e.g. 15/11/2025.
    RE.get_or_init(|| Regex::new(r"\d{1,2}/\d{1,2}/\d{4}").expect("valid date regex"))
}

fn time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // hour:minute, e.g. 21:00.
    RE.get_or_init(|| Regex::new(r"\d{1,2}:\d{2}").expect("valid time regex"))
}

fn performance_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // First span strictly between guillemets, the quoting the backend uses
    // for performance titles.
    RE.get_or_init(|| Regex::new(r"«([^»]*)»").expect("valid performance regex"))
}

/// Pulls booking fields out of a free-text reply. Total and deterministic:
/// a pattern that does not match leaves its field empty, never an error.
pub fn extract_confirmation(reply: &str) -> ConfirmationRecord {
    let date = date_re()
        .find(reply)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let time = time_re()
        .find(reply)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let performance = performance_re()
        .captures(reply)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    ConfirmationRecord {
        date,
        time,
        performance,
    }
}
