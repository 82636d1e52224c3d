use regex::Regex;
use std::sync::LazyLock;

// DD.MM.YYYY HH:MM as the renderer embeds it. Matched verbatim; the token is
// an opaque marker for comparison and never validated as a calendar date.
static TIMESTAMP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}\.\d{2}\.\d{4} \d{2}:\d{2}").unwrap());

/// Returns the first embedded generation timestamp in a report blob, or
/// `None` when the text carries no recognizable timestamp.
pub fn extract_timestamp(text: &str) -> Option<&str> {
    TIMESTAMP_REGEX.find(text).map(|m| m.as_str())
}
