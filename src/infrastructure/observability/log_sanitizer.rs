use std::sync::LazyLock;

use regex::Regex;

const MAX_VISIBLE_CHARS: usize = 100;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// Produces a short, log-safe preview of user-submitted text.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = EMAIL.replace_all(trimmed, "[EMAIL]");
    let total_chars = redacted.chars().count();
    if total_chars <= MAX_VISIBLE_CHARS {
        return redacted.into_owned();
    }

    let prefix: String = redacted.chars().take(MAX_VISIBLE_CHARS).collect();
    format!("{prefix}... ({total_chars} chars total)")
}
