use std::sync::LazyLock;

use regex::Regex;

static CITATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\d+\]").unwrap());

/// Normalize raw markup text: drop `[N]` citation markers, collapse every
/// whitespace run (spaces, tabs, newlines) to a single space, trim the ends.
/// An empty result is absence, not an error.
pub fn clean_text(raw: &str) -> Option<String> {
    let stripped = CITATION_RE.replace_all(raw, "");
    let cleaned = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

// ── Tests ──
