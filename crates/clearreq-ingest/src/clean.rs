use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.,;:!?\-()]").expect("valid character filter regex"));

/// Normalize extracted text before analysis.
///
/// Whitespace runs collapse to one space, then everything except word
/// characters, whitespace and `. , ; : ! ? - ( )` is removed. Remaining
/// lines are trimmed and blank ones dropped.
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    let kept = DISALLOWED.replace_all(&collapsed, "");
    let normalized = kept.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
