use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse runs of whitespace into single spaces and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Split a comma separated tag list, dropping empty entries
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(collapse_whitespace)
        .filter(|tag| !tag.is_empty())
        .collect()
}
