use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"https?://[^\s<>"')]+"#).expect("valid url regex"));

/// Scans plaintext for `http(s)://` tokens, first occurrence wins.
pub fn extract_text_urls(text: &str) -> Vec<String> {
    dedup_preserving_order(URL_REGEX.find_iter(text).map(|m| m.as_str().to_string()))
}

/// Drops repeated values while keeping the order in which each was first seen.
pub fn dedup_preserving_order<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
