//! Transcript text normalization.

use regex::Regex;
use std::sync::LazyLock;

/// Everything outside the Unicode word and whitespace classes.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// Normalize raw model output: lowercase, strip punctuation and symbols,
/// trim surrounding whitespace.
///
/// Only word characters and internal whitespace survive, which is what the
/// downstream phrase matching expects. Idempotent.
pub fn clean_transcript(raw: &str) -> String {
    NON_WORD
        .replace_all(&raw.to_lowercase(), "")
        .trim()
        .to_string()
}

#[cfg(test)]
#[path = "text_test.rs"]
mod tests;
