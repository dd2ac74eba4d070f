//! Shorten a finding's sentence context to a symptom-focused phrase.
//!
//! The report already names the symptom, so the phrase drops it and keeps
//! the words around it.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Contexts longer than this (in chars) are cut to a window around the symptom.
const LONG_CONTEXT_CHARS: usize = 100;
/// Chars kept on each side of the symptom when windowing.
const WINDOW_CHARS: usize = 30;
/// A context must be at least this many chars longer than the symptom.
const MIN_EXTRA_CHARS: usize = 5;

static LEADING_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\s,.;:!?\-]+").unwrap());

static EDGE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s,.;:!?\-]+|[\s,.;:!?\-]+$").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Extract the part of `context` worth showing next to `symptom`.
///
/// Returns an empty string when the context does not mention the symptom
/// (case-insensitively) or adds too little to it.
pub fn extract_relevant_context(context: &str, symptom: &str) -> String {
    if symptom.trim().is_empty() {
        return String::new();
    }
    let pattern = match RegexBuilder::new(&regex::escape(symptom))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(_) => return String::new(),
    };
    let Some(found) = pattern.find(context) else {
        return String::new();
    };

    let context_len = context.chars().count();
    if context_len <= symptom.chars().count() + MIN_EXTRA_CHARS {
        return String::new();
    }

    let relevant = if context_len > LONG_CONTEXT_CHARS {
        let window = char_window(context, found.start(), found.end(), WINDOW_CHARS);
        let rest = LEADING_PUNCT.replace(window, "");
        let rest = match pattern.find(&rest) {
            Some(m) if m.start() == 0 => &rest[m.end()..],
            _ => &rest[..],
        };
        LEADING_PUNCT.replace(rest, "").trim_end().to_string()
    } else {
        let removed = pattern.replace_all(context, "");
        EDGE_PUNCT.replace_all(&removed, "").into_owned()
    };

    capitalize_first(&WHITESPACE_RUN.replace_all(&relevant, " "))
}

/// Slice of `text` from `chars` chars before `start` to `chars` chars after `end`.
fn char_window(text: &str, start: usize, end: usize, chars: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(chars)
        .last()
        .map_or(start, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(chars)
        .map_or(text.len(), |(i, _)| end + i);
    &text[from..to]
}

pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}
