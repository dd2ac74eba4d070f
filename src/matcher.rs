//! Keyword occurrence scanning and confidence scoring.
//!
//! Every variant of every lexicon entry is searched for in the folded
//! transcript, one record per occurrence. Context is the enclosing
//! sentence taken from the original text so accents and casing survive.

use tracing::trace;

use crate::config::{
    AdjacencyScope, BASE_CONFIDENCE, LOCATION_BONUS, QUALIFIER_BONUS, TIMING_BONUS,
};
use crate::lexicon::{ContextClassifiers, Lexicon};
use crate::normalize::FoldedText;

/// One keyword occurrence, before deduplication.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub symptom: String,
    pub context: String,
    pub confidence: f64,
}

/// Find every keyword occurrence in `text`.
///
/// Records come out grouped by lexicon entry, then variant, then position.
pub fn scan_matches(text: &str, lexicon: &Lexicon, scope: AdjacencyScope) -> Vec<MatchRecord> {
    let folded = FoldedText::new(text);
    let hay = folded.as_str();
    let classifiers = lexicon.classifiers();
    let mut records = Vec::new();

    if hay.is_empty() {
        return records;
    }

    for entry in lexicon.entries() {
        for keyword in entry.keywords() {
            // Whole-text scoring does not depend on the occurrence.
            let whole_text_score = (scope == AdjacencyScope::WholeText)
                .then(|| adjacency_confidence(hay, keyword, classifiers));

            let mut from = 0;
            while let Some(rel) = hay[from..].find(keyword.as_str()) {
                let start = from + rel;
                let (s_start, s_end) = sentence_bounds(hay, start);

                let confidence = match whole_text_score {
                    Some(score) => score,
                    None => adjacency_confidence(&hay[s_start..s_end], keyword, classifiers),
                };
                let context = folded.original_slice(s_start, s_end).trim().to_string();

                trace!(symptom = entry.symptom(), keyword = %keyword, confidence, "Keyword occurrence");
                records.push(MatchRecord {
                    symptom: entry.symptom().to_string(),
                    context,
                    confidence,
                });

                from = start + keyword.len();
            }
        }
    }
    records
}

/// Byte range of the `.`-delimited sentence containing `pos`.
///
/// The range excludes both delimiters.
fn sentence_bounds(hay: &str, pos: usize) -> (usize, usize) {
    let start = hay[..pos].rfind('.').map_or(0, |i| i + 1);
    let end = hay[pos..].find('.').map_or(hay.len(), |i| pos + i);
    (start, end)
}

/// Score a keyword by the classifier words directly beside it in `hay`.
///
/// Adjacency means separated by exactly one space. Location markers only
/// count after the keyword ("dor no peito"); qualifiers and timing terms
/// count on either side.
pub(crate) fn adjacency_confidence(hay: &str, keyword: &str, cls: &ContextClassifiers) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if cls
        .location_markers()
        .iter()
        .any(|marker| hay.contains(&format!("{keyword} {marker}")))
    {
        confidence += LOCATION_BONUS;
    }
    if cls.qualifiers().iter().any(|q| adjacent_either_side(hay, keyword, q)) {
        confidence += QUALIFIER_BONUS;
    }
    if cls.timing_terms().iter().any(|t| adjacent_either_side(hay, keyword, t)) {
        confidence += TIMING_BONUS;
    }

    confidence.min(1.0)
}

fn adjacent_either_side(hay: &str, keyword: &str, word: &str) -> bool {
    hay.contains(&format!("{word} {keyword}")) || hay.contains(&format!("{keyword} {word}"))
}
