//! Text folding — lower-case, NFD, combining marks removed.
//!
//! Folding changes UTF-8 lengths ("É" is two bytes, "e" is one), so a
//! folded string carries a map from each of its byte offsets back to the
//! byte offset of the original character that produced it.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold a string for case- and accent-insensitive comparison.
pub fn fold(text: &str) -> String {
    FoldedText::new(text).folded
}

/// A folded copy of a text plus its offset map back to the original.
#[derive(Debug, Clone)]
pub struct FoldedText<'a> {
    original: &'a str,
    folded: String,
    /// `origin[i]` is the original byte offset for folded byte `i`;
    /// one trailing entry maps `folded.len()` to `original.len()`.
    origin: Vec<usize>,
}

impl<'a> FoldedText<'a> {
    pub fn new(original: &'a str) -> Self {
        let mut folded = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len() + 1);

        for (pos, ch) in original.char_indices() {
            for c in ch.to_lowercase().nfd().filter(|c| !is_combining_mark(*c)) {
                folded.push(c);
                origin.extend(std::iter::repeat(pos).take(c.len_utf8()));
            }
        }
        origin.push(original.len());

        Self {
            original,
            folded,
            origin,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// Original byte offset of a folded byte offset.
    ///
    /// Offsets past the end clamp to the end of the original.
    pub fn original_offset(&self, folded_pos: usize) -> usize {
        self.origin
            .get(folded_pos)
            .copied()
            .unwrap_or(self.original.len())
    }

    /// Original text covering the folded range `start..end`.
    ///
    /// `end` maps to the start of the next original character, so a range
    /// ending mid-way through a decomposed character still covers all of it.
    pub fn original_slice(&self, start: usize, end: usize) -> &'a str {
        let from = self.original_offset(start);
        let to = self.original_offset(end).max(from);
        &self.original[from..to]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_strips_accents_and_case() {
        assert_eq!(fold("Dor de Cabeça"), "dor de cabeca");
        assert_eq!(fold("NÁUSEA leve"), "nausea leve");
        assert_eq!(fold("há"), "ha");
    }

    #[test]
    fn test_fold_plain_ascii_unchanged() {
        assert_eq!(fold("tosse seca"), "tosse seca");
    }

    #[test]
    fn test_offsets_map_back_to_original() {
        let f = FoldedText::new("Náusea e vómito");
        let pos = f.as_str().find("vomito").unwrap();
        assert_eq!(f.original_slice(pos, pos + "vomito".len()), "vómito");
        assert_eq!(f.original_slice(0, "nausea".len()), "Náusea");
    }

    #[test]
    fn test_offset_past_end_clamps() {
        let f = FoldedText::new("febre");
        assert_eq!(f.original_offset(100), 5);
        assert_eq!(f.original_slice(0, 100), "febre");
    }

    #[test]
    fn test_empty() {
        let f = FoldedText::new("");
        assert_eq!(f.as_str(), "");
        assert_eq!(f.original_slice(0, 0), "");
    }
}
