//! Symptom lexicon and context classifier word lists.
//!
//! The built-in lexicon is generated at build time from
//! `config/symptom_lexicon.toml`; custom lexicons in the same format can be
//! loaded at runtime with [`Lexicon::from_toml_str`].

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::warn;

use crate::error::{SymptomError, SymptomResult};
use crate::normalize::fold;

/// Shorter classifier words would match as prefixes of unrelated words.
const MIN_CLASSIFIER_CHARS: usize = 2;

include!(concat!(env!("OUT_DIR"), "/lexicon_data.rs"));

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| {
    Lexicon::assemble(
        BUILTIN_SYMPTOMS
            .iter()
            .map(|(name, variants)| RawEntry {
                name: name.to_string(),
                variants: variants.iter().map(|v| v.to_string()).collect(),
            })
            .collect(),
        RawClassifiers {
            location: owned_words(BUILTIN_LOCATION_MARKERS),
            qualifiers: owned_words(BUILTIN_QUALIFIERS),
            timing: owned_words(BUILTIN_TIMING_TERMS),
        },
    )
});

fn owned_words(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ── Lexicon entries ─────────────────────────────────────────────────

/// A canonical symptom and the surface forms that refer to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    symptom: String,
    variants: Vec<String>,
    folded_variants: Vec<String>,
}

impl LexiconEntry {
    /// Canonical display name, e.g. "dor de cabeça".
    pub fn symptom(&self) -> &str {
        &self.symptom
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Folded variants, deduplicated, in declaration order. Never empty strings.
    pub fn keywords(&self) -> &[String] {
        &self.folded_variants
    }
}

/// Location markers, qualifiers and timing terms, stored folded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextClassifiers {
    location: Vec<String>,
    qualifiers: Vec<String>,
    timing: Vec<String>,
}

impl ContextClassifiers {
    pub fn location_markers(&self) -> &[String] {
        &self.location
    }

    pub fn qualifiers(&self) -> &[String] {
        &self.qualifiers
    }

    pub fn timing_terms(&self) -> &[String] {
        &self.timing
    }
}

// ── TOML shape ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawLexicon {
    #[serde(default)]
    classifiers: RawClassifiers,
    #[serde(default, rename = "symptom")]
    symptoms: Vec<RawEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct RawClassifiers {
    #[serde(default)]
    location: Vec<String>,
    #[serde(default)]
    qualifiers: Vec<String>,
    #[serde(default)]
    timing: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    #[serde(default)]
    variants: Vec<String>,
}

// ── Lexicon ─────────────────────────────────────────────────────────

/// Immutable symptom lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    classifiers: ContextClassifiers,
}

impl Lexicon {
    /// The lexicon compiled into the crate.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Parse and validate a lexicon in the `config/symptom_lexicon.toml` format.
    pub fn from_toml_str(src: &str) -> SymptomResult<Self> {
        let raw: RawLexicon = toml::from_str(src)?;
        Self::validate(&raw).inspect_err(|e| warn!(error = %e, "Rejected symptom lexicon"))?;
        Ok(Self::assemble(raw.symptoms, raw.classifiers))
    }

    fn validate(raw: &RawLexicon) -> SymptomResult<()> {
        let mut seen = HashSet::new();
        for (index, entry) in raw.symptoms.iter().enumerate() {
            if fold(&entry.name).trim().is_empty() {
                return Err(SymptomError::EmptySymptomName { index });
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(SymptomError::DuplicateSymptom(entry.name.clone()));
            }
            if entry.variants.iter().any(|v| fold(v).trim().is_empty()) {
                return Err(SymptomError::EmptyKeyword {
                    symptom: entry.name.clone(),
                });
            }
        }

        for (list, words) in [
            ("location", &raw.classifiers.location),
            ("qualifiers", &raw.classifiers.qualifiers),
            ("timing", &raw.classifiers.timing),
        ] {
            for word in words {
                let folded = fold(word);
                match folded.trim().chars().count() {
                    0 => return Err(SymptomError::EmptyClassifierWord { list }),
                    n if n < MIN_CLASSIFIER_CHARS => {
                        return Err(SymptomError::ShortClassifierWord {
                            list,
                            word: word.clone(),
                        })
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Build from already-validated raw data.
    ///
    /// The canonical name always counts as one of its own variants.
    fn assemble(symptoms: Vec<RawEntry>, classifiers: RawClassifiers) -> Self {
        let entries = symptoms
            .into_iter()
            .map(|raw| {
                let mut variants = raw.variants;
                if !variants.iter().any(|v| fold(v) == fold(&raw.name)) {
                    variants.insert(0, raw.name.clone());
                }
                let mut folded_variants: Vec<String> = Vec::with_capacity(variants.len());
                for v in &variants {
                    let f = fold(v.trim());
                    if !f.is_empty() && !folded_variants.contains(&f) {
                        folded_variants.push(f);
                    }
                }
                LexiconEntry {
                    symptom: raw.name,
                    variants,
                    folded_variants,
                }
            })
            .collect();

        let fold_all = |words: Vec<String>| -> Vec<String> {
            words
                .iter()
                .map(|w| fold(w.trim()))
                .filter(|w| !w.is_empty())
                .collect()
        };

        Self {
            entries,
            classifiers: ContextClassifiers {
                location: fold_all(classifiers.location),
                qualifiers: fold_all(classifiers.qualifiers),
                timing: fold_all(classifiers.timing),
            },
        }
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn classifiers(&self) -> &ContextClassifiers {
        &self.classifiers
    }

    /// Variant list for a canonical symptom name (exact match).
    pub fn variants_of(&self, symptom: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.symptom == symptom)
            .map(|e| e.variants())
    }

    pub fn is_location_marker(&self, word: &str) -> bool {
        self.classifiers.location.contains(&fold(word))
    }

    pub fn is_qualifier(&self, word: &str) -> bool {
        self.classifiers.qualifiers.contains(&fold(word))
    }

    pub fn is_timing_term(&self, word: &str) -> bool {
        self.classifiers.timing.contains(&fold(word))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
