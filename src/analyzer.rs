//! Analyzer facade: lexicon + config, and the default free functions.

use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::error::SymptomResult;
use crate::lexicon::Lexicon;
use crate::matcher::scan_matches;
use crate::ranking::{rank_matches, SymptomFinding};
use crate::report;

/// Detect symptom mentions in a transcript with the built-in lexicon.
///
/// Returns at most one finding per canonical symptom, sorted by
/// descending confidence. Empty input gives an empty result.
pub fn analyze_symptoms(text: &str) -> Vec<SymptomFinding> {
    SymptomAnalyzer::builtin().analyze(text)
}

/// Symptom detection over a fixed lexicon and configuration.
///
/// Holds no mutable state; share one instance across threads freely.
#[derive(Debug, Clone)]
pub struct SymptomAnalyzer<'l> {
    lexicon: &'l Lexicon,
    config: AnalyzerConfig,
}

impl SymptomAnalyzer<'static> {
    /// Built-in lexicon, default config.
    pub fn builtin() -> Self {
        Self {
            lexicon: Lexicon::builtin(),
            config: AnalyzerConfig::default(),
        }
    }

    /// Built-in lexicon with a custom (validated) config.
    pub fn with_config(config: AnalyzerConfig) -> SymptomResult<Self> {
        config.validate()?;
        Ok(Self {
            lexicon: Lexicon::builtin(),
            config,
        })
    }
}

impl<'l> SymptomAnalyzer<'l> {
    pub fn new(lexicon: &'l Lexicon, config: AnalyzerConfig) -> SymptomResult<Self> {
        config.validate()?;
        Ok(Self {
            lexicon,
            config,
        })
    }

    pub fn analyze(&self, text: &str) -> Vec<SymptomFinding> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let matches = scan_matches(text, self.lexicon, self.config.adjacency_scope);
        let occurrences = matches.len();
        let findings = rank_matches(matches);

        debug!(
            text_len = text.len(),
            occurrences,
            symptoms = findings.len(),
            scope = ?self.config.adjacency_scope,
            "Analyzed transcript for symptoms"
        );
        findings
    }

    /// Render findings using this analyzer's thresholds.
    pub fn format_report(&self, results: &[SymptomFinding]) -> String {
        report::render(results, &self.config)
    }
}

impl Default for SymptomAnalyzer<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}
