//! Analyzer configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! adjacency_scope = "sentence"   # or "whole_text" (default)
//! report_threshold = 0.5
//! certainty_threshold = 0.9
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{SymptomError, SymptomResult};

/// Base confidence of every keyword occurrence.
pub const BASE_CONFIDENCE: f64 = 0.5;
/// Bonus for `keyword + location marker`.
pub const LOCATION_BONUS: f64 = 0.15;
/// Bonus for a qualifier on either side of the keyword.
pub const QUALIFIER_BONUS: f64 = 0.20;
/// Bonus for a timing term on either side of the keyword.
pub const TIMING_BONUS: f64 = 0.15;

/// Where classifier adjacency is looked for when scoring an occurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyScope {
    /// Anywhere in the transcript. A keyword qualified in one sentence
    /// boosts every occurrence of that keyword.
    #[default]
    WholeText,
    /// Only within the sentence of the occurrence being scored.
    Sentence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    pub adjacency_scope: AdjacencyScope,
    /// Findings at or below this confidence are left out of the report.
    pub report_threshold: f64,
    /// Findings at or above this confidence are reported without a
    /// percentage annotation.
    pub certainty_threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            adjacency_scope: AdjacencyScope::WholeText,
            report_threshold: 0.5,
            certainty_threshold: 0.9,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_toml_str(src: &str) -> SymptomResult<Self> {
        let config: Self = toml::from_str(src)?;
        config
            .validate()
            .inspect_err(|e| warn!(error = %e, "Rejected analyzer config"))?;
        Ok(config)
    }

    pub fn validate(&self) -> SymptomResult<()> {
        for (name, value) in [
            ("report_threshold", self.report_threshold),
            ("certainty_threshold", self.certainty_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SymptomError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }
}
