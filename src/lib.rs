//! Symptom extraction for voice-captured medical report transcripts.
//!
//! Pipeline:
//! 1. Folding (lower-case, accents stripped, offsets kept)
//! 2. Keyword scanning with classifier-adjacency confidence
//! 3. Deduplication to one finding per canonical symptom
//! 4. Context shortening and "Sintomatologia" report rendering
//!
//! ```
//! let findings = symptom_core::analyze_symptoms("Paciente com febre e tosse seca.");
//! let report = symptom_core::format_symptoms_report(&findings);
//! assert!(report.starts_with("Sintomatologia:"));
//! ```

mod analyzer;
pub mod config;
mod context;
mod error;
pub mod lexicon;
pub mod matcher;
pub mod normalize;
mod ranking;
mod report;

#[cfg(feature = "python")]
mod python;

pub use analyzer::{analyze_symptoms, SymptomAnalyzer};
pub use config::{AdjacencyScope, AnalyzerConfig};
pub use context::extract_relevant_context;
pub use error::{SymptomError, SymptomResult};
pub use lexicon::{ContextClassifiers, Lexicon, LexiconEntry};
pub use matcher::MatchRecord;
pub use ranking::{rank_matches, SymptomFinding};
pub use report::{format_symptoms_report, CONSENT_TRAILER, REPORT_HEADER};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Symptom Core — native symptom extraction for report authoring.
#[cfg(feature = "python")]
#[pymodule]
fn symptom_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::analyze_symptoms, m)?)?;
    m.add_function(wrap_pyfunction!(python::format_symptoms_report, m)?)?;
    m.add_function(wrap_pyfunction!(python::extract_relevant_context, m)?)?;
    Ok(())
}
