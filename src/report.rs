//! Render findings as the "Sintomatologia" block of a medical report.

use crate::config::AnalyzerConfig;
use crate::context::{capitalize_first, extract_relevant_context};
use crate::ranking::SymptomFinding;

pub const REPORT_HEADER: &str = "Sintomatologia:\n";

/// Appended to every non-empty report.
pub const CONSENT_TRAILER: &str = "\n(Informação recolhida por reconhecimento de voz, \
     com consentimento do utente, nos termos do RGPD.)\n";

/// Render the findings above the default report threshold.
///
/// Findings are listed in the order given. Returns an empty string when
/// none qualify.
pub fn format_symptoms_report(results: &[SymptomFinding]) -> String {
    render(results, &AnalyzerConfig::default())
}

pub(crate) fn render(results: &[SymptomFinding], config: &AnalyzerConfig) -> String {
    let mut reported = results
        .iter()
        .filter(|f| f.confidence > config.report_threshold)
        .peekable();

    if reported.peek().is_none() {
        return String::new();
    }

    let mut out = String::from(REPORT_HEADER);
    for finding in reported {
        out.push_str("- ");
        out.push_str(&capitalize_first(&finding.symptom));

        let relevant = extract_relevant_context(&finding.context, &finding.symptom);
        if !relevant.is_empty() {
            out.push_str(": ");
            out.push_str(&relevant);
        }

        if finding.confidence < config.certainty_threshold {
            let pct = (finding.confidence * 100.0).round() as u32;
            out.push_str(&format!(" ({pct}% de confiança)"));
        }
        out.push('\n');
    }
    out.push_str(CONSENT_TRAILER);
    out
}
