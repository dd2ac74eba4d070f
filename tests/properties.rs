//! Property tests over generated transcripts and findings.

use std::collections::HashSet;

use proptest::prelude::*;
use symptom_core::{
    analyze_symptoms, format_symptoms_report, AdjacencyScope, AnalyzerConfig, SymptomAnalyzer,
    SymptomFinding,
};

const WORDS: &[&str] = &[
    "dor", "de", "cabeça", "febre", "tosse", "seca", "náusea", "leve", "forte", "há", "dois",
    "dias", "no", "peito", "ontem", "Paciente", "refere", "nega", "enjoos", "FEBRIL", "tonturas",
    "muito", "e", "com", "sem", ".", ",", "à", "noite",
];

fn transcript() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..40).prop_map(|w| w.join(" "))
}

fn finding() -> impl Strategy<Value = SymptomFinding> {
    (prop::sample::select(WORDS), transcript(), 0.0f64..=1.0).prop_map(
        |(symptom, context, confidence)| SymptomFinding {
            symptom: symptom.to_string(),
            context,
            confidence,
        },
    )
}

fn check_invariants(findings: &[SymptomFinding]) -> Result<(), TestCaseError> {
    let mut seen = HashSet::new();
    for f in findings {
        prop_assert!((0.0..=1.0).contains(&f.confidence));
        prop_assert!(seen.insert(f.symptom.clone()), "duplicate {}", f.symptom);
    }
    for pair in findings.windows(2) {
        prop_assert!(pair[0].confidence >= pair[1].confidence);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_vocabulary_transcripts_hold_invariants(text in transcript()) {
        check_invariants(&analyze_symptoms(&text))?;
    }

    #[test]
    fn prop_sentence_scope_holds_invariants(text in transcript()) {
        let analyzer = SymptomAnalyzer::with_config(AnalyzerConfig {
            adjacency_scope: AdjacencyScope::Sentence,
            ..AnalyzerConfig::default()
        })
        .unwrap();
        check_invariants(&analyzer.analyze(&text))?;
    }

    #[test]
    fn prop_arbitrary_text_never_panics(text in ".*") {
        check_invariants(&analyze_symptoms(&text))?;
    }

    #[test]
    fn prop_context_comes_from_transcript(text in transcript()) {
        for f in analyze_symptoms(&text) {
            prop_assert!(text.contains(f.context.as_str()));
        }
    }

    #[test]
    fn prop_prefiltering_is_idempotent(findings in prop::collection::vec(finding(), 0..8)) {
        let filtered: Vec<_> = findings.iter().filter(|f| f.confidence > 0.5).cloned().collect();
        prop_assert_eq!(format_symptoms_report(&findings), format_symptoms_report(&filtered));
    }

    #[test]
    fn prop_low_confidence_reports_empty(
        findings in prop::collection::vec(finding(), 0..8)
    ) {
        let low: Vec<_> = findings
            .into_iter()
            .map(|f| SymptomFinding { confidence: f.confidence.min(0.5), ..f })
            .collect();
        prop_assert_eq!(format_symptoms_report(&low), "");
    }
}
