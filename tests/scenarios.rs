//! End-to-end transcript scenarios against the built-in lexicon.

use symptom_core::{
    analyze_symptoms, format_symptoms_report, AdjacencyScope, AnalyzerConfig, SymptomAnalyzer,
    SymptomFinding, CONSENT_TRAILER, REPORT_HEADER,
};

fn find<'a>(findings: &'a [SymptomFinding], symptom: &str) -> Option<&'a SymptomFinding> {
    findings.iter().find(|f| f.symptom == symptom)
}

#[test]
fn test_headache_with_qualifier_and_timing() {
    let r = analyze_symptoms("Tenho dor de cabeça forte há dois dias.");
    let headache = find(&r, "dor de cabeça").expect("dor de cabeça detected");
    // "forte" follows the keyword; "há" does not touch it.
    assert!((headache.confidence - 0.7).abs() < 1e-9);
    assert_eq!(headache.context, "Tenho dor de cabeça forte há dois dias");
    // The generic entry matches the same span.
    assert!(find(&r, "dor").is_some());
}

#[test]
fn test_qualifier_starting_with_a_gets_no_location_bonus() {
    let cases = [
        ("Febre alta.", "febre", 0.7),
        ("Tosse abundante.", "tosse", 0.5),
        ("Dor aguda.", "dor", 0.7),
    ];
    for (text, symptom, expected) in cases {
        let r = analyze_symptoms(text);
        let f = find(&r, symptom).unwrap();
        assert!(
            (f.confidence - expected).abs() < 1e-9,
            "{text}: {} != {expected}",
            f.confidence
        );
    }
}

#[test]
fn test_no_symptoms() {
    let r = analyze_symptoms("Sem sintomas relevantes.");
    assert!(r.is_empty());
    assert_eq!(format_symptoms_report(&r), "");
}

#[test]
fn test_repeated_symptom_keeps_highest() {
    let text = "Tosse ligeira de manhã. À noite tosse seca persistente.";

    let sentence = SymptomAnalyzer::with_config(AnalyzerConfig {
        adjacency_scope: AdjacencyScope::Sentence,
        ..AnalyzerConfig::default()
    })
    .unwrap();
    let r = sentence.analyze(text);
    assert_eq!(r.len(), 1);
    assert_eq!(r[0].symptom, "tosse");
    assert!((r[0].confidence - 0.85).abs() < 1e-9);
    assert_eq!(r[0].context, "À noite tosse seca persistente");

    // Whole-text scoring gives both occurrences the same score; the first wins.
    let r = analyze_symptoms(text);
    assert_eq!(r.len(), 1);
    assert!((r[0].confidence - 0.85).abs() < 1e-9);
    assert_eq!(r[0].context, "Tosse ligeira de manhã");
}

#[test]
fn test_fever_cough_nausea() {
    let r = analyze_symptoms("Paciente com febre e tosse seca, nota-se também náusea leve.");
    let names: Vec<_> = r.iter().map(|f| f.symptom.as_str()).collect();
    assert_eq!(names, ["tosse", "náusea", "febre"]);

    assert!((find(&r, "náusea").unwrap().confidence - 0.7).abs() < 1e-9);
    assert_eq!(find(&r, "febre").unwrap().confidence, 0.5);
}

#[test]
fn test_report_percentage_rules() {
    let certain = [SymptomFinding {
        symptom: "febre".into(),
        context: "Febre alta desde ontem".into(),
        confidence: 0.95,
    }];
    let out = format_symptoms_report(&certain);
    assert!(out.contains("- Febre: Alta desde ontem\n"));
    assert!(!out.contains('%'));

    let hedged = [SymptomFinding {
        confidence: 0.65,
        ..certain[0].clone()
    }];
    assert!(format_symptoms_report(&hedged).contains("(65% de confiança)"));
}

#[test]
fn test_full_report() {
    let r = analyze_symptoms("Refere dor no peito intensa desde ontem. Nega febre.");
    let expected = format!(
        "{REPORT_HEADER}\
         - Dor torácica (70% de confiança)\n\
         - Dor: Refere no peito intensa desde ontem (65% de confiança)\n\
         {CONSENT_TRAILER}"
    );
    assert_eq!(format_symptoms_report(&r), expected);
}

#[test]
fn test_accents_missing_from_transcript() {
    let r = analyze_symptoms("Nausea e vomitos desde ontem.");
    assert!(find(&r, "náusea").is_some());
    let vomit = find(&r, "vómito").unwrap();
    assert_eq!(vomit.context, "Nausea e vomitos desde ontem");
    assert!((vomit.confidence - 0.65).abs() < 1e-9);
}

#[test]
fn test_findings_serialize_for_review_ui() {
    let r = analyze_symptoms("Tem febre.");
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "symptom": "febre", "context": "Tem febre", "confidence": 0.5 }])
    );
}
