//! Collapse keyword occurrences to one finding per canonical symptom.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::matcher::MatchRecord;

/// A detected symptom, as shown to the clinician for review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomFinding {
    pub symptom: String,
    pub context: String,
    pub confidence: f64,
}

impl From<MatchRecord> for SymptomFinding {
    fn from(m: MatchRecord) -> Self {
        Self {
            symptom: m.symptom,
            context: m.context,
            confidence: m.confidence,
        }
    }
}

/// Keep the highest-confidence record per symptom, sorted by confidence.
///
/// On equal confidence the first record wins, and the descending sort is
/// stable, so ties keep first-seen order.
pub fn rank_matches(records: Vec<MatchRecord>) -> Vec<SymptomFinding> {
    let mut best: Vec<SymptomFinding> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        match index.get(&record.symptom) {
            Some(&i) => {
                if record.confidence > best[i].confidence {
                    best[i] = record.into();
                }
            }
            None => {
                index.insert(record.symptom.clone(), best.len());
                best.push(record.into());
            }
        }
    }

    best.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    best
}
