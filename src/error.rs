//! Errors for the fallible construction paths (custom lexicons, config).
//!
//! Analysis and report formatting never fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymptomError {
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Symptom entry #{index} has an empty name")]
    EmptySymptomName { index: usize },

    #[error("Symptom '{symptom}' has an empty keyword variant")]
    EmptyKeyword { symptom: String },

    #[error("Classifier list '{list}' contains an empty word")]
    EmptyClassifierWord { list: &'static str },

    #[error("Classifier word '{word}' in '{list}' folds to fewer than two letters")]
    ShortClassifierWord { list: &'static str, word: String },

    #[error("Symptom '{0}' is defined more than once")]
    DuplicateSymptom(String),

    #[error("Invalid threshold '{name}': {value} is outside [0, 1]")]
    InvalidThreshold { name: &'static str, value: f64 },
}

pub type SymptomResult<T> = Result<T, SymptomError>;
