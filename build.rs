//! Generates the built-in lexicon tables from `config/symptom_lexicon.toml`.
//!
//! A malformed lexicon fails the build instead of the first analysis call.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const LEXICON_PATH: &str = "config/symptom_lexicon.toml";

/// Classifier words need this many letters once accents are stripped.
const MIN_CLASSIFIER_LETTERS: usize = 2;

fn string_list(value: Option<&toml::Value>, what: &str) -> Vec<String> {
    let items = value
        .and_then(|v| v.as_array())
        .unwrap_or_else(|| panic!("{LEXICON_PATH}: `{what}` must be an array of strings"));

    items
        .iter()
        .map(|item| {
            let s = item
                .as_str()
                .unwrap_or_else(|| panic!("{LEXICON_PATH}: `{what}` contains a non-string"));
            if s.trim().is_empty() {
                panic!("{LEXICON_PATH}: `{what}` contains an empty keyword");
            }
            s.to_string()
        })
        .collect()
}

/// Combining marks are not alphanumeric, so decomposed accents don't count.
fn classifier_list(value: Option<&toml::Value>, what: &str) -> Vec<String> {
    let words = string_list(value, what);
    for w in &words {
        if w.chars().filter(|c| c.is_alphanumeric()).count() < MIN_CLASSIFIER_LETTERS {
            panic!("{LEXICON_PATH}: `{what}` word {w:?} is shorter than {MIN_CLASSIFIER_LETTERS} letters");
        }
    }
    words
}

fn write_word_list(out: &mut String, ident: &str, words: &[String]) {
    writeln!(out, "pub(crate) static {ident}: &[&str] = &[").unwrap();
    for w in words {
        writeln!(out, "    {w:?},").unwrap();
    }
    writeln!(out, "];\n").unwrap();
}

fn main() {
    println!("cargo:rerun-if-changed={LEXICON_PATH}");
    println!("cargo:rerun-if-changed=build.rs");

    let src = fs::read_to_string(LEXICON_PATH)
        .unwrap_or_else(|e| panic!("failed to read {LEXICON_PATH}: {e}"));
    let table: toml::Table = src
        .parse()
        .unwrap_or_else(|e| panic!("failed to parse {LEXICON_PATH}: {e}"));

    let classifiers = table
        .get("classifiers")
        .and_then(|v| v.as_table())
        .unwrap_or_else(|| panic!("{LEXICON_PATH}: missing [classifiers] table"));

    let mut out = String::from("// @generated by build.rs from config/symptom_lexicon.toml\n\n");

    write_word_list(
        &mut out,
        "BUILTIN_LOCATION_MARKERS",
        &classifier_list(classifiers.get("location"), "classifiers.location"),
    );
    write_word_list(
        &mut out,
        "BUILTIN_QUALIFIERS",
        &classifier_list(classifiers.get("qualifiers"), "classifiers.qualifiers"),
    );
    write_word_list(
        &mut out,
        "BUILTIN_TIMING_TERMS",
        &classifier_list(classifiers.get("timing"), "classifiers.timing"),
    );

    let symptoms = table
        .get("symptom")
        .and_then(|v| v.as_array())
        .unwrap_or_else(|| panic!("{LEXICON_PATH}: missing [[symptom]] entries"));

    let mut seen = HashSet::new();
    writeln!(out, "pub(crate) static BUILTIN_SYMPTOMS: &[(&str, &[&str])] = &[").unwrap();
    for entry in symptoms {
        let name = entry
            .get("name")
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| panic!("{LEXICON_PATH}: symptom entry without a name"));
        if !seen.insert(name) {
            panic!("{LEXICON_PATH}: symptom {name:?} is defined more than once");
        }
        let variants = string_list(entry.get("variants"), &format!("{name}.variants"));
        write!(out, "    ({name:?}, &[").unwrap();
        for v in &variants {
            write!(out, "{v:?}, ").unwrap();
        }
        writeln!(out, "]),").unwrap();
    }
    writeln!(out, "];").unwrap();

    let dest = Path::new(&env::var("OUT_DIR").unwrap()).join("lexicon_data.rs");
    fs::write(&dest, out).unwrap_or_else(|e| panic!("failed to write {}: {e}", dest.display()));
}
