//! Python bindings for the report-authoring front end.
//!
//! Findings cross the boundary as plain dicts with `symptom`, `context`
//! and `confidence` keys.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList, PyString};

use crate::ranking::SymptomFinding;

fn finding_to_dict<'py>(py: Python<'py>, finding: &SymptomFinding) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("symptom", &finding.symptom)?;
    dict.set_item("context", &finding.context)?;
    dict.set_item("confidence", finding.confidence)?;
    Ok(dict)
}

fn required<'py>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<Bound<'py, PyAny>> {
    dict.get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("finding is missing '{key}'")))
}

fn finding_from_dict(dict: &Bound<'_, PyDict>) -> PyResult<SymptomFinding> {
    Ok(SymptomFinding {
        symptom: required(dict, "symptom")?.extract()?,
        context: required(dict, "context")?.extract()?,
        confidence: required(dict, "confidence")?.extract()?,
    })
}

/// Detect symptom mentions in a transcript.
///
/// Parameters
/// ----------
/// text : str
///     Final speech-to-text transcript. Anything that is not a str
///     (including None) yields an empty list.
///
/// Returns
/// -------
/// list[dict]
///     One dict per canonical symptom, sorted by descending confidence.
#[pyfunction]
#[pyo3(signature = (text=None))]
pub fn analyze_symptoms(py: Python<'_>, text: Option<&Bound<'_, PyAny>>) -> PyResult<Py<PyList>> {
    let findings = match text.and_then(|t| t.downcast::<PyString>().ok()) {
        Some(s) => crate::analyze_symptoms(&s.to_cow()?),
        None => Vec::new(),
    };

    let list = PyList::empty_bound(py);
    for finding in &findings {
        list.append(finding_to_dict(py, finding)?)?;
    }
    Ok(list.unbind())
}

/// Render findings as the "Sintomatologia" report block.
///
/// Only findings with confidence above 0.5 are rendered; returns an empty
/// string when none qualify. Raises ValueError on a dict missing a key.
#[pyfunction]
pub fn format_symptoms_report(results: Vec<Bound<'_, PyDict>>) -> PyResult<String> {
    let findings = results
        .iter()
        .map(finding_from_dict)
        .collect::<PyResult<Vec<_>>>()?;
    Ok(crate::format_symptoms_report(&findings))
}

/// Shorten a finding's context to the phrase shown beside the symptom.
#[pyfunction]
pub fn extract_relevant_context(context: &str, symptom: &str) -> String {
    crate::extract_relevant_context(context, symptom)
}
