//! Python bindings for the SPG core using PyO3

use crate::types::{RequestContext, ShortPromptInput};
use crate::{short_prompt, ShortPromptGenerator};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value)
        .map_err(|err| PyValueError::new_err(format!("Failed to serialize result: {err}")))
}

/// Generate a short prompt from raw input (Python function)
///
/// Returns the result serialized as a JSON string.
#[pyfunction]
pub fn py_short_prompt(input: &str) -> PyResult<String> {
    let result = short_prompt(&ShortPromptInput::new(input));
    to_json(&result)
}

/// Python wrapper for the short prompt generator
#[pyclass]
pub struct PyShortPromptGenerator {
    generator: ShortPromptGenerator,
}

#[pymethods]
impl PyShortPromptGenerator {
    #[new]
    fn new() -> Self {
        Self {
            generator: ShortPromptGenerator::new(),
        }
    }

    /// Generate a short prompt, returning the result as a JSON string
    ///
    /// `project` and `repo` are carried through to the contract's inert
    /// context field.
    #[pyo3(signature = (input, project=None, repo=None))]
    fn generate(
        &self,
        input: &str,
        project: Option<String>,
        repo: Option<String>,
    ) -> PyResult<String> {
        let context = if project.is_some() || repo.is_some() {
            Some(RequestContext { project, repo })
        } else {
            None
        };

        let params = ShortPromptInput {
            input: input.to_string(),
            context,
        };

        let result = self.generator.generate(&params);
        to_json(&result)
    }
}
