//! SPG core - short prompt generation for the Codimir fabric
//!
//! Converts noisy typed/voice input into a compact, role-aware prompt:
//! normalize wake words, classify intent, extract entity tags, suggest
//! roles, and synthesize the final prompt string. Fast and deterministic;
//! heavier NLP belongs in the fabric.

pub mod classify;
pub mod entities;
pub mod normalize;
pub mod roles;
pub mod synthesize;
pub mod types;

pub use classify::*;
pub use entities::*;
pub use normalize::*;
pub use roles::*;
pub use synthesize::*;
pub use types::*;

use std::sync::OnceLock;

/// The full generation pipeline with its patterns compiled once
pub struct ShortPromptGenerator {
    normalizer: Normalizer,
    classifier: IntentClassifier,
    extractor: EntityExtractor,
}

impl ShortPromptGenerator {
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
            classifier: IntentClassifier::new(),
            extractor: EntityExtractor::new(),
        }
    }

    /// Derive a compact, high-signal prompt with role hints
    ///
    /// Total over all inputs: any string, including empty, produces a
    /// result. `context` is carried for forward compatibility and not read
    /// by any stage.
    pub fn generate(&self, params: &ShortPromptInput) -> ShortPromptResult {
        let normalized = self.normalizer.normalize(&params.input);
        let intent = self.classifier.classify(&normalized);
        let entities = self.extractor.extract(&normalized);
        let role_hints = suggest_roles(intent);
        let short_prompt = synthesize(&normalized, intent, &entities);

        ShortPromptResult {
            short_prompt,
            role_hints,
            meta: PromptMeta { intent, entities },
        }
    }
}

impl Default for ShortPromptGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience entry point over a process-wide generator, so casual callers
/// pay regex compilation once
pub fn short_prompt(params: &ShortPromptInput) -> ShortPromptResult {
    static GENERATOR: OnceLock<ShortPromptGenerator> = OnceLock::new();
    GENERATOR.get_or_init(ShortPromptGenerator::new).generate(params)
}

// Python bindings
#[cfg(feature = "extension-module")]
pub mod py;

#[cfg(feature = "extension-module")]
use pyo3::prelude::*;

#[cfg(feature = "extension-module")]
#[pymodule]
fn spg_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use py::*;
    m.add_class::<PyShortPromptGenerator>()?;
    m.add_function(wrap_pyfunction!(py_short_prompt, m)?)?;
    Ok(())
}
