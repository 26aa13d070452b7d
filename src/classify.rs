//! Intent classification - ordered vocabulary matching against user input

use crate::types::IntentClass;
use regex::Regex;

/// Classifies normalized input into a coarse intent category
///
/// Vocabularies are tested in priority order and the first match wins, so
/// input containing both review and code words resolves to `Review`.
pub struct IntentClassifier {
    vocabularies: Vec<(Regex, IntentClass)>,
}

impl IntentClassifier {
    pub fn new() -> Self {
        // Compile regex patterns once - these should never fail
        // Priority order is significant.
        let vocabularies = vec![
            (
                Regex::new(r"\b(review|pr|diff|lint|refactor)\b").expect("Invalid regex pattern"),
                IntentClass::Review,
            ),
            (
                Regex::new(r"\b(spec|design|acceptance|requirements|doc)\b")
                    .expect("Invalid regex pattern"),
                IntentClass::Spec,
            ),
            (
                Regex::new(r"\b(deploy|release|publish)\b").expect("Invalid regex pattern"),
                IntentClass::Deploy,
            ),
            (
                Regex::new(r"\b(fix|implement|add|create|update|remove|build)\b")
                    .expect("Invalid regex pattern"),
                IntentClass::Code,
            ),
        ];

        Self { vocabularies }
    }

    /// Classify input, falling back to `Chat` when no vocabulary matches
    pub fn classify(&self, text: &str) -> IntentClass {
        let lower = text.to_lowercase();
        for (vocabulary, intent) in &self.vocabularies {
            if vocabulary.is_match(&lower) {
                return *intent;
            }
        }
        IntentClass::Chat
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}
