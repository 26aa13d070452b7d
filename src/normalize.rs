//! Input normalization - wake-word stripping and whitespace trimming

use regex::Regex;

/// Strips leading wake-word prefixes ("Computer," / "Codimir:") from input
///
/// The "computer" pattern is checked first, then "codimir" against whatever
/// remains. Ordinary inputs only ever match one of the two.
pub struct Normalizer {
    wake_words: [Regex; 2],
}

impl Normalizer {
    pub fn new() -> Self {
        // Compile regex patterns once - these should never fail
        let wake_words = [
            Regex::new(r"(?i)^computer[,:\s]+").expect("Invalid regex pattern"),
            Regex::new(r"(?i)^codimir[,:\s]+").expect("Invalid regex pattern"),
        ];

        Self { wake_words }
    }

    /// Trim surrounding whitespace and strip a leading wake word
    pub fn normalize(&self, input: &str) -> String {
        let mut text = input.trim().to_string();
        for wake_word in &self.wake_words {
            text = wake_word.replace(&text, "").into_owned();
        }
        text
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
