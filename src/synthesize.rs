//! Prompt synthesis - truncation, entity suffix, and intent prefixes

use crate::types::IntentClass;

/// Maximum length of the prompt body in characters
pub const MAX_PROMPT_CHARS: usize = 280;

const ELLIPSIS: &str = "...";

/// Build the final compact prompt from the normalized text, intent, and
/// extracted entities
pub fn synthesize(normalized: &str, intent: IntentClass, entities: &[String]) -> String {
    let base = truncate(normalized);

    let suffix = if entities.is_empty() {
        String::new()
    } else {
        format!(" ({})", entities.join(", "))
    };

    let prefix = match intent {
        IntentClass::Review => "Review for correctness, security, and performance: ",
        IntentClass::Spec => "Draft a concise spec with acceptance criteria: ",
        IntentClass::Deploy => "Prepare deployment plan with checks: ",
        IntentClass::Code => "Implement change with tests: ",
        IntentClass::Chat => "",
    };

    format!("{prefix}{base}{suffix}")
}

/// Keep at most `MAX_PROMPT_CHARS` characters, replacing the tail with an
/// ellipsis when over the limit so the result is exactly the limit
fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_PROMPT_CHARS {
        return text.to_string();
    }
    let kept: String = text.chars().take(MAX_PROMPT_CHARS - ELLIPSIS.len()).collect();
    format!("{kept}{ELLIPSIS}")
}
