//! Role suggestion - maps an intent to downstream specialist identifiers

use crate::types::IntentClass;

/// Suggest role hints for an intent
///
/// Total over the enumeration; currently every intent maps to exactly one
/// hint, but the contract stays a list.
pub fn suggest_roles(intent: IntentClass) -> Vec<String> {
    let hints: &[&str] = match intent {
        IntentClass::Review => &["eng.code-review"],
        IntentClass::Spec => &["pm.growth"],
        IntentClass::Deploy => &["ops.deploy"],
        IntentClass::Code => &["eng.implement"],
        IntentClass::Chat => &["pm.growth"],
    };
    hints.iter().map(|hint| hint.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_table() {
        assert_eq!(suggest_roles(IntentClass::Review), vec!["eng.code-review"]);
        assert_eq!(suggest_roles(IntentClass::Spec), vec!["pm.growth"]);
        assert_eq!(suggest_roles(IntentClass::Deploy), vec!["ops.deploy"]);
        assert_eq!(suggest_roles(IntentClass::Code), vec!["eng.implement"]);
        assert_eq!(suggest_roles(IntentClass::Chat), vec!["pm.growth"]);
    }
}
