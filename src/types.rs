//! Core data types for short prompt generation

use serde::{Deserialize, Serialize};

/// Coarse category of user goal driving prompt phrasing and role selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentClass {
    Code,
    Spec,
    Review,
    Deploy,
    Chat,
}

impl IntentClass {
    pub fn as_str(self) -> &'static str {
        match self {
            IntentClass::Code => "code",
            IntentClass::Spec => "spec",
            IntentClass::Review => "review",
            IntentClass::Deploy => "deploy",
            IntentClass::Chat => "chat",
        }
    }
}

/// Optional caller context, carried through the contract but not consulted
/// by any transformation. Reserved for future use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

/// Input contract for short prompt generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortPromptInput {
    pub input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<RequestContext>,
}

impl ShortPromptInput {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            context: None,
        }
    }

    pub fn with_context(input: impl Into<String>, context: RequestContext) -> Self {
        Self {
            input: input.into(),
            context: Some(context),
        }
    }
}

/// Classification metadata attached to a generated prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptMeta {
    pub intent: IntentClass,
    pub entities: Vec<String>,
}

/// Output contract for short prompt generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortPromptResult {
    pub short_prompt: String,
    pub role_hints: Vec<String>,
    pub meta: PromptMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_serializes_lowercase() {
        let json = serde_json::to_string(&IntentClass::Review).unwrap();
        assert_eq!(json, "\"review\"");
    }

    #[test]
    fn test_input_accepts_missing_context() {
        let params: ShortPromptInput = serde_json::from_str(r#"{"input":"hello"}"#).unwrap();
        assert_eq!(params.input, "hello");
        assert!(params.context.is_none());
    }

    #[test]
    fn test_input_carries_context_fields() {
        let params: ShortPromptInput =
            serde_json::from_str(r#"{"input":"hello","context":{"project":"codimir","repo":"sdk"}}"#)
                .unwrap();
        let context = params.context.unwrap();
        assert_eq!(context.project.as_deref(), Some("codimir"));
        assert_eq!(context.repo.as_deref(), Some("sdk"));
    }

    #[test]
    fn test_result_uses_camel_case_wire_names() {
        let result = ShortPromptResult {
            short_prompt: "hi".to_string(),
            role_hints: vec!["pm.growth".to_string()],
            meta: PromptMeta {
                intent: IntentClass::Chat,
                entities: Vec::new(),
            },
        };
        let json: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert_eq!(json["shortPrompt"], "hi");
        assert_eq!(json["roleHints"][0], "pm.growth");
        assert_eq!(json["meta"]["intent"], "chat");
    }
}
