//! Entity extraction from user input

use regex::Regex;

/// Extracts entity tags from normalized input
///
/// Identifies ticket references, filename-like tokens, and product-area
/// keywords. Each kind contributes at most one tag and output order is
/// fixed: ticket, filename, area.
pub struct EntityExtractor {
    ticket: Regex,
    filename: Regex,
    area: Regex,
}

impl EntityExtractor {
    pub fn new() -> Self {
        // Compile regex patterns once - these should never fail
        Self {
            // "PR 42", "pr#42", "PR#42" -> normalized "PR#42"
            ticket: Regex::new(r"(?i)\bpr\s*#?(\d+)\b").expect("Invalid regex pattern"),
            // Path-ish stem, a dot, then a short lowercase extension
            filename: Regex::new(r"\b([A-Za-z0-9_/-]+\.[a-z]{1,8})\b")
                .expect("Invalid regex pattern"),
            area: Regex::new(r"(?i)\b(dashboard|auth|billing|search|editor)\b")
                .expect("Invalid regex pattern"),
        }
    }

    /// Extract tags in fixed order, skipping kinds with no match
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut entities = Vec::new();

        if let Some(cap) = self.ticket.captures(text) {
            entities.push(format!("PR#{}", &cap[1]));
        }

        if let Some(cap) = self.filename.captures(text) {
            entities.push(cap[1].to_string());
        }

        // Area keeps the casing found in the input.
        if let Some(found) = self.area.find(text) {
            entities.push(found.as_str().to_string());
        }

        entities
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_ticket_reference() {
        let extractor = EntityExtractor::new();
        assert_eq!(extractor.extract("merge PR#42 today"), vec!["PR#42"]);
    }

    #[test]
    fn test_ticket_casing_and_spacing_normalized() {
        let extractor = EntityExtractor::new();
        assert_eq!(extractor.extract("see pr 42"), vec!["PR#42"]);
        assert_eq!(extractor.extract("see pr#42"), vec!["PR#42"]);
    }

    #[test]
    fn test_extract_filename() {
        let extractor = EntityExtractor::new();
        assert_eq!(extractor.extract("open src/app.ts please"), vec!["src/app.ts"]);
        assert_eq!(extractor.extract("check build-log.txt"), vec!["build-log.txt"]);
    }

    #[test]
    fn test_extract_area_keeps_input_casing() {
        let extractor = EntityExtractor::new();
        assert_eq!(extractor.extract("the Billing page is down"), vec!["Billing"]);
    }

    #[test]
    fn test_fixed_order_and_one_tag_per_kind() {
        let extractor = EntityExtractor::new();
        let entities = extractor.extract("please review PR#42 in auth.ts for the auth module");
        assert_eq!(entities, vec!["PR#42", "auth.ts", "auth"]);
    }

    #[test]
    fn test_first_match_wins_per_kind() {
        let extractor = EntityExtractor::new();
        let entities = extractor.extract("compare a.rs with b.rs and PR#1 with PR#2");
        assert_eq!(entities, vec!["PR#1", "a.rs"]);
    }

    #[test]
    fn test_no_matches_yields_empty() {
        let extractor = EntityExtractor::new();
        assert!(extractor.extract("hello there").is_empty());
        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn test_version_number_is_not_a_filename() {
        let extractor = EntityExtractor::new();
        // Extension must be lowercase letters, so "1.2" does not qualify.
        assert!(extractor.extract("upgrade to 1.2").is_empty());
    }
}
