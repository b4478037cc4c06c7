//! LLM prompt engineering for document classification

/// Builds the classification prompt for a document
pub struct PromptBuilder {
    text: String,
    max_text_len: usize,
}

impl PromptBuilder {
    /// Create a new prompt builder for the given document text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_text_len: 8_000,
        }
    }

    /// Bound the amount of document text included in the prompt
    pub fn with_max_text_len(mut self, max_text_len: usize) -> Self {
        self.max_text_len = max_text_len;
        self
    }

    /// Build the complete classification prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(ANALYSIS_INSTRUCTIONS);
        prompt.push_str("\n\n");

        prompt.push_str("RFI Response Text:\n");
        prompt.push_str(&truncate_chars(&self.text, self.max_text_len));
        prompt.push_str("\n\n");

        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

/// Truncate a string to at most `max` characters on a char boundary
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

const ANALYSIS_INSTRUCTIONS: &str = r#"Analyze the following RFI (Request for Information) response and provide:
1. Main themes and categories (list the key topics covered)
2. Specific actions mentioned (what needs to be done)
3. Timeframes for each action (when things should be completed)

Format your response as JSON with this structure:
{
    "themes": ["theme1", "theme2", ...],
    "actions": [
        {
            "action": "description of action",
            "timeframe": "expected timeframe",
            "priority": "high/medium/low",
            "category": "relevant theme"
        }
    ],
    "summary": "brief summary of the RFI response"
}"#;

const OUTPUT_FORMAT_REMINDER: &str =
    "Return ONLY the JSON object, no markdown code blocks, no explanations.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_text() {
        let prompt = PromptBuilder::new("Vendor will deliver a migration plan.").build();
        assert!(prompt.contains("Vendor will deliver a migration plan."));
    }

    #[test]
    fn test_prompt_includes_schema() {
        let prompt = PromptBuilder::new("text").build();
        assert!(prompt.contains("\"themes\""));
        assert!(prompt.contains("\"timeframe\""));
        assert!(prompt.contains("high/medium/low"));
    }

    #[test]
    fn test_prompt_truncates_long_text() {
        let long_text = "x".repeat(20_000);
        let prompt = PromptBuilder::new(long_text)
            .with_max_text_len(100)
            .build();
        // 100 chars of document text plus the fixed template
        assert!(prompt.len() < 2_000);
        assert!(prompt.contains(&"x".repeat(100)));
        assert!(!prompt.contains(&"x".repeat(101)));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "日本語のテキスト";
        let truncated = truncate_chars(text, 3);
        assert_eq!(truncated, "日本語");
    }
}
