//! Priority module - urgency levels for extracted actions

use serde::{Deserialize, Serialize};

/// Priority of an extracted action
///
/// Every action carries exactly one of these three levels. Sources that
/// report an unknown or missing priority are normalized to `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Requires immediate attention
    High,

    /// Default level for routine commitments
    Medium,

    /// Informational or long-horizon items
    Low,
}

impl Priority {
    /// Get the priority name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Parse a priority from a string, normalizing unknown values to Medium
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(Priority::parse("high"), Priority::High);
        assert_eq!(Priority::parse("Medium"), Priority::Medium);
        assert_eq!(Priority::parse("LOW"), Priority::Low);
    }

    #[test]
    fn test_parse_unknown_defaults_to_medium() {
        assert_eq!(Priority::parse("severe"), Priority::Medium);
        assert_eq!(Priority::parse(""), Priority::Medium);
        assert_eq!(Priority::parse("  high/medium  "), Priority::Medium);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");

        let parsed: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, Priority::Low);
    }
}
