//! Analysis provenance - how a document's results were derived

/// Provenance of a document analysis
///
/// Tracked internally so callers can tell AI-derived results apart from
/// keyword-heuristic ones; not part of the serialized report schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisMode {
    /// Results produced by the LLM classifier
    Ai,

    /// Results produced by the keyword-heuristic fallback
    Heuristic,
}

impl AnalysisMode {
    /// Get the mode name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Ai => "ai",
            AnalysisMode::Heuristic => "heuristic",
        }
    }
}

impl Default for AnalysisMode {
    fn default() -> Self {
        AnalysisMode::Heuristic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_heuristic() {
        assert_eq!(AnalysisMode::default(), AnalysisMode::Heuristic);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(AnalysisMode::Ai.as_str(), "ai");
        assert_eq!(AnalysisMode::Heuristic.as_str(), "heuristic");
    }
}
