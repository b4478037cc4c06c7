//! Document review orchestration

use crate::analysis::Analysis;
use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, ReviewError};
use crate::fallback;
use crate::parser::parse_llm_response;
use crate::prompt::PromptBuilder;
use rfi_domain::traits::{LlmProvider, TextExtractor};
use rfi_domain::{AnalysisMode, DocumentResult};
use std::path::Path;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Classification strategy, selected once at Reviewer construction
pub enum Strategy<L>
where
    L: LlmProvider,
{
    /// Classify with the given LLM provider, falling back to the
    /// keyword heuristic on any failure
    Ai(Arc<L>),

    /// Keyword heuristic only
    Heuristic,
}

/// The Reviewer turns a document path into a [`DocumentResult`]
///
/// Extraction failures are the only hard per-document error; every
/// classification failure is recovered by the heuristic fallback.
pub struct Reviewer<E, L>
where
    E: TextExtractor,
    L: LlmProvider,
{
    extractor: E,
    strategy: Strategy<L>,
    config: AnalyzerConfig,
}

impl<E, L> Reviewer<E, L>
where
    E: TextExtractor,
    E::Error: std::fmt::Display,
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new Reviewer
    pub fn new(extractor: E, strategy: Strategy<L>, config: AnalyzerConfig) -> Self {
        Self {
            extractor,
            strategy,
            config,
        }
    }

    /// Review a single document
    ///
    /// Fails with [`ReviewError::Extraction`] when the file cannot be
    /// opened or parsed. A document that parses to an empty text body is
    /// a valid, if uninteresting, result.
    pub async fn review(&self, path: &Path) -> Result<DocumentResult, ReviewError> {
        let source = path.display().to_string();
        info!("Reviewing {}", source);

        let text = self
            .extractor
            .extract(path)
            .map_err(|e| ReviewError::Extraction(e.to_string()))?;

        if text.trim().is_empty() {
            debug!("{} has no extractable text, recording empty result", source);
            return Ok(DocumentResult::new(
                source,
                Vec::new(),
                Vec::new(),
                "No text content found in document.",
                AnalysisMode::Heuristic,
            ));
        }

        let (analysis, mode) = match &self.strategy {
            Strategy::Heuristic => (
                fallback::analyze(&text, &self.config),
                AnalysisMode::Heuristic,
            ),
            Strategy::Ai(provider) => match self.classify_with_ai(provider, &text).await {
                Ok(analysis) => (analysis, AnalysisMode::Ai),
                Err(e) => {
                    warn!("AI classification failed for {}: {}, using fallback", source, e);
                    (
                        fallback::analyze(&text, &self.config),
                        AnalysisMode::Heuristic,
                    )
                }
            },
        };

        info!(
            "Finished {}: {} themes, {} actions ({})",
            source,
            analysis.themes.len(),
            analysis.actions.len(),
            mode.as_str()
        );

        Ok(DocumentResult::new(
            source,
            analysis.themes,
            analysis.actions,
            analysis.summary,
            mode,
        ))
    }

    /// Classify text via the LLM, bounded by the configured timeout
    async fn classify_with_ai(&self, provider: &Arc<L>, text: &str) -> Result<Analysis, AnalyzerError> {
        let prompt = PromptBuilder::new(text)
            .with_max_text_len(self.config.max_prompt_text_len)
            .build();

        debug!("Prompt length: {} chars", prompt.len());

        let response = timeout(self.config.llm_timeout(), call_llm(provider, prompt))
            .await
            .map_err(|_| AnalyzerError::Timeout)??;

        debug!("LLM response length: {} chars", response.len());

        parse_llm_response(&response)
    }
}

/// Call the LLM provider on a blocking thread
async fn call_llm<L>(provider: &Arc<L>, prompt: String) -> Result<String, AnalyzerError>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let llm = Arc::clone(provider);

    // The LlmProvider trait is not async; run it off the reactor
    tokio::task::spawn_blocking(move || {
        llm.generate(&prompt)
            .map_err(|e| AnalyzerError::Llm(e.to_string()))
    })
    .await
    .map_err(|e| AnalyzerError::Llm(format!("Task join error: {}", e)))?
}
