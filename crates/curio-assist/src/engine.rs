//! Extraction engine over a generation backend.
//!
//! The engine guarantees a usable result: the external path degrades to
//! the deterministic extractor whenever the backend is unconfigured or
//! fails, and extraction itself never returns an error.

use tracing::{debug, instrument, warn};

use curio_core::{ExtractionMode, ExtractionResult, GenerationBackend};
use curio_match::extract_suggestions;

use crate::anthropic::AnthropicBackend;
use crate::parse::parse_and_validate;
use crate::prompt::{build_system_prompt, build_user_prompt};

/// Listing attribute extraction engine.
pub struct ExtractionEngine<B: GenerationBackend> {
    backend: B,
}

impl ExtractionEngine<AnthropicBackend> {
    /// Create an engine backed by the Anthropic API, configured from
    /// environment variables.
    pub fn from_env() -> Self {
        Self::new(AnthropicBackend::from_env())
    }
}

impl<B: GenerationBackend> ExtractionEngine<B> {
    /// Create an engine over an existing backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Extract field suggestions from listing text.
    ///
    /// `prefill_description_from_text` copies the listing text into the
    /// description suggestion when no description was otherwise produced.
    #[instrument(skip(self, text), fields(subsystem = "assist", component = "engine", op = "extract", mode = %mode, text_len = text.len()))]
    pub async fn extract(
        &self,
        text: &str,
        prefill_description_from_text: bool,
        mode: ExtractionMode,
    ) -> ExtractionResult {
        let mut result = match mode {
            ExtractionMode::Local => ExtractionResult {
                suggestions: extract_suggestions(text),
                raw_model_response: None,
            },
            ExtractionMode::External => self.extract_external(text).await,
        };

        if prefill_description_from_text && result.suggestions.description.is_none() {
            result.suggestions.description = Some(text.to_string());
        }

        result
    }

    async fn extract_external(&self, text: &str) -> ExtractionResult {
        if !self.backend.is_configured() {
            debug!("No API credential configured, extracting locally");
            return ExtractionResult {
                suggestions: extract_suggestions(text),
                raw_model_response: None,
            };
        }

        let system = build_system_prompt();
        let prompt = build_user_prompt(text);

        match self.backend.generate(&system, &prompt).await {
            Ok(raw) => ExtractionResult {
                suggestions: parse_and_validate(&raw, text),
                raw_model_response: Some(raw),
            },
            Err(err) => {
                warn!(error = %err, "Model request failed, extracting locally");
                ExtractionResult {
                    suggestions: extract_suggestions(text),
                    raw_model_response: None,
                }
            }
        }
    }

    /// Model identifier the engine would use for external extraction.
    pub fn model_name(&self) -> &str {
        self.backend.model_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockGenerationBackend;
    use serde_json::json;

    #[tokio::test]
    async fn test_local_mode_never_calls_backend() {
        let backend = MockGenerationBackend::new().with_response("{\"title\": \"unused\"}");
        let engine = ExtractionEngine::new(backend.clone());

        let text = "walnut coffee table, circa 1958";
        let result = engine.extract(text, false, ExtractionMode::Local).await;

        assert_eq!(result.suggestions, extract_suggestions(text));
        assert!(result.raw_model_response.is_none());
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_external_mode_parses_model_payload() {
        let payload = json!({ "title": "Danish Teak Credenza" }).to_string();
        let backend = MockGenerationBackend::new().with_response(&payload);
        let engine = ExtractionEngine::new(backend.clone());

        let result = engine
            .extract("walnut coffee table", false, ExtractionMode::External)
            .await;

        assert_eq!(
            result.suggestions.title.as_deref(),
            Some("Danish Teak Credenza")
        );
        // Omitted fields are still re-attempted from the listing text
        assert_eq!(
            result.suggestions.category,
            Some(curio_core::CategoryMatch::new("Furniture", "Coffee Tables"))
        );
        assert_eq!(result.raw_model_response, Some(payload));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_external_falls_back_when_unconfigured() {
        let backend = MockGenerationBackend::new().without_credentials();
        let engine = ExtractionEngine::new(backend.clone());

        let text = "walnut coffee table, circa 1958";
        let result = engine.extract(text, false, ExtractionMode::External).await;

        assert_eq!(result.suggestions, extract_suggestions(text));
        assert!(result.raw_model_response.is_none());
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_external_falls_back_on_backend_failure() {
        let backend = MockGenerationBackend::new().with_failure();
        let engine = ExtractionEngine::new(backend.clone());

        let text = "walnut coffee table, circa 1958";
        let result = engine.extract(text, false, ExtractionMode::External).await;

        assert_eq!(result.suggestions, extract_suggestions(text));
        assert!(result.raw_model_response.is_none());
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unparseable_payload_keeps_raw_response() {
        let backend = MockGenerationBackend::new().with_response("I'm sorry, I can't help.");
        let engine = ExtractionEngine::new(backend.clone());

        let text = "mahogany dresser with brass pulls";
        let result = engine.extract(text, false, ExtractionMode::External).await;

        assert_eq!(result.suggestions, extract_suggestions(text));
        assert_eq!(
            result.raw_model_response.as_deref(),
            Some("I'm sorry, I can't help.")
        );
    }

    #[tokio::test]
    async fn test_prefill_description() {
        let backend = MockGenerationBackend::new();
        let engine = ExtractionEngine::new(backend);

        let text = "oak side table";
        let result = engine.extract(text, true, ExtractionMode::External).await;

        assert_eq!(result.suggestions.description.as_deref(), Some(text));
    }

    #[tokio::test]
    async fn test_prefill_does_not_overwrite_model_description() {
        let payload = json!({ "description": "A refined oak side table." }).to_string();
        let backend = MockGenerationBackend::new().with_response(payload);
        let engine = ExtractionEngine::new(backend);

        let result = engine
            .extract("oak side table", true, ExtractionMode::External)
            .await;

        assert_eq!(
            result.suggestions.description.as_deref(),
            Some("A refined oak side table.")
        );
    }

    #[tokio::test]
    async fn test_prefill_applies_to_local_mode() {
        let engine = ExtractionEngine::new(MockGenerationBackend::new());

        let text = "oak side table";
        let result = engine.extract(text, true, ExtractionMode::Local).await;

        assert_eq!(result.suggestions.description.as_deref(), Some(text));
    }

    #[tokio::test]
    async fn test_backend_receives_prompts() {
        let backend = MockGenerationBackend::new();
        let engine = ExtractionEngine::new(backend.clone());

        engine
            .extract("walnut coffee table", false, ExtractionMode::External)
            .await;

        let calls = backend.get_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0]
            .system
            .contains("You are an expert at analyzing antique"));
        assert!(calls[0].prompt.contains("walnut coffee table"));
    }

    #[test]
    fn test_model_name_passthrough() {
        let engine = ExtractionEngine::new(MockGenerationBackend::new());
        assert_eq!(engine.model_name(), "mock-model");
    }
}
