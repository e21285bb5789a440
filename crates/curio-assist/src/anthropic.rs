//! Anthropic Messages API generation backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use curio_core::{Error, GenerationBackend, Result};

/// Default Anthropic API base URL.
pub const DEFAULT_ASSIST_URL: &str = curio_core::defaults::DEFAULT_ASSIST_URL;

/// Default generation model.
pub const DEFAULT_ASSIST_MODEL: &str = curio_core::defaults::DEFAULT_ASSIST_MODEL;

/// Default token ceiling for one extraction response.
pub const DEFAULT_MAX_TOKENS: u32 = curio_core::defaults::DEFAULT_MAX_TOKENS;

/// Timeout for generation requests (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = curio_core::defaults::DEFAULT_TIMEOUT_SECS;

/// Messages API version header value.
pub const ANTHROPIC_VERSION: &str = curio_core::defaults::ANTHROPIC_VERSION;

/// Connection settings for the Anthropic backend.
///
/// `api_key` is optional so a deployment without a credential can still
/// construct the backend; the engine checks [`GenerationBackend::is_configured`]
/// and extracts locally when the key is absent.
#[derive(Debug, Clone)]
pub struct AssistConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ASSIST_URL.to_string(),
            api_key: None,
            model: DEFAULT_ASSIST_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AssistConfig {
    /// Create from environment variables.
    ///
    /// Reads `ANTHROPIC_API_KEY` for the credential; an unset or empty
    /// value leaves the backend unconfigured. `CURIO_ASSIST_URL`,
    /// `CURIO_ASSIST_MODEL`, `CURIO_ASSIST_MAX_TOKENS`, and
    /// `CURIO_ASSIST_TIMEOUT_SECS` override the remaining defaults.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CURIO_ASSIST_URL").unwrap_or_else(|_| DEFAULT_ASSIST_URL.to_string());
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        let model = std::env::var("CURIO_ASSIST_MODEL")
            .unwrap_or_else(|_| DEFAULT_ASSIST_MODEL.to_string());
        let max_tokens = std::env::var("CURIO_ASSIST_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);
        let timeout_secs = std::env::var("CURIO_ASSIST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            api_key,
            model,
            max_tokens,
            timeout_secs,
        }
    }
}

/// Anthropic generation backend.
pub struct AnthropicBackend {
    client: Client,
    config: AssistConfig,
}

impl AnthropicBackend {
    /// Create a new Anthropic backend with default settings and no credential.
    pub fn new() -> Self {
        Self::with_config(AssistConfig::default())
    }

    /// Create a new Anthropic backend with custom configuration.
    pub fn with_config(config: AssistConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        info!(
            "Initializing Anthropic backend: url={}, model={}, configured={}",
            config.base_url,
            config.model,
            config.api_key.is_some()
        );

        Self { client, config }
    }

    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::with_config(AssistConfig::from_env())
    }

    /// Internal generation method behind the trait surface.
    async fn generate_internal(&self, system: &str, prompt: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Config("no API key configured".to_string()))?;

        let start = Instant::now();

        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            system: system.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.config.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Backend(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Backend(format!(
                "Anthropic returned {}: {}",
                status, body
            )));
        }

        let result: MessagesResponse = response
            .json()
            .await
            .map_err(|e| Error::Backend(format!("Failed to parse response: {}", e)))?;

        let content = result
            .content
            .first()
            .map(|block| block.text.clone())
            .unwrap_or_default();
        let elapsed = start.elapsed().as_millis() as u64;
        debug!(
            response_len = content.len(),
            duration_ms = elapsed,
            "Generation complete"
        );
        if elapsed > 30000 {
            warn!(
                duration_ms = elapsed,
                prompt_len = prompt.len(),
                slow = true,
                "Slow generation operation"
            );
        }
        Ok(content)
    }
}

impl Default for AnthropicBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Request payload for the Anthropic `/v1/messages` endpoint.
#[derive(Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<Message>,
}

/// Messages API turn.
#[derive(Serialize, Deserialize, Clone)]
struct Message {
    role: String,
    content: String,
}

/// Response from the Anthropic `/v1/messages` endpoint.
///
/// Only the content blocks are read; usage and stop metadata are ignored.
#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl GenerationBackend for AnthropicBackend {
    #[instrument(skip(self, system, prompt), fields(subsystem = "assist", component = "anthropic", op = "generate", model = %self.config.model, prompt_len = prompt.len()))]
    async fn generate(&self, system: &str, prompt: &str) -> Result<String> {
        self.generate_internal(system, prompt).await
    }

    fn is_configured(&self) -> bool {
        matches!(self.config.api_key.as_deref(), Some(key) if !key.is_empty())
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Constants Tests
    // ==========================================================================

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_ASSIST_URL, "https://api.anthropic.com");
        assert_eq!(DEFAULT_ASSIST_MODEL, "claude-sonnet-4-20250514");
        assert_eq!(DEFAULT_MAX_TOKENS, 2000);
        assert_eq!(DEFAULT_TIMEOUT_SECS, 60);
        assert_eq!(ANTHROPIC_VERSION, "2023-06-01");
    }

    // ==========================================================================
    // Backend Configuration Tests
    // ==========================================================================

    #[test]
    fn test_default_config() {
        let backend = AnthropicBackend::new();
        assert_eq!(backend.config.base_url, DEFAULT_ASSIST_URL);
        assert_eq!(backend.config.model, DEFAULT_ASSIST_MODEL);
        assert_eq!(backend.config.max_tokens, DEFAULT_MAX_TOKENS);
        assert!(backend.config.api_key.is_none());
    }

    #[test]
    fn test_custom_config() {
        let backend = AnthropicBackend::with_config(AssistConfig {
            base_url: "http://custom:1234".to_string(),
            api_key: Some("test-key".to_string()),
            model: "custom-model".to_string(),
            max_tokens: 500,
            timeout_secs: 10,
        });
        assert_eq!(backend.config.base_url, "http://custom:1234");
        assert_eq!(backend.config.model, "custom-model");
        assert_eq!(backend.config.max_tokens, 500);
        assert_eq!(backend.config.api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn test_default_impl() {
        let backend = AnthropicBackend::default();
        assert_eq!(backend.config.base_url, DEFAULT_ASSIST_URL);
        assert_eq!(backend.config.model, DEFAULT_ASSIST_MODEL);
    }

    #[test]
    fn test_is_configured_requires_key() {
        let backend = AnthropicBackend::new();
        assert!(!backend.is_configured());

        let backend = AnthropicBackend::with_config(AssistConfig {
            api_key: Some("sk-test".to_string()),
            ..AssistConfig::default()
        });
        assert!(backend.is_configured());
    }

    #[test]
    fn test_is_configured_rejects_empty_key() {
        let backend = AnthropicBackend::with_config(AssistConfig {
            api_key: Some(String::new()),
            ..AssistConfig::default()
        });
        assert!(!backend.is_configured());
    }

    #[test]
    fn test_model_name_accessor() {
        let backend = AnthropicBackend::with_config(AssistConfig {
            model: "my-gen-model".to_string(),
            ..AssistConfig::default()
        });
        assert_eq!(backend.model_name(), "my-gen-model");
    }

    // ==========================================================================
    // Request/Response Struct Tests
    // ==========================================================================

    #[test]
    fn test_messages_request_serialization() {
        let request = MessagesRequest {
            model: "test-model".to_string(),
            max_tokens: 2000,
            system: "Be helpful".to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: "Hello".to_string(),
            }],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("test-model"));
        assert!(json.contains("\"max_tokens\":2000"));
        assert!(json.contains("Be helpful"));
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("Hello"));
    }

    #[test]
    fn test_messages_response_deserialization() {
        let json = r#"{"content": [{"type": "text", "text": "{\"title\": \"Oak Desk\"}"}], "model": "m", "stop_reason": "end_turn"}"#;
        let response: MessagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.content.len(), 1);
        assert_eq!(response.content[0].text, "{\"title\": \"Oak Desk\"}");
    }

    #[test]
    fn test_messages_response_empty_content() {
        let json = r#"{"content": []}"#;
        let response: MessagesResponse = serde_json::from_str(json).unwrap();
        let text = response
            .content
            .first()
            .map(|block| block.text.clone())
            .unwrap_or_default();
        assert_eq!(text, "");
    }

    #[test]
    fn test_messages_response_missing_content_key() {
        let json = r#"{"model": "m"}"#;
        let response: MessagesResponse = serde_json::from_str(json).unwrap();
        assert!(response.content.is_empty());
    }

    #[test]
    fn test_content_block_missing_text_defaults_empty() {
        let json = r#"{"content": [{"type": "tool_use"}]}"#;
        let response: MessagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.content[0].text, "");
    }
}
