//! Mock generation backend for deterministic testing.
//!
//! Returns a canned response, optionally simulating a missing credential
//! or a transport failure, and logs every call for assertion.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use curio_core::{Error, GenerationBackend, Result};

/// Mock generation backend for testing.
#[derive(Clone)]
pub struct MockGenerationBackend {
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Debug, Clone)]
struct MockConfig {
    response: String,
    configured: bool,
    fail: bool,
    model: String,
}

/// One logged generation call.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub system: String,
    pub prompt: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            response: "{}".to_string(),
            configured: true,
            fail: false,
            model: "mock-model".to_string(),
        }
    }
}

impl MockGenerationBackend {
    /// Create a new mock backend that returns an empty JSON object.
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig::default()),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the canned response for generation requests.
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).response = response.into();
        self
    }

    /// Report the backend as holding no credential.
    pub fn without_credentials(mut self) -> Self {
        Arc::make_mut(&mut self.config).configured = false;
        self
    }

    /// Make every generation call fail.
    pub fn with_failure(mut self) -> Self {
        Arc::make_mut(&mut self.config).fail = true;
        self
    }

    /// Get all logged calls for assertion.
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Get number of generation calls.
    pub fn call_count(&self) -> usize {
        self.call_log.lock().unwrap().len()
    }
}

impl Default for MockGenerationBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationBackend for MockGenerationBackend {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String> {
        self.call_log.lock().unwrap().push(MockCall {
            system: system.to_string(),
            prompt: prompt.to_string(),
        });

        if self.config.fail {
            return Err(Error::Backend("Simulated failure for testing".to_string()));
        }

        Ok(self.config.response.clone())
    }

    fn is_configured(&self) -> bool {
        self.config.configured
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_response() {
        let backend = MockGenerationBackend::new().with_response("custom");
        let response = backend.generate("sys", "prompt").await.unwrap();
        assert_eq!(response, "custom");
    }

    #[tokio::test]
    async fn test_call_logging() {
        let backend = MockGenerationBackend::new();

        backend.generate("system one", "prompt one").await.unwrap();
        backend.generate("system two", "prompt two").await.unwrap();

        assert_eq!(backend.call_count(), 2);
        let calls = backend.get_calls();
        assert_eq!(calls[0].system, "system one");
        assert_eq!(calls[1].prompt, "prompt two");
    }

    #[tokio::test]
    async fn test_failure_simulation() {
        let backend = MockGenerationBackend::new().with_failure();
        let result = backend.generate("sys", "prompt").await;
        assert!(result.is_err());
        assert_eq!(backend.call_count(), 1);
    }

    #[test]
    fn test_without_credentials() {
        let backend = MockGenerationBackend::new().without_credentials();
        assert!(!backend.is_configured());
        assert!(MockGenerationBackend::new().is_configured());
    }

    #[test]
    fn test_model_name() {
        let backend = MockGenerationBackend::new();
        assert_eq!(backend.model_name(), "mock-model");
    }
}
