//! Pluggable backend abstractions.

use async_trait::async_trait;

use crate::error::Result;

/// Backend for text generation against a hosted model service.
///
/// Implementations are cheap to clone or share; the extraction engine
/// holds one for the lifetime of the process.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate a response for `prompt` under the given system prompt.
    async fn generate(&self, system: &str, prompt: &str) -> Result<String>;

    /// Whether the backend holds the credentials it needs to serve
    /// requests. The engine checks this before building a prompt so an
    /// unconfigured deployment skips straight to local extraction.
    fn is_configured(&self) -> bool;

    /// Model identifier used for generation.
    fn model_name(&self) -> &str;
}
