use async_trait::async_trait;

/// Error types for generative-language calls.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// Backend cannot be used at all, e.g. no API key configured.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Request timed out")]
    Timeout,
}

/// Abstraction over the generative-language API. One call, one completion;
/// streaming is not needed by any consumer in this crate.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Backend identifier, e.g. the model name.
    fn id(&self) -> &str;

    /// Generate a completion for `prompt` under `system_instruction`.
    async fn generate(&self, system_instruction: &str, prompt: &str) -> Result<String, AiError>;
}
