use super::error::ServiceError;
use async_trait::async_trait;
use serde_json::Value;

/// One prompt for the language model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationRequest<'a> {
    pub prompt: &'a str,
    /// Requests structured JSON output following this schema.
    pub schema: Option<&'a Value>,
}

impl<'a> GenerationRequest<'a> {
    pub fn text(prompt: &'a str) -> Self {
        Self {
            prompt,
            schema: None,
        }
    }

    pub fn json(prompt: &'a str, schema: &'a Value) -> Self {
        Self {
            prompt,
            schema: Some(schema),
        }
    }
}

/// A text-generation backend.
///
/// Implementations issue exactly one outbound request per `generate` call and
/// never retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Whether a credential is available. When it is not, callers skip the
    /// request entirely.
    fn is_configured(&self) -> bool;

    /// Returns the generated text, which may be empty.
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ServiceError>;
}
