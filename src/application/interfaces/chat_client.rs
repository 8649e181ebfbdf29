use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending chat-style prompts to a text-generation provider.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Failures are reported as [`DomainError::RecommendationService`].
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a `system` persona message followed by a `user` prompt and return
    /// the content of the first completion choice.
    async fn complete(&self, system: &str, user: &str, max_tokens: u32)
        -> Result<String, DomainError>;

    fn model_name(&self) -> &str;
}
