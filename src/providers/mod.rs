/*!
 * Provider implementations for the translation gateway.
 *
 * The pipeline's only network dependency is an OpenAI-compatible
 * chat-completion endpoint. The `Provider` trait is the seam that lets the
 * translation service run against the real client or the mock in tests.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;
use crate::providers::openai::{ChatRequest, ChatResponse};

/// Common trait for chat-completion gateways
///
/// All implementations take the same OpenAI-style request/response shapes,
/// allowing them to be used interchangeably in the translation service.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Complete a chat request
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<ChatResponse, ProviderError>` - The response or an error
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError>;
}

// A shared reference is itself a provider, so tests can drive a mock while
// the translation service holds it
#[async_trait]
impl<P: Provider> Provider for &P {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        (**self).complete(request).await
    }
}

pub mod openai;
pub mod mock;
