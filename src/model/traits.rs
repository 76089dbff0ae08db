//! Traits for model clients.

use async_trait::async_trait;

use crate::model::types::{ChatRequest, ModelError, ResponseMessage};

/// A chat-completion backend that supports tool calling.
/// Implemented by `OpenAiCompatClient`; tests provide in-memory fakes.
#[async_trait]
pub trait ChatClient: Send + Sync {
    fn model_id(&self) -> String;

    async fn create_chat_completion(
        &self,
        request: ChatRequest,
    ) -> Result<ResponseMessage, ModelError>;
}
