// tests/common/mock_chat_client.rs
//! Scripted chat client for driving the probe without a network.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use genai_tool_probe::{ChatClient, ChatRequest, ModelError, ResponseMessage};

/// A chat client that replays queued results and records every request.
#[derive(Clone, Default)]
pub struct MockChatClient {
    responses: Arc<Mutex<VecDeque<Result<ResponseMessage, ModelError>>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next result returned by `create_chat_completion`.
    pub async fn push(&self, result: Result<ResponseMessage, ModelError>) {
        self.responses.lock().await.push_back(result);
    }

    /// Queue a successful response carrying the given tool calls payload.
    pub async fn push_tool_calls(&self, tool_calls: serde_json::Value) {
        let message: ResponseMessage =
            serde_json::from_value(serde_json::json!({ "tool_calls": tool_calls }))
                .expect("valid tool call payload");
        self.push(Ok(message)).await;
    }

    pub async fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    fn model_id(&self) -> String {
        "mock-model".to_string()
    }

    async fn create_chat_completion(
        &self,
        request: ChatRequest,
    ) -> Result<ResponseMessage, ModelError> {
        self.requests.lock().await.push(request);
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(ModelError::Request("no scripted response".to_string())))
    }
}
