use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ProbeConfig};
use crate::model::{ChatClient, ChatRequest, ModelError, ResponseMessage};
use crate::tools::{ToolChoice, ToolDescriptor};

/// Client for any endpoint speaking the OpenAI chat-completions contract.
#[derive(Debug, Clone)]
pub struct OpenAiCompatClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiCompatClient {
    /// Build a client from validated configuration.
    ///
    /// Fails with `ConfigError::MissingApiKey` when no key is configured, so
    /// nothing touches the network without credentials.
    pub fn new(config: &ProbeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .danger_accept_invalid_certs(!config.verify_tls);

        if !config.verify_tls {
            tracing::warn!(
                base_url = %config.base_url,
                "TLS certificate verification is disabled"
            );
        }

        if let Some(path) = &config.ca_bundle {
            let pem = std::fs::read(path).map_err(|e| {
                ConfigError::Invalid(format!("cannot read CA bundle {}: {e}", path.display()))
            })?;
            let certificate = reqwest::Certificate::from_pem(&pem).map_err(|e| {
                ConfigError::Invalid(format!("invalid CA bundle {}: {e}", path.display()))
            })?;
            builder = builder.add_root_certificate(certificate);
        }

        let client = builder
            .build()
            .map_err(|e| ConfigError::Invalid(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            api_key: config.api_key.trim().to_string(),
            model: config.model.trim().to_string(),
            base_url: config.base_url.trim().to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn build_body(&self, request: ChatRequest) -> OpenAiChatRequest {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system {
            messages.push(OpenAiRequestMessage {
                role: "system".to_string(),
                content: system,
            });
        }
        messages.push(OpenAiRequestMessage {
            role: "user".to_string(),
            content: request.user,
        });

        let tools = if request.tools.is_empty() {
            None
        } else {
            Some(request.tools.iter().map(OpenAiTool::from).collect())
        };

        OpenAiChatRequest {
            model: self.model.clone(),
            messages,
            tools,
            tool_choice: request.tool_choice,
        }
    }
}

#[async_trait]
impl ChatClient for OpenAiCompatClient {
    fn model_id(&self) -> String {
        self.model.clone()
    }

    async fn create_chat_completion(
        &self,
        request: ChatRequest,
    ) -> Result<ResponseMessage, ModelError> {
        let endpoint = self.endpoint();
        let body = self.build_body(request);

        tracing::debug!(
            endpoint = %endpoint,
            model = %body.model,
            tools = body.tools.as_ref().map_or(0, Vec::len),
            "sending chat completion"
        );

        let response = self
            .client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        tracing::debug!("chat completion response: status={}", status);

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(ModelError::Auth(format!(
                "auth failed ({status}). Check OPENAI_API_KEY and account access. Response: {text}"
            )));
        }
        if !status.is_success() {
            return Err(ModelError::Request(format!("error {status}: {text}")));
        }

        let parsed: OpenAiChatResponse = serde_json::from_str(&text)
            .map_err(|e| ModelError::InvalidResponse(format!("parse failed: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| {
                ModelError::InvalidResponse("missing choices[0].message in response".to_string())
            })
    }
}

#[derive(Debug, Serialize)]
pub struct OpenAiChatRequest {
    pub model: String,
    pub messages: Vec<OpenAiRequestMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<OpenAiTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
}

#[derive(Debug, Serialize)]
pub struct OpenAiTool {
    #[serde(rename = "type")]
    pub type_: String,
    pub function: OpenAiFunction,
}

impl From<&ToolDescriptor> for OpenAiTool {
    fn from(descriptor: &ToolDescriptor) -> Self {
        Self {
            type_: "function".to_string(),
            function: OpenAiFunction {
                name: descriptor.name.clone(),
                description: descriptor.description.clone(),
                parameters: descriptor.input_schema.clone(),
                strict: descriptor.strict.then_some(true),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OpenAiFunction {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenAiRequestMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiChatResponse {
    #[serde(default)]
    pub choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiChoice {
    pub message: ResponseMessage,
}
