//! The tool-calling probe.
//!
//! Runs a fixed list of scenarios against a chat client, one after the
//! other, and writes the tool calls each response carries. The first
//! failure is reported on the output and returned; later scenarios are not
//! attempted.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{ProbeConfig, API_KEY_ENV};
use crate::error::ProbeError;
use crate::model::{ChatClient, ChatRequest, OpenAiCompatClient, ToolCall};
use crate::tools::{search_transactions_tool, weather_tool, ToolChoice, ToolDescriptor};

pub const ENV_FILE_NAME: &str = ".env";
const MISSING_ENV_VALUE: &str = "Not found";

/// One prompt sent with the tools the model may call.
#[derive(Debug, Clone)]
pub struct ProbeScenario {
    /// Prefix of the printed line, e.g. `Weather` → `Weather calls: ...`.
    pub label: String,
    pub prompt: String,
    pub tools: Vec<ToolDescriptor>,
    pub tool_choice: Option<ToolChoice>,
}

impl ProbeScenario {
    pub fn new(
        label: impl Into<String>,
        prompt: impl Into<String>,
        tools: Vec<ToolDescriptor>,
    ) -> Self {
        Self {
            label: label.into(),
            prompt: prompt.into(),
            tools,
            tool_choice: None,
        }
    }

    fn request(&self) -> ChatRequest {
        ChatRequest {
            system: None,
            user: self.prompt.clone(),
            tools: self.tools.clone(),
            tool_choice: self.tool_choice.clone(),
        }
    }
}

/// The weather prompt followed by the Cybersource prompt.
pub fn default_scenarios() -> Vec<ProbeScenario> {
    vec![
        ProbeScenario::new(
            "Weather",
            "What is the weather like in Paris today?",
            vec![weather_tool()],
        ),
        ProbeScenario::new(
            "Cybersource",
            "Give me my cybersource transactions for past day",
            vec![search_transactions_tool()],
        ),
    ]
}

/// Tool calls returned for one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeOutcome {
    pub label: String,
    pub tool_calls: Option<Vec<ToolCall>>,
}

/// Run `scenarios` in order against `client`, writing one line per scenario.
pub async fn run_probe<C, W>(
    client: &C,
    scenarios: &[ProbeScenario],
    out: &mut W,
) -> Result<Vec<ProbeOutcome>, ProbeError>
where
    C: ChatClient + ?Sized,
    W: Write,
{
    let mut outcomes = Vec::with_capacity(scenarios.len());

    for scenario in scenarios {
        tracing::info!(
            scenario = %scenario.label,
            model = %client.model_id(),
            "running tool-call scenario"
        );

        let message = match client.create_chat_completion(scenario.request()).await {
            Ok(message) => message,
            Err(err) => {
                tracing::error!(scenario = %scenario.label, error = %err, "scenario failed");
                writeln!(out, "Error testing OpenAI API: {err}")?;
                return Err(err.into());
            }
        };

        writeln!(
            out,
            "{} calls: {}",
            scenario.label,
            format_tool_calls(message.tool_calls.as_deref())
        )?;

        tracing::info!(
            scenario = %scenario.label,
            tool_calls = message.tool_calls.as_ref().map_or(0, Vec::len),
            "scenario finished"
        );

        outcomes.push(ProbeOutcome {
            label: scenario.label.clone(),
            tool_calls: message.tool_calls,
        });
    }

    Ok(outcomes)
}

/// Build the client from `config` and run the default scenarios.
///
/// A missing API key is reported before any request is made.
pub async fn run_tool_call_probe<W: Write>(
    config: &ProbeConfig,
    out: &mut W,
) -> Result<Vec<ProbeOutcome>, ProbeError> {
    let client = OpenAiCompatClient::new(config)?;
    run_probe(&client, &default_scenarios(), out).await
}

/// Compact JSON for the tool-call list, `null` when the model made none.
pub fn format_tool_calls(calls: Option<&[ToolCall]>) -> String {
    match calls {
        Some(calls) => serde_json::to_string(calls).unwrap_or_else(|_| format!("{calls:?}")),
        None => "null".to_string(),
    }
}

/// Startup diagnostics printed before the probe runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentReport {
    pub current_dir: PathBuf,
    pub env_file_exists: bool,
    /// Raw `OPENAI_API_KEY` value, or "Not found".
    pub api_key: String,
}

impl EnvironmentReport {
    pub fn collect<F>(dir: &Path, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            current_dir: dir.to_path_buf(),
            env_file_exists: dir.join(ENV_FILE_NAME).exists(),
            api_key: lookup(API_KEY_ENV).unwrap_or_else(|| MISSING_ENV_VALUE.to_string()),
        }
    }

    pub fn from_process() -> Result<Self, ProbeError> {
        let dir = std::env::current_dir()?;
        Ok(Self::collect(&dir, |key| std::env::var(key).ok()))
    }

    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Current directory: {}", self.current_dir.display())?;
        writeln!(out, "Env file exists: {}", self.env_file_exists)?;
        writeln!(out, "OpenAI API Key: {}", self.api_key)
    }
}
