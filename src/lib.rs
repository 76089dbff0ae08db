//! Tool-calling probe for OpenAI-compatible chat-completion endpoints.
//!
//! Sends a fixed set of prompts, each paired with a strict JSON tool schema,
//! and reports the tool calls the model chose to emit.
//!
//! # Architecture
//!
//! - `config`: Environment-driven settings (API key, base URL, TLS)
//! - `tools`: Tool descriptors and the built-in schemas
//! - `model`: Chat-completion client (reqwest)
//! - `probe`: Scenarios, startup diagnostics, and the probe routine
//! - `error`: Top-level error type

pub mod config;
pub mod error;
pub mod model;
pub mod probe;
pub mod tools;

pub use config::{ConfigError, ProbeConfig};
pub use error::ProbeError;
pub use model::{
    ChatClient, ChatRequest, ModelError, OpenAiCompatClient, ResponseMessage, ToolCall,
};
pub use probe::{
    default_scenarios, run_probe, run_tool_call_probe, EnvironmentReport, ProbeOutcome,
    ProbeScenario,
};

/// Install the stderr `fmt` subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("genai_tool_probe=info,warn")
            }),
        )
        .with_writer(std::io::stderr)
        .init();
}
