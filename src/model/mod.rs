//! Model clients for OpenAI-compatible chat-completion endpoints.
//!
//! ## Structure
//!
//! - `types`: Request/response types (ChatRequest, ToolCall, ModelError)
//! - `traits`: Client trait definitions (ChatClient)
//! - `providers/`: Provider-specific implementations

pub mod providers;
pub mod traits;
pub mod types;


pub use providers::OpenAiCompatClient;
pub use traits::ChatClient;
pub use types::{ChatRequest, FunctionCall, ModelError, ResponseMessage, ToolCall};
