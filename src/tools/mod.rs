//! Tool definitions offered to the model.
//!
//! - `types`: `ToolDescriptor` and `ToolChoice`
//! - `catalog`: the built-in schemas (`get_weather`, `search_transactions`)

pub mod catalog;
pub mod types;

pub use catalog::{search_transactions_tool, weather_tool};
pub use types::{ToolChoice, ToolDescriptor};
