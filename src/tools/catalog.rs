//! Built-in tool schemas used by the probe scenarios.

use crate::tools::types::ToolDescriptor;

pub const WEATHER_TOOL_NAME: &str = "get_weather";
pub const SEARCH_TRANSACTIONS_TOOL_NAME: &str = "search_transactions";

/// Current temperature lookup for a city.
pub fn weather_tool() -> ToolDescriptor {
    ToolDescriptor {
        name: WEATHER_TOOL_NAME.into(),
        description: "Get current temperature for a given location.".into(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "City and country e.g. Bogotá, Colombia"
                }
            },
            "required": ["location"],
            "additionalProperties": false
        }),
        strict: true,
    }
}

/// Cybersource transaction search driven by an advanced query string.
pub fn search_transactions_tool() -> ToolDescriptor {
    ToolDescriptor {
        name: SEARCH_TRANSACTIONS_TOOL_NAME.into(),
        description: "Search for transactions in Cybersource by providing an advanced query string, e.g. 'submitTimeUtc:[NOW/DAY-7DAYS TO NOW/DAY+1DAY]'".into(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Cybersource advanced query"
                }
            },
            "required": ["query"],
            "additionalProperties": false
        }),
        strict: true,
    }
}
