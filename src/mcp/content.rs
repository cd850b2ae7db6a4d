//! Content types for MCP tool responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content item in tool result (MCP protocol shape).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: text.into(),
        }
    }

    /// Pretty-printed JSON carried as text, which every MCP client can display.
    pub fn json(value: &Value) -> Self {
        Self::text(serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string()))
    }
}

/// Result of a tool call (MCP protocol shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ContentItem>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(content: Vec<ContentItem>) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(message)],
            is_error: true,
        }
    }

    /// Human summary followed by the machine-readable payload.
    pub fn summary_with_json(summary: impl Into<String>, payload: &Value) -> Self {
        Self::success(vec![ContentItem::text(summary), ContentItem::json(payload)])
    }
}
