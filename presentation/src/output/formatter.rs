//! Output formatter trait

use toolgate_domain::{ToolCallResult, ToolDefinition};

/// Trait for formatting tool results
pub trait OutputFormatter {
    /// Format one tool call result for humans
    fn format(&self, result: &ToolCallResult) -> String;

    /// Format as JSON (same shape as the HTTP transport)
    fn format_json(&self, result: &ToolCallResult) -> String;

    /// Format a tool listing
    fn format_tools(&self, tools: &[&ToolDefinition]) -> String;
}
