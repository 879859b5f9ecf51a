//! Console output formatter for tool results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use toolgate_domain::{ToolCallResult, ToolDefinition};

/// Formats tool results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn format(result: &ToolCallResult) -> String {
        let mut output = String::new();

        let status = match result {
            ToolCallResult::Success { .. } => "SUCCESS".green().bold(),
            ToolCallResult::Pending { .. } => "PENDING".yellow().bold(),
            ToolCallResult::Cancelled { .. } => "CANCELLED".dimmed().bold(),
            ToolCallResult::Error { .. } => "ERROR".red().bold(),
        };
        output.push_str(&format!("{} {}\n", status, result.message()));

        match result {
            ToolCallResult::Success { payload, .. } => {
                for (key, value) in payload {
                    let shown = value
                        .as_str()
                        .map(str::to_string)
                        .unwrap_or_else(|| value.to_string());
                    output.push_str(&format!("  {} {}\n", format!("{}:", key).cyan(), shown));
                }
            }
            ToolCallResult::Pending { step, echoed, .. } => {
                output.push_str(&format!("  {} {}\n", "step:".cyan(), step));
                if !echoed.is_empty() {
                    output.push_str(&format!(
                        "  {}\n",
                        "Resend these arguments on the next call:".dimmed()
                    ));
                    for (key, value) in echoed {
                        output.push_str(&format!("    --arg {}={}\n", key, value));
                    }
                }
            }
            ToolCallResult::Cancelled { .. } | ToolCallResult::Error { .. } => {}
        }

        output
    }

    pub fn format_json(result: &ToolCallResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_tools(tools: &[&ToolDefinition]) -> String {
        let mut output = String::new();

        for tool in tools {
            let risk = if tool.is_high_risk() {
                tool.risk_level.as_str().red()
            } else {
                tool.risk_level.as_str().green()
            };
            output.push_str(&format!("{} [{}]\n", tool.name.bold(), risk));
            output.push_str(&Self::indent(&tool.description, "  "));
            output.push('\n');

            for param in &tool.parameters {
                let required = if param.required {
                    "required".yellow()
                } else {
                    "optional".dimmed()
                };
                output.push_str(&format!(
                    "    {} ({}, {}) {}\n",
                    param.name.cyan(),
                    param.param_type,
                    required,
                    param.description
                ));
            }
            output.push('\n');
        }

        output
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &ToolCallResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &ToolCallResult) -> String {
        Self::format_json(result)
    }

    fn format_tools(&self, tools: &[&ToolDefinition]) -> String {
        Self::format_tools(tools)
    }
}
