//! Tool domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Risk level of a tool operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Low risk - read-only operations (e.g., get_email)
    Low,
    /// High risk - operations that modify backend state (e.g., change_email)
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::High => "high",
        }
    }

    pub fn requires_confirmation(&self) -> bool {
        matches!(self, RiskLevel::High)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Definition of a tool exposed to the agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "change_email")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Risk level of this tool
    pub risk_level: RiskLevel,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint (e.g., "string", "number")
    pub param_type: String,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            risk_level,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk_level.requires_confirmation()
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }
}

/// Specification of the tools exposed by a dispatcher
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: HashMap<String, ToolDefinition>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.insert(tool.name.clone(), tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Definitions sorted by name, for stable listings
    pub fn sorted(&self) -> Vec<&ToolDefinition> {
        let mut tools: Vec<_> = self.tools.values().collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// An inbound call to a tool with arguments.
///
/// Serialized as the wire envelope `{"name": ..., "arguments": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    #[serde(rename = "name")]
    pub tool_name: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Whether the argument is present. An explicit `null` counts as absent.
    pub fn has_argument(&self, key: &str) -> bool {
        self.arguments.get(key).is_some_and(|v| !v.is_null())
    }

    /// Get a required string argument
    pub fn require_string(&self, key: &str) -> Result<&str, DomainError> {
        self.optional_string(key)?
            .ok_or_else(|| DomainError::MissingArgument(key.to_string()))
    }

    /// Get an optional string argument, keeping absence distinct from emptiness.
    ///
    /// Returns `Ok(None)` when the key is missing or `null`, and an error when
    /// the value is present but not a string.
    pub fn optional_string(&self, key: &str) -> Result<Option<&str>, DomainError> {
        match self.arguments.get(key) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(DomainError::NotAString(key.to_string())),
        }
    }

    /// Like [`optional_string`](Self::optional_string) but rejects a present,
    /// blank value.
    pub fn optional_non_empty(&self, key: &str) -> Result<Option<&str>, DomainError> {
        match self.optional_string(key)? {
            Some(value) if value.trim().is_empty() => {
                Err(DomainError::EmptyArgument(key.to_string()))
            }
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level() {
        assert!(!RiskLevel::Low.requires_confirmation());
        assert!(RiskLevel::High.requires_confirmation());
    }

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("get_email", "Get account email", RiskLevel::Low)
            .with_parameter(ToolParameter::new("account_id", "Account id", true));

        assert_eq!(tool.name, "get_email");
        assert!(!tool.is_high_risk());
        assert_eq!(tool.parameters.len(), 1);
        assert_eq!(tool.parameters[0].param_type, "string");
    }

    #[test]
    fn test_tool_spec() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("get_email", "Get", RiskLevel::Low))
            .register(ToolDefinition::new("change_email", "Change", RiskLevel::High));

        assert!(spec.contains("get_email"));
        assert!(spec.get("change_email").is_some());
        assert!(spec.get("unknown").is_none());
        assert_eq!(spec.len(), 2);

        let names: Vec<_> = spec.sorted().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["change_email", "get_email"]);
    }

    #[test]
    fn test_tool_call_envelope() {
        let call: ToolCall = serde_json::from_value(serde_json::json!({
            "name": "change_email",
            "arguments": {"account_id": "12345", "new_email": null}
        }))
        .unwrap();

        assert_eq!(call.tool_name, "change_email");
        assert!(call.has_argument("account_id"));
        assert!(!call.has_argument("new_email"));
        assert_eq!(call.optional_string("new_email").unwrap(), None);
    }

    #[test]
    fn test_tool_call_without_arguments() {
        let call: ToolCall =
            serde_json::from_value(serde_json::json!({"name": "get_email"})).unwrap();
        assert!(call.arguments.is_empty());
        assert_eq!(
            call.require_string("account_id").unwrap_err(),
            DomainError::MissingArgument("account_id".to_string())
        );
    }

    #[test]
    fn test_absent_versus_empty() {
        let call = ToolCall::new("change_email").with_arg("new_email", "");

        assert_eq!(call.optional_string("new_email").unwrap(), Some(""));
        assert_eq!(
            call.optional_non_empty("new_email").unwrap_err(),
            DomainError::EmptyArgument("new_email".to_string())
        );
        assert_eq!(call.optional_non_empty("missing").unwrap(), None);
    }

    #[test]
    fn test_non_string_argument() {
        let call = ToolCall::new("get_email").with_arg("account_id", 12345);
        assert_eq!(
            call.require_string("account_id").unwrap_err(),
            DomainError::NotAString("account_id".to_string())
        );
    }
}
