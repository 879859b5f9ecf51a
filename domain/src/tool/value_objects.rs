//! Tool domain value objects: the result of one tool call
//!
//! Every call produces exactly one [`ToolCallResult`]. On the wire it is a
//! JSON object with a `status` discriminator:
//!
//! | Status | Fields |
//! |--------|--------|
//! | `success` | `message`, `payload` |
//! | `pending` | `step`, `message`, plus echoed arguments at top level |
//! | `cancelled` | `message` |
//! | `error` | `message` |
//!
//! Pending results echo back every field the caller must resupply on its
//! next call, because the server retains none of them.

use crate::auth::verdict::AuthFailure;
use crate::workflow::PendingStep;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Structured outcome of a tool call
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCallResult {
    Success {
        message: String,
        payload: Map<String, Value>,
    },
    Pending {
        step: PendingStep,
        message: String,
        /// Arguments the caller must send again on the next call
        echoed: BTreeMap<String, String>,
    },
    Cancelled {
        message: String,
    },
    Error {
        message: String,
    },
}

impl ToolCallResult {
    pub fn success(message: impl Into<String>) -> Self {
        ToolCallResult::Success {
            message: message.into(),
            payload: Map::new(),
        }
    }

    /// Add a payload field to a success result (no-op for other variants)
    pub fn with_payload(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if let ToolCallResult::Success { payload, .. } = &mut self {
            payload.insert(key.into(), value.into());
        }
        self
    }

    pub fn pending(step: PendingStep, message: impl Into<String>) -> Self {
        ToolCallResult::Pending {
            step,
            message: message.into(),
            echoed: BTreeMap::new(),
        }
    }

    /// Echo an argument back on a pending result (no-op for other variants)
    pub fn echo(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let ToolCallResult::Pending { echoed, .. } = &mut self {
            echoed.insert(key.into(), value.into());
        }
        self
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        ToolCallResult::Cancelled {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ToolCallResult::Error {
            message: message.into(),
        }
    }

    /// Denial returned when authentication fails.
    ///
    /// Only the fixed reason string is exposed, never verification details.
    pub fn access_denied(reason: &str) -> Self {
        Self::error(format!("Access denied: Authentication failed: {}", reason))
    }

    pub fn denied_by(failure: AuthFailure) -> Self {
        Self::access_denied(failure.reason())
    }

    pub fn unknown_tool() -> Self {
        Self::error("unknown tool")
    }

    pub fn status(&self) -> &'static str {
        match self {
            ToolCallResult::Success { .. } => "success",
            ToolCallResult::Pending { .. } => "pending",
            ToolCallResult::Cancelled { .. } => "cancelled",
            ToolCallResult::Error { .. } => "error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ToolCallResult::Success { message, .. }
            | ToolCallResult::Pending { message, .. }
            | ToolCallResult::Cancelled { message }
            | ToolCallResult::Error { message } => message,
        }
    }

    pub fn step(&self) -> Option<PendingStep> {
        match self {
            ToolCallResult::Pending { step, .. } => Some(*step),
            _ => None,
        }
    }

    pub fn payload(&self) -> Option<&Map<String, Value>> {
        match self {
            ToolCallResult::Success { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn echoed(&self, key: &str) -> Option<&str> {
        match self {
            ToolCallResult::Pending { echoed, .. } => echoed.get(key).map(|s| s.as_str()),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ToolCallResult::Success { .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ToolCallResult::Pending { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ToolCallResult::Cancelled { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ToolCallResult::Error { .. })
    }

    /// Render as a JSON value (same shape as the serializer)
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Serialize for ToolCallResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("status", self.status())?;
        match self {
            ToolCallResult::Success { message, payload } => {
                map.serialize_entry("message", message)?;
                map.serialize_entry("payload", payload)?;
            }
            ToolCallResult::Pending {
                step,
                message,
                echoed,
            } => {
                map.serialize_entry("step", step.as_str())?;
                map.serialize_entry("message", message)?;
                for (key, value) in echoed {
                    if key != "status" && key != "step" && key != "message" {
                        map.serialize_entry(key, value)?;
                    }
                }
            }
            ToolCallResult::Cancelled { message } | ToolCallResult::Error { message } => {
                map.serialize_entry("message", message)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let result = ToolCallResult::success("Email changed successfully")
            .with_payload("account_id", "12345")
            .with_payload("new_email", "a@b.com");

        assert!(result.is_success());
        assert_eq!(
            result.to_json(),
            json!({
                "status": "success",
                "message": "Email changed successfully",
                "payload": {"account_id": "12345", "new_email": "a@b.com"}
            })
        );
    }

    #[test]
    fn test_pending_echoes_fields_at_top_level() {
        let result = ToolCallResult::pending(PendingStep::Confirmation, "confirm?")
            .echo("account_id", "12345")
            .echo("new_email", "a@b.com");

        assert_eq!(result.step(), Some(PendingStep::Confirmation));
        assert_eq!(result.echoed("new_email"), Some("a@b.com"));
        assert_eq!(
            result.to_json(),
            json!({
                "status": "pending",
                "step": "confirmation",
                "message": "confirm?",
                "account_id": "12345",
                "new_email": "a@b.com"
            })
        );
    }

    #[test]
    fn test_echo_cannot_shadow_discriminator() {
        let result = ToolCallResult::pending(PendingStep::RequestValue, "more")
            .echo("status", "success");
        assert_eq!(result.to_json()["status"], "pending");
    }

    #[test]
    fn test_access_denied_shape() {
        let result = ToolCallResult::denied_by(AuthFailure::InvalidTenant);
        assert_eq!(
            result.to_json(),
            json!({
                "status": "error",
                "message": "Access denied: Authentication failed: invalid tenant"
            })
        );
    }

    #[test]
    fn test_builders_ignore_other_variants() {
        let result = ToolCallResult::cancelled("no").echo("a", "b").with_payload("c", 1);
        assert_eq!(result, ToolCallResult::cancelled("no"));
        assert_eq!(result.status(), "cancelled");
        assert!(ToolCallResult::unknown_tool().is_error());
    }
}
