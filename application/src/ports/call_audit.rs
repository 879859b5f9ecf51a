//! Port for structured tool-call auditing.
//!
//! Defines the [`CallAuditLogger`] trait for recording one event per
//! dispatched tool call (tool name, tenant, outcome) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures an audit
//! trail in a machine-readable format (JSONL). Tokens are never recorded.

use serde_json::{Value, json};
use toolgate_domain::ToolCallResult;

/// A structured audit event for one tool call.
pub struct CallAuditEvent {
    /// Event type identifier (e.g., "tool_call", "auth_denied").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl CallAuditEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// Event for a call that reached its handler
    pub fn completed(tool: &str, tenant: &str, result: &ToolCallResult) -> Self {
        let mut payload = json!({
            "tool": tool,
            "tenant": tenant,
            "status": result.status(),
        });
        if let Some(step) = result.step() {
            payload["step"] = Value::String(step.as_str().to_string());
        }
        Self::new("tool_call", payload)
    }

    /// Event for a call rejected by the auth middleware
    pub fn denied(tool: &str, tenant: &str, reason: &str) -> Self {
        Self::new(
            "auth_denied",
            json!({
                "tool": tool,
                "tenant": tenant,
                "reason": reason,
            }),
        )
    }
}

/// Port for logging tool-call events to a structured audit log.
///
/// The `log` method is intentionally synchronous and non-fallible so that
/// audit failures never change the outcome of a tool call.
pub trait CallAuditLogger: Send + Sync {
    /// Record an audit event.
    fn log(&self, event: CallAuditEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoCallAuditLogger;

impl CallAuditLogger for NoCallAuditLogger {
    fn log(&self, _event: CallAuditEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolgate_domain::PendingStep;

    #[test]
    fn test_completed_event_includes_step() {
        let result = ToolCallResult::pending(PendingStep::Confirmation, "confirm?");
        let event = CallAuditEvent::completed("change_email", "acme", &result);
        assert_eq!(event.event_type, "tool_call");
        assert_eq!(event.payload["status"], "pending");
        assert_eq!(event.payload["step"], "confirmation");
    }

    #[test]
    fn test_denied_event() {
        let event = CallAuditEvent::denied("get_email", "", "token required");
        assert_eq!(event.event_type, "auth_denied");
        assert_eq!(event.payload["reason"], "token required");
        assert!(event.payload.get("step").is_none());
    }
}
