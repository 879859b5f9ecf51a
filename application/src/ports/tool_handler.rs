//! Tool handler port
//!
//! Defines the seam between the dispatcher and the individual tools.

use async_trait::async_trait;
use toolgate_domain::{ToolCall, ToolCallResult, ToolDefinition};

/// A single remote-callable tool
///
/// Handlers are only ever invoked by the dispatcher, inside the auth
/// middleware. They must read caller credentials from
/// [`CallContext`](crate::context::CallContext) and never from transport
/// metadata, which they do not receive.
///
/// Handlers convert every failure into a [`ToolCallResult::Error`]; they
/// do not return `Result`.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Definition exposed to the agent (name, parameters, risk level)
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool
    async fn call(&self, call: &ToolCall) -> ToolCallResult;
}
