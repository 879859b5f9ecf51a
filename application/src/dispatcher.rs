//! Tool Dispatcher
//!
//! The [`ToolDispatcher`] maps tool names to [`ToolHandler`]s and routes
//! every call through the [`AuthMiddleware`]. There is no bypass path: each
//! registered tool is equally protected.
//!
//! # Usage
//!
//! ```ignore
//! let dispatcher = ToolDispatcher::builder(AuthMiddleware::new(authenticator))
//!     .register(GetEmailUseCase::new(backend.clone(), policy))
//!     .register(ChangeEmailUseCase::new(backend, policy))
//!     .build();
//!
//! let result = dispatcher.dispatch(&call, &metadata).await;
//! ```
//!
//! # Resolution Order
//!
//! 1. Authenticate (fail closed, unknown callers learn nothing about tools)
//! 2. Resolve the tool name (`Error{"unknown tool"}` when absent)
//! 3. Validate arguments against the tool definition
//! 4. Invoke the handler inside the call context
//!
//! The handler table is built once and never mutated afterwards, so
//! dispatch needs no locking.

use std::collections::HashMap;
use std::sync::Arc;

use crate::middleware::AuthMiddleware;
use crate::ports::tool_handler::ToolHandler;
use toolgate_domain::{
    DefaultToolValidator, RequestMetadata, ToolCall, ToolCallResult, ToolSpec, ToolValidator,
};
use tracing::{debug, warn};

/// Builder collecting handlers before the dispatcher is frozen
pub struct ToolDispatcherBuilder {
    middleware: AuthMiddleware,
    handlers: HashMap<String, Arc<dyn ToolHandler>>,
}

impl ToolDispatcherBuilder {
    /// Register a tool handler under its definition name
    pub fn register<H: ToolHandler + 'static>(self, handler: H) -> Self {
        self.register_arc(Arc::new(handler))
    }

    /// Register a tool handler (Arc version)
    pub fn register_arc(mut self, handler: Arc<dyn ToolHandler>) -> Self {
        let name = handler.definition().name;
        if self.handlers.insert(name.clone(), handler).is_some() {
            warn!(tool = %name, "Tool registered twice, keeping the latest handler");
        }
        self
    }

    pub fn build(self) -> ToolDispatcher {
        let tool_spec = self
            .handlers
            .values()
            .fold(ToolSpec::new(), |spec, handler| spec.register(handler.definition()));
        debug!(tools = tool_spec.len(), "Tool dispatcher ready");
        ToolDispatcher {
            middleware: self.middleware,
            handlers: self.handlers,
            tool_spec,
        }
    }
}

/// Authenticated router from tool name to handler
pub struct ToolDispatcher {
    middleware: AuthMiddleware,
    handlers: HashMap<String, Arc<dyn ToolHandler>>,
    tool_spec: ToolSpec,
}

impl ToolDispatcher {
    pub fn builder(middleware: AuthMiddleware) -> ToolDispatcherBuilder {
        ToolDispatcherBuilder {
            middleware,
            handlers: HashMap::new(),
        }
    }

    /// Specification of all registered tools
    pub fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    /// Dispatch one tool call.
    ///
    /// Always returns a result; failures of any kind become
    /// [`ToolCallResult::Error`].
    pub async fn dispatch(&self, call: &ToolCall, metadata: &RequestMetadata) -> ToolCallResult {
        self.middleware
            .guard(&call.tool_name, metadata, || async {
                let Some(handler) = self.handlers.get(&call.tool_name) else {
                    debug!(tool = %call.tool_name, "Unknown tool requested");
                    return ToolCallResult::unknown_tool();
                };

                let definition = handler.definition();
                if let Err(e) = DefaultToolValidator.validate(call, &definition) {
                    return ToolCallResult::error(e);
                }

                handler.call(call).await
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::CallContext;
    use crate::ports::authenticator::AuthenticatorPort;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use toolgate_domain::{
        AuthFailure, AuthVerdict, RiskLevel, TENANT_HEADER, TOKEN_HEADER, ToolDefinition,
        ToolParameter,
    };

    struct MockAuthenticator;

    impl AuthenticatorPort for MockAuthenticator {
        fn validate(&self, token: &str, tenant: &str) -> AuthVerdict {
            if token.is_empty() {
                AuthVerdict::denied(AuthFailure::TokenRequired)
            } else if tenant.is_empty() {
                AuthVerdict::denied(AuthFailure::InvalidTenant)
            } else {
                AuthVerdict::ok()
            }
        }
    }

    /// Counts invocations and reports the tenant it observed
    struct WhoAmI {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ToolHandler for WhoAmI {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::new("whoami", "Report caller tenant", RiskLevel::Low)
                .with_parameter(ToolParameter::new("delay_ms", "Delay", false).with_type("number"))
        }

        async fn call(&self, call: &ToolCall) -> ToolCallResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let before = CallContext::tenant();
            let delay = call
                .arguments
                .get("delay_ms")
                .and_then(|v| v.as_u64())
                .unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            let after = CallContext::tenant();
            ToolCallResult::success("ok")
                .with_payload("before", before.unwrap_or_default())
                .with_payload("after", after.unwrap_or_default())
        }
    }

    fn dispatcher(calls: Arc<AtomicUsize>) -> ToolDispatcher {
        ToolDispatcher::builder(AuthMiddleware::new(Arc::new(MockAuthenticator)))
            .register(WhoAmI { calls })
            .build()
    }

    fn metadata(token: &str, tenant: &str) -> RequestMetadata {
        RequestMetadata::new()
            .with(TOKEN_HEADER, token)
            .with(TENANT_HEADER, tenant)
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let calls = Arc::new(AtomicUsize::new(0));
        let result = dispatcher(calls.clone())
            .dispatch(&ToolCall::new("nope"), &metadata("tok", "acme"))
            .await;

        assert_eq!(result, ToolCallResult::error("unknown tool"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_tool_requires_auth_first() {
        let result = dispatcher(Arc::new(AtomicUsize::new(0)))
            .dispatch(&ToolCall::new("nope"), &metadata("", ""))
            .await;
        assert_eq!(
            result.message(),
            "Access denied: Authentication failed: token required"
        );
    }

    #[tokio::test]
    async fn test_denied_call_never_invokes_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let d = dispatcher(calls.clone());

        for meta in [metadata("", "acme"), metadata("tok", "")] {
            let result = d.dispatch(&ToolCall::new("whoami"), &meta).await;
            assert!(result.is_error());
            assert!(result.message().starts_with("Access denied: "));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_arguments_rejected_before_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let call = ToolCall::new("whoami").with_arg("surprise", true);
        let result = dispatcher(calls.clone())
            .dispatch(&call, &metadata("tok", "acme"))
            .await;

        assert!(result.is_error());
        assert!(result.message().contains("Unknown parameter"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_tool_spec_lists_registered_tools() {
        let d = dispatcher(Arc::new(AtomicUsize::new(0)));
        assert!(d.tool_spec().contains("whoami"));
        assert!(d.tool_spec().get("whoami").is_some());
        assert_eq!(d.tool_spec().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_calls_never_see_each_other() {
        let calls = Arc::new(AtomicUsize::new(0));
        let d = Arc::new(dispatcher(calls.clone()));

        // The slow call is still in flight while the fast one runs
        let slow = {
            let d = d.clone();
            tokio::spawn(async move {
                let call = ToolCall::new("whoami").with_arg("delay_ms", 50);
                d.dispatch(&call, &metadata("tok-a", "alpha")).await
            })
        };
        let fast = {
            let d = d.clone();
            tokio::spawn(async move {
                let call = ToolCall::new("whoami").with_arg("delay_ms", 5);
                d.dispatch(&call, &metadata("tok-b", "beta")).await
            })
        };

        let slow = slow.await.unwrap();
        let fast = fast.await.unwrap();

        for (result, tenant) in [(slow, "alpha"), (fast, "beta")] {
            let payload = result.payload().unwrap();
            assert_eq!(payload["before"], tenant);
            assert_eq!(payload["after"], tenant);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_interleaved_calls_on_one_thread_are_isolated() {
        let d = dispatcher(Arc::new(AtomicUsize::new(0)));
        let a = ToolCall::new("whoami").with_arg("delay_ms", 20);
        let b = ToolCall::new("whoami").with_arg("delay_ms", 1);
        let meta_a = metadata("tok-a", "alpha");
        let meta_b = metadata("tok-b", "beta");

        let (ra, rb) = tokio::join!(d.dispatch(&a, &meta_a), d.dispatch(&b, &meta_b));

        assert_eq!(ra.payload().unwrap()["after"], "alpha");
        assert_eq!(rb.payload().unwrap()["after"], "beta");
        assert!(CallContext::current().is_none());
    }
}
