//! Authentication middleware wrapped around every tool invocation.
//!
//! # Flow
//!
//! ```text
//! RequestMetadata
//!   ├─ CredentialPair::extract        (never fails)
//!   ├─ AuthenticatorPort::validate    (fail closed)
//!   │    └─ invalid → Error{"Access denied: Authentication failed: <reason>"}
//!   │                 (inner handler is NOT invoked)
//!   └─ CallContext::scope(pair, inner())
//!        ├─ handler result returned unchanged
//!        └─ handler panic → Error{"tool execution failed"}
//! ```
//!
//! The context is released on every exit path because it is bound to the
//! scoped future (see [`crate::context`]).

use crate::context::CallContext;
use crate::ports::authenticator::AuthenticatorPort;
use crate::ports::call_audit::{CallAuditEvent, CallAuditLogger, NoCallAuditLogger};
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use toolgate_domain::{CredentialPair, RequestMetadata, ToolCallResult};
use tracing::{debug, error, warn};

/// Fail-closed authentication guard for tool calls
#[derive(Clone)]
pub struct AuthMiddleware {
    authenticator: Arc<dyn AuthenticatorPort>,
    audit: Arc<dyn CallAuditLogger>,
}

impl AuthMiddleware {
    pub fn new(authenticator: Arc<dyn AuthenticatorPort>) -> Self {
        Self {
            authenticator,
            audit: Arc::new(NoCallAuditLogger),
        }
    }

    /// Create with an audit logger.
    pub fn with_audit_logger(mut self, audit: Arc<dyn CallAuditLogger>) -> Self {
        self.audit = audit;
        self
    }

    /// Extract and validate the caller's credentials.
    ///
    /// Returns the validated pair, or the denial result to send back.
    pub fn authenticate(&self, metadata: &RequestMetadata) -> Result<CredentialPair, String> {
        let credentials = CredentialPair::extract(metadata);
        let verdict = self
            .authenticator
            .validate(&credentials.token, &credentials.tenant);
        if verdict.is_valid() {
            Ok(credentials)
        } else {
            Err(verdict.reason)
        }
    }

    /// Run `inner` only if the call's credentials are valid.
    ///
    /// `inner` is constructed and polled inside the call context, so the
    /// handler observes exactly this call's credentials.
    pub async fn guard<F, Fut>(
        &self,
        tool: &str,
        metadata: &RequestMetadata,
        inner: F,
    ) -> ToolCallResult
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ToolCallResult>,
    {
        let credentials = match self.authenticate(metadata) {
            Ok(credentials) => credentials,
            Err(reason) => {
                let tenant = CredentialPair::extract(metadata).tenant;
                warn!(tool = tool, tenant = %tenant, reason = %reason, "Tool call denied");
                self.audit.log(CallAuditEvent::denied(tool, &tenant, &reason));
                return ToolCallResult::access_denied(&reason);
            }
        };

        let tenant = credentials.tenant.clone();
        debug!(tool = tool, tenant = %tenant, "Tool call authenticated");

        let scoped = CallContext::scope(credentials, async move { inner().await });
        let result = match AssertUnwindSafe(scoped).catch_unwind().await {
            Ok(result) => result,
            Err(_) => {
                error!(tool = tool, tenant = %tenant, "Tool handler panicked");
                ToolCallResult::error("tool execution failed")
            }
        };

        self.audit
            .log(CallAuditEvent::completed(tool, &tenant, &result));
        result
    }
}
