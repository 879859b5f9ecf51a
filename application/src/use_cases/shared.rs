//! Shared utilities for tool use cases.
//!
//! Credential lookup, account id parsing and backend error mapping used by
//! every tool handler.

use crate::context::CallContext;
use crate::ports::account_backend::BackendError;
use toolgate_domain::{
    AccountId, AccountIdPolicy, AuthFailure, CredentialPair, ToolCall, ToolCallResult,
};

/// Name of the account identifier argument shared by all tools
pub(crate) const ACCOUNT_ID: &str = "account_id";

/// Credentials installed by the auth middleware for this call.
///
/// Handlers only run inside the middleware, so a missing context means the
/// handler was invoked outside the dispatcher; deny rather than proceed.
pub(crate) fn call_credentials() -> Result<CredentialPair, ToolCallResult> {
    CallContext::current().ok_or_else(|| ToolCallResult::denied_by(AuthFailure::TokenRequired))
}

/// Parse and validate the `account_id` argument
pub(crate) fn account_id(call: &ToolCall, policy: &AccountIdPolicy) -> Result<AccountId, ToolCallResult> {
    call.require_string(ACCOUNT_ID)
        .and_then(|raw| policy.parse(raw))
        .map_err(|e| ToolCallResult::error(e.to_string()))
}

/// Map a backend failure onto the caller-visible error result
pub(crate) fn backend_failure(error: BackendError) -> ToolCallResult {
    ToolCallResult::error(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_errors_are_results() {
        let policy = AccountIdPolicy::default();

        let missing = account_id(&ToolCall::new("t"), &policy).unwrap_err();
        assert_eq!(missing.message(), "Missing required argument: account_id");

        let short = account_id(&ToolCall::new("t").with_arg(ACCOUNT_ID, "12"), &policy).unwrap_err();
        assert_eq!(short.message(), "Invalid account_id. Must be 5-10 digits");
    }

    #[tokio::test]
    async fn test_credentials_required() {
        let denied = call_credentials().unwrap_err();
        assert!(denied.is_error());
        assert_eq!(
            denied.message(),
            "Access denied: Authentication failed: token required"
        );

        let pair = CredentialPair::new("tok", "acme");
        let seen = CallContext::scope(pair.clone(), async { call_credentials() }).await;
        assert_eq!(seen.unwrap(), pair);
    }

    #[test]
    fn test_backend_failure_messages() {
        let result = backend_failure(BackendError::Transport("timed out".to_string()));
        assert_eq!(result.message(), "failed to reach backend: timed out");

        let result = backend_failure(BackendError::Business("Invalid email format".to_string()));
        assert_eq!(result.message(), "Invalid email format");
    }
}
