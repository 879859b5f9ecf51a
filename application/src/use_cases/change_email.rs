//! Change Email use case.
//!
//! The only mutating tool. It runs a human-in-the-loop workflow without any
//! server-side session: every call re-derives its step from the optional
//! arguments the caller supplied (see [`ChangeEmailStep`]).
//!
//! # Protocol
//!
//! ```text
//! call 1: {account_id}                                → pending/request_value
//! call 2: {account_id, new_email}                     → pending/confirmation
//! call 3: {account_id, new_email, user_confirmation}  → success | cancelled | error
//! ```
//!
//! Pending results echo `account_id` (and `new_email`) so the agent can send
//! them again. Repeating a pending-producing call any number of times yields
//! the same result. The confirmed call is NOT idempotent: each invocation
//! issues exactly one backend mutation and is never retried here.

use crate::ports::account_backend::AccountBackendPort;
use crate::ports::tool_handler::ToolHandler;
use crate::use_cases::shared::{self, ACCOUNT_ID};
use async_trait::async_trait;
use std::sync::Arc;
use toolgate_domain::{
    AccountIdPolicy, ChangeEmailStep, PendingStep, RiskLevel, ToolCall, ToolCallResult,
    ToolDefinition, ToolParameter,
};
use tracing::{info, warn};

/// Tool name constant
pub const CHANGE_EMAIL: &str = "change_email";

/// Optional argument carrying the mutation target
pub const NEW_EMAIL: &str = "new_email";

/// Optional argument carrying the user's Y/N answer
pub const USER_CONFIRMATION: &str = "user_confirmation";

/// Stateless change-email workflow engine
pub struct ChangeEmailUseCase {
    backend: Arc<dyn AccountBackendPort>,
    policy: AccountIdPolicy,
}

impl ChangeEmailUseCase {
    pub fn new(backend: Arc<dyn AccountBackendPort>, policy: AccountIdPolicy) -> Self {
        Self { backend, policy }
    }
}

#[async_trait]
impl ToolHandler for ChangeEmailUseCase {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            CHANGE_EMAIL,
            "Change the email address of an account (human-in-the-loop). \
             Call with only account_id to start; supply new_email when asked; \
             then supply user_confirmation (Y/N) after asking the user.",
            RiskLevel::High,
        )
        .with_parameter(ToolParameter::new(
            ACCOUNT_ID,
            format!(
                "Account ID ({}-{} digits)",
                self.policy.min_digits, self.policy.max_digits
            ),
            true,
        ))
        .with_parameter(ToolParameter::new(
            NEW_EMAIL,
            "New email address (omit until requested; an empty value is rejected)",
            false,
        ))
        .with_parameter(ToolParameter::new(
            USER_CONFIRMATION,
            "User confirmation Y/N (omit until requested)",
            false,
        ))
    }

    async fn call(&self, call: &ToolCall) -> ToolCallResult {
        let credentials = match shared::call_credentials() {
            Ok(c) => c,
            Err(denied) => return denied,
        };
        let account_id = match shared::account_id(call, &self.policy) {
            Ok(id) => id,
            Err(invalid) => return invalid,
        };
        let new_email = match call.optional_non_empty(NEW_EMAIL) {
            Ok(v) => v,
            Err(e) => return ToolCallResult::error(e.to_string()),
        };
        let confirmation = match call.optional_string(USER_CONFIRMATION) {
            Ok(v) => v,
            Err(e) => return ToolCallResult::error(e.to_string()),
        };

        let step = ChangeEmailStep::infer(new_email, confirmation);
        info!(
            account_id = %account_id,
            tenant = %credentials.tenant,
            step = ?step.pending(),
            terminal = step.is_terminal(),
            "change_email called"
        );

        match step {
            ChangeEmailStep::RequestValue => ToolCallResult::pending(
                PendingStep::RequestValue,
                "please provide new value",
            )
            .echo(ACCOUNT_ID, account_id.as_str()),

            ChangeEmailStep::AwaitConfirmation { new_email } => ToolCallResult::pending(
                PendingStep::Confirmation,
                format!("confirm change of {} to {}? (Y/N)", account_id, new_email),
            )
            .echo(ACCOUNT_ID, account_id.as_str())
            .echo(NEW_EMAIL, new_email),

            ChangeEmailStep::Cancelled => {
                info!(account_id = %account_id, "Email change cancelled by user");
                ToolCallResult::cancelled("change cancelled by user")
            }

            ChangeEmailStep::Finalize { new_email } => {
                match self
                    .backend
                    .change_email(&account_id, new_email, &credentials)
                    .await
                {
                    Ok(receipt) => {
                        info!(
                            account_id = %receipt.account_id,
                            "Email changed successfully"
                        );
                        ToolCallResult::success(format!(
                            "Email changed successfully! Account {} now has email: {}",
                            receipt.account_id, receipt.new_email
                        ))
                        .with_payload(ACCOUNT_ID, receipt.account_id)
                        .with_payload(NEW_EMAIL, receipt.new_email)
                    }
                    Err(e) => {
                        warn!(account_id = %account_id, error = %e, "Email change failed");
                        shared::backend_failure(e)
                    }
                }
            }
        }
    }
}
