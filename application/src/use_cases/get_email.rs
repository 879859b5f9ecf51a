//! Get Email use case.
//!
//! Read-only lookup of the email address stored for an account. Single
//! call, no confirmation.

use crate::ports::account_backend::AccountBackendPort;
use crate::ports::tool_handler::ToolHandler;
use crate::use_cases::shared::{self, ACCOUNT_ID};
use async_trait::async_trait;
use std::sync::Arc;
use toolgate_domain::{
    AccountIdPolicy, RiskLevel, ToolCall, ToolCallResult, ToolDefinition, ToolParameter,
};
use tracing::{debug, warn};

pub const GET_EMAIL: &str = "get_email";

pub struct GetEmailUseCase {
    backend: Arc<dyn AccountBackendPort>,
    policy: AccountIdPolicy,
}

impl GetEmailUseCase {
    pub fn new(backend: Arc<dyn AccountBackendPort>, policy: AccountIdPolicy) -> Self {
        Self { backend, policy }
    }
}

#[async_trait]
impl ToolHandler for GetEmailUseCase {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            GET_EMAIL,
            "Get the email address of an account",
            RiskLevel::Low,
        )
        .with_parameter(ToolParameter::new(
            ACCOUNT_ID,
            format!(
                "Account ID ({}-{} digits)",
                self.policy.min_digits, self.policy.max_digits
            ),
            true,
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

        debug!(account_id = %account_id, tenant = %credentials.tenant, "get_email called");

        match self.backend.get_email(&account_id, &credentials).await {
            Ok(record) => ToolCallResult::success(format!(
                "Email for account {}: {}",
                record.account_id, record.email
            ))
            .with_payload(ACCOUNT_ID, record.account_id)
            .with_payload("email", record.email),
            Err(e) => {
                warn!(account_id = %account_id, error = %e, "Email lookup failed");
                shared::backend_failure(e)
            }
        }
    }
}
