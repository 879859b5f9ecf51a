//! HTTP client for the account REST API.
//!
//! # Wire Contract
//!
//! | Operation | Request | Success body |
//! |-----------|---------|--------------|
//! | read | `GET {base}/get_email/{account_id}` | `{message, account_id, email}` |
//! | mutate | `POST {base}/change_email` `{account_id, new_email}` | `{message, account_id, new_email}` |
//!
//! Every request carries `Authorization: Bearer <token>` and
//! `x-cdl-tenant-id: <tenant>` taken from the caller's validated
//! credentials.
//!
//! Success is recognised by the body shape, never by the HTTP status. Any
//! other JSON object is a business error carrying its `message`. Bodies that
//! are not JSON objects are transport-level failures.

use crate::config::FileBackendConfig;
use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde_json::{Value, json};
use std::time::Duration;
use toolgate_application::{AccountBackendPort, BackendError, EmailChangeReceipt, EmailRecord};
use toolgate_domain::core::string::truncate;
use toolgate_domain::{AccountId, CredentialPair};
use tracing::{debug, warn};

/// Longest body excerpt quoted in a malformed-response error
const BODY_PREVIEW_LEN: usize = 120;

/// Outbound tenant header expected by the account API
pub const BACKEND_TENANT_HEADER: &str = "x-cdl-tenant-id";

/// [`AccountBackendPort`] implementation over reqwest
pub struct HttpAccountBackend {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpAccountBackend {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn from_config(config: &FileBackendConfig) -> Result<Self, BackendError> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.timeout_seconds),
            Duration::from_secs(config.connect_timeout_seconds),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder, credentials: &CredentialPair) -> RequestBuilder {
        request
            .bearer_auth(&credentials.token)
            .header(BACKEND_TENANT_HEADER, &credentials.tenant)
    }

    /// Send the request and return its JSON object body
    async fn send(&self, request: RequestBuilder) -> Result<Value, BackendError> {
        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            BackendError::MalformedResponse(format!(
                "HTTP {}: {} (body: {:?})",
                status.as_u16(),
                e,
                truncate(&body, BODY_PREVIEW_LEN)
            ))
        })?;
        if !value.is_object() {
            return Err(BackendError::MalformedResponse(format!(
                "HTTP {}: expected a JSON object",
                status.as_u16()
            )));
        }

        debug!(status = status.as_u16(), "Backend responded");
        Ok(value)
    }

    fn transport_error(&self, error: reqwest::Error) -> BackendError {
        if error.is_timeout() {
            BackendError::Timeout(self.timeout.as_secs())
        } else {
            BackendError::Transport(error.to_string())
        }
    }
}

fn string_field<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str)
}

fn business_error(body: &Value) -> BackendError {
    let message = string_field(body, "message").unwrap_or("Unknown error");
    BackendError::Business(message.to_string())
}

#[async_trait]
impl AccountBackendPort for HttpAccountBackend {
    async fn get_email(
        &self,
        account_id: &AccountId,
        credentials: &CredentialPair,
    ) -> Result<EmailRecord, BackendError> {
        let request = self.authorized(
            self.client
                .get(self.url(&format!("get_email/{}", account_id))),
            credentials,
        );
        let body = self.send(request).await?;

        match (string_field(&body, "message"), string_field(&body, "email")) {
            (Some(message), Some(email)) => Ok(EmailRecord {
                account_id: string_field(&body, "account_id")
                    .unwrap_or(account_id.as_str())
                    .to_string(),
                email: email.to_string(),
                message: message.to_string(),
            }),
            _ => {
                let err = business_error(&body);
                warn!(account_id = %account_id, error = %err, "Backend rejected email lookup");
                Err(err)
            }
        }
    }

    async fn change_email(
        &self,
        account_id: &AccountId,
        new_email: &str,
        credentials: &CredentialPair,
    ) -> Result<EmailChangeReceipt, BackendError> {
        let request = self.authorized(
            self.client.post(self.url("change_email")).json(&json!({
                "account_id": account_id.as_str(),
                "new_email": new_email,
            })),
            credentials,
        );
        let body = self.send(request).await?;

        match (string_field(&body, "message"), string_field(&body, "new_email")) {
            (Some(message), Some(confirmed)) => Ok(EmailChangeReceipt {
                account_id: string_field(&body, "account_id")
                    .unwrap_or(account_id.as_str())
                    .to_string(),
                new_email: confirmed.to_string(),
                message: message.to_string(),
            }),
            _ => {
                let err = business_error(&body);
                warn!(account_id = %account_id, error = %err, "Backend rejected email change");
                Err(err)
            }
        }
    }
}
