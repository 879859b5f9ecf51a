//! Account backend port
//!
//! Defines the interface to the external business API that stores account
//! email addresses. The workflow engine only distinguishes three outcomes:
//!
//! | Outcome | Representation |
//! |---------|----------------|
//! | Business success | `Ok(..)` |
//! | Business error (backend said no) | `Err(BackendError::Business)` |
//! | Transport failure (unreachable, timeout, malformed body) | `Err(BackendError::Transport)` |
//!
//! Timeouts and header construction are the adapter's responsibility. No
//! retries are performed at this seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use toolgate_domain::{AccountId, CredentialPair};

/// Errors surfaced by an account backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The backend answered and reported a failure
    #[error("{0}")]
    Business(String),

    /// The backend could not be reached
    #[error("failed to reach backend: {0}")]
    Transport(String),

    /// No answer within the configured request timeout
    #[error("failed to reach backend: request timed out after {0}s")]
    Timeout(u64),

    /// The backend answered with a body of unexpected shape
    #[error("failed to reach backend: malformed response: {0}")]
    MalformedResponse(String),
}

impl BackendError {
    /// Whether the failure happened below the business protocol
    pub fn is_transport(&self) -> bool {
        !matches!(self, BackendError::Business(_))
    }
}

/// Email address currently stored for an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    pub account_id: String,
    pub email: String,
    pub message: String,
}

/// Backend acknowledgement of a completed email change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailChangeReceipt {
    pub account_id: String,
    pub new_email: String,
    pub message: String,
}

/// Port for the external account backend
///
/// Every request carries the caller's validated credentials as outbound
/// authentication.
#[async_trait]
pub trait AccountBackendPort: Send + Sync {
    /// Read the email address of an account
    async fn get_email(
        &self,
        account_id: &AccountId,
        credentials: &CredentialPair,
    ) -> Result<EmailRecord, BackendError>;

    /// Change the email address of an account.
    ///
    /// Not idempotent: each invocation issues exactly one outbound mutation.
    async fn change_email(
        &self,
        account_id: &AccountId,
        new_email: &str,
        credentials: &CredentialPair,
    ) -> Result<EmailChangeReceipt, BackendError>;
}
