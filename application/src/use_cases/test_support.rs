//! Test doubles shared by the use case tests.

use crate::context::CallContext;
use crate::ports::account_backend::{
    AccountBackendPort, BackendError, EmailChangeReceipt, EmailRecord,
};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use toolgate_domain::{AccountId, CredentialPair};

/// Scripted backend outcome
pub(crate) enum Scripted {
    Succeed,
    Business(&'static str),
    Transport(&'static str),
}

/// Backend that records every request and answers from a script
pub(crate) struct MockBackend {
    outcome: Scripted,
    pub(crate) get_calls: AtomicUsize,
    pub(crate) change_calls: AtomicUsize,
    pub(crate) seen_credentials: Mutex<Vec<CredentialPair>>,
}

impl MockBackend {
    pub(crate) fn new(outcome: Scripted) -> Self {
        Self {
            outcome,
            get_calls: AtomicUsize::new(0),
            change_calls: AtomicUsize::new(0),
            seen_credentials: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst) + self.change_calls.load(Ordering::SeqCst)
    }

    fn fail(&self) -> Option<BackendError> {
        match &self.outcome {
            Scripted::Succeed => None,
            Scripted::Business(msg) => Some(BackendError::Business(msg.to_string())),
            Scripted::Transport(msg) => Some(BackendError::Transport(msg.to_string())),
        }
    }
}

#[async_trait]
impl AccountBackendPort for MockBackend {
    async fn get_email(
        &self,
        account_id: &AccountId,
        credentials: &CredentialPair,
    ) -> Result<EmailRecord, BackendError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_credentials.lock().unwrap().push(credentials.clone());
        match self.fail() {
            Some(err) => Err(err),
            None => Ok(EmailRecord {
                account_id: account_id.to_string(),
                email: "user@example.com".to_string(),
                message: "Email retrieved successfully".to_string(),
            }),
        }
    }

    async fn change_email(
        &self,
        account_id: &AccountId,
        new_email: &str,
        credentials: &CredentialPair,
    ) -> Result<EmailChangeReceipt, BackendError> {
        self.change_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_credentials.lock().unwrap().push(credentials.clone());
        match self.fail() {
            Some(err) => Err(err),
            None => Ok(EmailChangeReceipt {
                account_id: account_id.to_string(),
                new_email: new_email.to_string(),
                message: "Email changed successfully".to_string(),
            }),
        }
    }
}

/// Run a handler future as an authenticated call for tenant `acme`
pub(crate) async fn as_caller<F: Future>(fut: F) -> F::Output {
    CallContext::scope(CredentialPair::new("tok", "acme"), fut).await
}
