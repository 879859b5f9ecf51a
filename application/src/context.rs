//! Call-scoped credential context.
//!
//! Holds the validated [`CredentialPair`] for exactly one in-flight tool
//! call. The pair lives in a tokio task-local slot that is installed around
//! the handler future by [`CallContext::scope`]:
//!
//! ```text
//! scope(pair, fut) ── install ──▶ poll fut ... ── clear ──▶ output
//!                                   │
//!                                   └─ CallContext::current() == Some(pair)
//! ```
//!
//! # Isolation
//!
//! Every call gets its own slot. Concurrent calls, whether on different
//! worker threads or interleaved on one, only ever observe the pair that
//! their own middleware invocation installed.
//!
//! # Guaranteed Release
//!
//! The slot is tied to the scoped future. It is cleared when the future
//! completes, when the handler panics (unwinding through the scope), and
//! when the future is dropped mid-flight because the caller disconnected.
//! Nothing is ever written to process-wide state.

use std::future::Future;
use toolgate_domain::CredentialPair;

tokio::task_local! {
    static CALL_CREDENTIALS: CredentialPair;
}

/// Accessor for the current call's credentials
pub struct CallContext;

impl CallContext {
    /// Run `fut` with `credentials` installed as the call context.
    pub async fn scope<F>(credentials: CredentialPair, fut: F) -> F::Output
    where
        F: Future,
    {
        CALL_CREDENTIALS.scope(credentials, fut).await
    }

    /// Credentials of the call currently executing, if any
    pub fn current() -> Option<CredentialPair> {
        CALL_CREDENTIALS.try_with(|pair| pair.clone()).ok()
    }

    /// Tenant of the call currently executing, if any
    pub fn tenant() -> Option<String> {
        CALL_CREDENTIALS.try_with(|pair| pair.tenant.clone()).ok()
    }

    pub fn is_active() -> bool {
        CALL_CREDENTIALS.try_with(|_| ()).is_ok()
    }
}
