//! Tool wiring
//!
//! Builds the [`ToolDispatcher`] with every tool this server exposes, using
//! the concrete adapters from this crate.
//!
//! | Tool | Risk | Backend call |
//! |------|------|--------------|
//! | `get_email` | low | `GET /get_email/{id}` |
//! | `change_email` | high | `POST /change_email` after confirmation |

use crate::auth::JwtAuthenticator;
use crate::backend::HttpAccountBackend;
use crate::config::{ConfigValidationError, FileConfig};
use std::sync::Arc;
use thiserror::Error;
use toolgate_application::{
    AccountBackendPort, AuthMiddleware, AuthenticatorPort, BackendError, CallAuditLogger,
    ChangeEmailUseCase, GetEmailUseCase, ToolDispatcher,
};
use toolgate_domain::AccountIdPolicy;

/// Failure while assembling the dispatcher
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigValidationError),

    #[error("could not create backend client: {0}")]
    Backend(#[from] BackendError),
}

/// Register the default tool set behind `authenticator`
pub fn default_dispatcher(
    authenticator: Arc<dyn AuthenticatorPort>,
    backend: Arc<dyn AccountBackendPort>,
    policy: AccountIdPolicy,
    audit: Arc<dyn CallAuditLogger>,
) -> ToolDispatcher {
    ToolDispatcher::builder(AuthMiddleware::new(authenticator).with_audit_logger(audit))
        .register(GetEmailUseCase::new(backend.clone(), policy))
        .register(ChangeEmailUseCase::new(backend, policy))
        .build()
}

/// Build the dispatcher from configuration.
///
/// Does not require credentials to be configured, so tool listing works
/// on a bare install; call [`FileConfig::validate`] before serving.
pub fn dispatcher_from_config(
    config: &FileConfig,
    audit: Arc<dyn CallAuditLogger>,
) -> Result<ToolDispatcher, SetupError> {
    let policy = config.account_id_policy()?;
    let backend = HttpAccountBackend::from_config(&config.backend)?;
    let authenticator = JwtAuthenticator::from_config(&config.auth);

    Ok(default_dispatcher(
        Arc::new(authenticator),
        Arc::new(backend),
        policy,
        audit,
    ))
}
