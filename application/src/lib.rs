//! Application layer for toolgate
//!
//! This crate contains the authenticated tool-call pipeline, port
//! definitions, and the tool use cases. It depends only on the domain layer.
//!
//! ```text
//! inbound call
//!   └─ ToolDispatcher::dispatch
//!        └─ AuthMiddleware::guard   (extract → authenticate → fail closed)
//!             └─ CallContext::scope (credentials visible to this call only)
//!                  └─ ToolHandler::call
//! ```

pub mod context;
pub mod dispatcher;
pub mod middleware;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use context::CallContext;
pub use dispatcher::{ToolDispatcher, ToolDispatcherBuilder};
pub use middleware::AuthMiddleware;
pub use ports::{
    account_backend::{AccountBackendPort, BackendError, EmailChangeReceipt, EmailRecord},
    authenticator::AuthenticatorPort,
    call_audit::{CallAuditEvent, CallAuditLogger, NoCallAuditLogger},
    tool_handler::ToolHandler,
};
pub use use_cases::change_email::ChangeEmailUseCase;
pub use use_cases::get_email::GetEmailUseCase;
