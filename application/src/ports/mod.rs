//! Port definitions (interfaces) for the application layer.
//!
//! Ports define the contracts that infrastructure adapters must implement.
//!
//! | Port | Adapter (infrastructure) |
//! |------|--------------------------|
//! | [`authenticator::AuthenticatorPort`] | `JwtAuthenticator` |
//! | [`account_backend::AccountBackendPort`] | `HttpAccountBackend` |
//! | [`call_audit::CallAuditLogger`] | `JsonlCallAuditLogger` |
//! | [`tool_handler::ToolHandler`] | use cases in [`crate::use_cases`] |

pub mod account_backend;
pub mod authenticator;
pub mod call_audit;
pub mod tool_handler;
