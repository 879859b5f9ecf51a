//! Infrastructure layer for toolgate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: token verification, the account REST client,
//! configuration loading, call auditing and the HTTP transport.

pub mod auth;
pub mod backend;
pub mod config;
pub mod logging;
pub mod server;
pub mod tools;

// Re-export commonly used types
pub use auth::JwtAuthenticator;
pub use backend::{BACKEND_TENANT_HEADER, HttpAccountBackend};
pub use config::{
    ConfigLoader, ConfigValidationError, FileAuthConfig, FileBackendConfig, FileConfig,
    FileLoggingConfig, FileServerConfig, FileWorkflowConfig,
};
pub use logging::JsonlCallAuditLogger;
pub use server::ServerError;
pub use tools::{SetupError, default_dispatcher, dispatcher_from_config};
