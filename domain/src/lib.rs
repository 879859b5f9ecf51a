//! Domain layer for toolgate
//!
//! This crate contains the core types and rules of the authenticated tool-call
//! protocol. It has no dependencies on infrastructure or transport concerns.
//!
//! # Core Concepts
//!
//! ## Credentials
//!
//! Every inbound tool call carries a token and a tenant identifier in its
//! transport metadata. The [`CredentialPair`] is extracted once per call and
//! judged by an authenticator, producing an [`AuthVerdict`].
//!
//! ## Stateless Workflow
//!
//! Mutating tools never store progress on the server. The current step is
//! re-derived on every call from which optional arguments are present
//! (see [`workflow`]).

pub mod account;
pub mod auth;
pub mod core;
pub mod tool;
pub mod workflow;

// Re-export commonly used types
pub use account::{AccountId, AccountIdPolicy};
pub use auth::{
    credentials::{CredentialPair, RequestMetadata, TENANT_HEADER, TOKEN_HEADER},
    verdict::{AuthFailure, AuthVerdict},
};
pub use core::error::DomainError;
pub use tool::{
    entities::{RiskLevel, ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::ToolCallResult,
};
pub use workflow::{CONFIRMATION_ACCEPT, ChangeEmailStep, PendingStep};
