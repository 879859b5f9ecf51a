//! Authentication domain module
//!
//! Pure types for the inbound authentication contract:
//!
//! ```text
//! RequestMetadata ──extract──▶ CredentialPair ──authenticate──▶ AuthVerdict
//! ```
//!
//! Extraction never fails: missing headers become empty strings and the
//! rejection is left to the authenticator, which always fails closed.

pub mod credentials;
pub mod verdict;

pub use credentials::{CredentialPair, RequestMetadata};
pub use verdict::{AuthFailure, AuthVerdict};
