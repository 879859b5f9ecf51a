//! Credential extraction from inbound request metadata

use std::collections::HashMap;

/// Metadata key carrying the caller's signed token
pub const TOKEN_HEADER: &str = "x-jwt-token";

/// Metadata key carrying the caller's tenant identifier
pub const TENANT_HEADER: &str = "x-tenant-id";

/// Transport metadata attached to one inbound tool call.
///
/// Keys are stored lowercased so lookups are case-insensitive, matching
/// HTTP header semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMetadata {
    entries: HashMap<String, String>,
}

impl RequestMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry (builder pattern)
    pub fn with(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .insert(key.as_ref().to_ascii_lowercase(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_ascii_lowercase())
            .map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for RequestMetadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Self::new();
        for (key, value) in iter {
            metadata.insert(key, value);
        }
        metadata
    }
}

/// Token and tenant presented by the caller of one tool call.
///
/// Both fields may be empty. The pair is never persisted; it lives only as
/// long as the call that carried it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialPair {
    pub token: String,
    pub tenant: String,
}

impl CredentialPair {
    pub fn new(token: impl Into<String>, tenant: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            tenant: tenant.into(),
        }
    }

    /// Extract the credential pair from request metadata.
    ///
    /// Never fails. Missing entries yield empty strings; values are taken
    /// verbatim so the tenant comparison stays exact.
    pub fn extract(metadata: &RequestMetadata) -> Self {
        Self {
            token: metadata.get(TOKEN_HEADER).unwrap_or_default().to_string(),
            tenant: metadata.get(TENANT_HEADER).unwrap_or_default().to_string(),
        }
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

// The token is a bearer secret; keep it out of logs.
impl std::fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialPair")
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .field("tenant", &self.tenant)
            .finish()
    }
}
