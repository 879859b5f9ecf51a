//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section is optional; missing keys take their defaults.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;
use toolgate_domain::AccountIdPolicy;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("auth.secret cannot be empty")]
    EmptySecret,

    #[error("auth.allowed_tenant cannot be empty")]
    EmptyTenant,

    #[error("backend.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("backend.{0} cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("workflow account id bounds invalid: {0}")]
    InvalidAccountIdBounds(String),

    #[error("server.bind is not a socket address: {0}")]
    InvalidBind(String),
}

/// Raw `[auth]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthConfig {
    /// HS256 shared secret
    pub secret: String,
    /// The single tenant accepted by this deployment
    pub allowed_tenant: String,
    /// Clock-skew tolerance for token expiry
    pub leeway_seconds: u64,
}

impl Default for FileAuthConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            allowed_tenant: String::new(),
            leeway_seconds: 0,
        }
    }
}

/// Raw `[backend]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    pub base_url: String,
    /// Whole-request timeout
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3006".to_string(),
            timeout_seconds: 10,
            connect_timeout_seconds: 5,
        }
    }
}

/// Raw `[server]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3005".to_string(),
        }
    }
}

/// Raw `[workflow]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWorkflowConfig {
    pub account_id_min_digits: usize,
    pub account_id_max_digits: usize,
}

impl Default for FileWorkflowConfig {
    fn default() -> Self {
        let policy = AccountIdPolicy::default();
        Self {
            account_id_min_digits: policy.min_digits,
            account_id_max_digits: policy.max_digits,
        }
    }
}

/// Raw `[logging]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL call audit log path
    pub audit_log: Option<PathBuf>,
    /// Directory for rolling diagnostic log files
    pub dir: Option<PathBuf>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub auth: FileAuthConfig,
    pub backend: FileBackendConfig,
    pub server: FileServerConfig,
    pub workflow: FileWorkflowConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate everything needed to authenticate and dispatch calls
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.auth.secret.is_empty() {
            return Err(ConfigValidationError::EmptySecret);
        }
        if self.auth.allowed_tenant.trim().is_empty() {
            return Err(ConfigValidationError::EmptyTenant);
        }
        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if self.backend.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout("timeout_seconds"));
        }
        if self.backend.connect_timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout(
                "connect_timeout_seconds",
            ));
        }
        self.account_id_policy()?;
        self.bind_addr()?;
        Ok(())
    }

    /// Account id rule from `[workflow]`
    pub fn account_id_policy(&self) -> Result<AccountIdPolicy, ConfigValidationError> {
        AccountIdPolicy::new(
            self.workflow.account_id_min_digits,
            self.workflow.account_id_max_digits,
        )
        .map_err(|e| ConfigValidationError::InvalidAccountIdBounds(e.to_string()))
    }

    /// Listen address from `[server]`
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigValidationError> {
        self.server
            .bind
            .parse()
            .map_err(|_| ConfigValidationError::InvalidBind(self.server.bind.clone()))
    }

    /// Render as TOML with the secret masked
    pub fn to_redacted_toml(&self) -> Result<String, toml::ser::Error> {
        let mut shown = self.clone();
        if !shown.auth.secret.is_empty() {
            shown.auth.secret = "********".to_string();
        }
        toml::to_string_pretty(&shown)
    }
}
