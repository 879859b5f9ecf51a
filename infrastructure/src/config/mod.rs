//! Configuration file loading for toolgate
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TOOLGATE_` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./toolgate.toml`
//! 4. Global: `$XDG_CONFIG_HOME/toolgate/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAuthConfig, FileBackendConfig, FileConfig, FileLoggingConfig,
    FileServerConfig, FileWorkflowConfig,
};
pub use loader::ConfigLoader;
