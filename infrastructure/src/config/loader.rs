//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file name
const PROJECT_CONFIG: &str = "toolgate.toml";

/// Environment variable prefix (`TOOLGATE_AUTH__SECRET` → `auth.secret`)
const ENV_PREFIX: &str = "TOOLGATE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `TOOLGATE_` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./toolgate.toml`
    /// 4. Global: `~/.config/toolgate/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load defaults and environment only (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::env())
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        // An explicit path must exist, so no existence check here
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Self::env())
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__")
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("toolgate").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        let path = Path::new(PROJECT_CONFIG);
        path.exists().then(|| path.to_path_buf())
    }

    /// Describe the config file locations being used
    pub fn describe_sources(config_path: Option<&PathBuf>) -> Vec<String> {
        let mut sources = Vec::new();

        if let Some(path) = config_path {
            sources.push(format!("  [FOUND] Explicit: {}", path.display()));
        }

        match Self::project_config_path() {
            Some(path) => sources.push(format!("  [FOUND] Project: {}", path.display())),
            None => sources.push(format!("  [     ] Project: ./{}", PROJECT_CONFIG)),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            sources.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        sources.push(format!("  [     ] Env:     {}*", ENV_PREFIX));
        sources.push("  [     ] Default: built-in defaults".to_string());
        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn isolate(jail: &mut Jail) {
        let dir = jail.directory().display().to_string();
        jail.set_env("XDG_CONFIG_HOME", dir);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.to_string_lossy().contains("toolgate"));
    }

    #[test]
    fn test_project_file_loaded() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                PROJECT_CONFIG,
                r#"
[auth]
secret = "from-file"
allowed_tenant = "test123"
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.auth.secret, "from-file");
            assert_eq!(config.backend.timeout_seconds, 10);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_path_overrides_project() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(PROJECT_CONFIG, "[auth]\nallowed_tenant = \"project\"\n")?;
            jail.create_file("override.toml", "[auth]\nallowed_tenant = \"explicit\"\n")?;

            let path = PathBuf::from("override.toml");
            let config = ConfigLoader::load(Some(&path)).map_err(|e| *e)?;
            assert_eq!(config.auth.allowed_tenant, "explicit");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(PROJECT_CONFIG, "[backend]\ntimeout_seconds = 3\n")?;
            jail.set_env("TOOLGATE_BACKEND__TIMEOUT_SECONDS", "7");
            jail.set_env("TOOLGATE_AUTH__SECRET", "from-env");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.backend.timeout_seconds, 7);
            assert_eq!(config.auth.secret, "from-env");
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        Jail::expect_with(|jail| {
            isolate(jail);
            let path = PathBuf::from("missing.toml");
            assert!(ConfigLoader::load(Some(&path)).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_without_files_ignores_project() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(PROJECT_CONFIG, "[auth]\nsecret = \"file\"\n")?;
            jail.set_env("TOOLGATE_AUTH__ALLOWED_TENANT", "env-tenant");

            let config = ConfigLoader::load_without_files().map_err(|e| *e)?;
            assert!(config.auth.secret.is_empty());
            assert_eq!(config.auth.allowed_tenant, "env-tenant");
            Ok(())
        });
    }
}
