//! Configuration file handling and path discovery.
//!
//! Settings are layered: built-in defaults, then the TOML config file,
//! then `AVIARY_*` environment variables. The config file is created with
//! defaults on first use so there is always something to edit.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "aviary";

/// Platform server used when neither flag, environment, nor config file
/// names one.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub paths: PathsConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            paths: PathsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the platform API server.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level when no verbosity flag is given.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Override for the state directory (supports `~` and `$VAR`).
    pub state_dir: Option<String>,
}

/// Resolved filesystem locations for this invocation.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_file: PathBuf,
    pub state_dir: PathBuf,
}

impl AppPaths {
    pub fn discover(override_path: Option<PathBuf>) -> Result<Self> {
        let config_file = match override_path {
            Some(path) => {
                let expanded = expand_path(path)?;
                if expanded.is_dir() {
                    expanded.join("config.toml")
                } else {
                    expanded
                }
            }
            None => default_config_dir()?.join("config.toml"),
        };

        if config_file.parent().is_none() {
            return Err(anyhow!("invalid config file path: {config_file:?}"));
        }

        let state_dir = default_state_dir()?;

        Ok(Self {
            config_file,
            state_dir,
        })
    }

    pub fn apply_overrides(mut self, cfg: &ConsoleConfig) -> Result<Self> {
        if let Some(ref state_override) = cfg.paths.state_dir {
            self.state_dir = expand_str_path(state_override)?;
        }
        Ok(self)
    }

    /// Where the login token and user info are persisted.
    pub fn credentials_file(&self) -> PathBuf {
        self.state_dir.join("credentials.json")
    }
}

impl fmt::Display for AppPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config: {}, state: {}",
            self.config_file.display(),
            self.state_dir.display()
        )
    }
}

pub fn load_or_init_config(paths: &AppPaths) -> Result<ConsoleConfig> {
    if !paths.config_file.exists() {
        write_default_config(&paths.config_file)?;
    }

    let env_prefix = env_prefix();
    let built = Config::builder()
        .set_default("server.base_url", DEFAULT_SERVER_URL)?
        .set_default("server.timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
        .set_default("logging.level", "info")?
        .add_source(
            File::from(paths.config_file.as_path())
                .format(FileFormat::Toml)
                .required(false),
        )
        .add_source(Environment::with_prefix(env_prefix.as_str()).separator("__"))
        .build()?;

    let config: ConsoleConfig = built.try_deserialize()?;
    Ok(config)
}

pub fn write_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating config directory {parent:?}"))?;
    }

    let config = ConsoleConfig::default();
    let toml = toml::to_string_pretty(&config).context("serializing default config to TOML")?;
    let mut body = default_config_header(path);
    body.push_str(&toml);
    fs::write(path, body).with_context(|| format!("writing config file to {}", path.display()))
}

fn default_config_header(path: &Path) -> String {
    let mut buffer = String::new();
    buffer.push_str("# Configuration for ");
    buffer.push_str(APP_NAME);
    buffer.push('\n');
    buffer.push_str("# File: ");
    buffer.push_str(&path.display().to_string());
    buffer.push('\n');
    buffer.push('\n');
    buffer
}

pub fn expand_path(path: PathBuf) -> Result<PathBuf> {
    if let Some(text) = path.to_str() {
        expand_str_path(text)
    } else {
        Ok(path)
    }
}

pub fn expand_str_path(text: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(text).context("expanding path")?;
    Ok(PathBuf::from(expanded.to_string()))
}

fn default_config_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        let mut path = PathBuf::from(dir);
        path.push(APP_NAME);
        return Ok(path);
    }

    if let Some(mut dir) = dirs::config_dir() {
        dir.push(APP_NAME);
        return Ok(dir);
    }

    dirs::home_dir()
        .map(|home| home.join(".config").join(APP_NAME))
        .ok_or_else(|| anyhow!("unable to determine configuration directory"))
}

fn default_state_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("XDG_STATE_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir).join(APP_NAME));
    }

    if let Some(mut dir) = dirs::state_dir() {
        dir.push(APP_NAME);
        return Ok(dir);
    }

    dirs::home_dir()
        .map(|home| home.join(".local").join("state").join(APP_NAME))
        .ok_or_else(|| anyhow!("unable to determine state directory"))
}

pub fn env_prefix() -> String {
    APP_NAME
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = ConsoleConfig::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: ConsoleConfig = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.server.base_url, DEFAULT_SERVER_URL);
        assert_eq!(parsed.server.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(parsed.logging.level, "info");
    }

    #[test]
    fn test_write_default_config_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        write_default_config(&path).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert!(body.starts_with("# Configuration for aviary"));
        assert!(body.contains("base_url"));
    }

    #[test]
    fn test_load_or_init_creates_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AppPaths {
            config_file: dir.path().join("config.toml"),
            state_dir: dir.path().join("state"),
        };

        let config = load_or_init_config(&paths).unwrap();

        assert!(paths.config_file.exists());
        assert_eq!(config.server.base_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_config_file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AppPaths {
            config_file: dir.path().join("config.toml"),
            state_dir: dir.path().join("state"),
        };
        fs::write(
            &paths.config_file,
            "[server]\nbase_url = \"http://platform.internal:9000\"\n",
        )
        .unwrap();

        let config = load_or_init_config(&paths).unwrap();

        assert_eq!(config.server.base_url, "http://platform.internal:9000");
        assert_eq!(config.server.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_discover_treats_directory_override_as_parent() {
        let dir = tempfile::tempdir().unwrap();

        let paths = AppPaths::discover(Some(dir.path().to_path_buf())).unwrap();

        assert_eq!(paths.config_file, dir.path().join("config.toml"));
    }

    #[test]
    fn test_credentials_file_lives_under_state_dir() {
        let paths = AppPaths {
            config_file: PathBuf::from("/tmp/config.toml"),
            state_dir: PathBuf::from("/tmp/state"),
        };

        assert_eq!(
            paths.credentials_file(),
            PathBuf::from("/tmp/state/credentials.json")
        );
    }

    #[test]
    fn test_env_prefix_is_uppercase_app_name() {
        assert_eq!(env_prefix(), "AVIARY");
    }
}
