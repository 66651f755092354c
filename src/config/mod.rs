//! Configuration module
//!
//! Resolves the effective settings from defaults, an optional config file,
//! `HTTP_PROBE_*` environment variables and finally the `run` flags.

mod env;

pub use env::{print_env_help, EnvConfig};

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::RunArgs;
use crate::http::DEFAULT_TIMEOUT_SECS;
use crate::utils::LogLevel;

/// Base URL of the server under test when nothing overrides it
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// Config files picked up from the working directory, in order
const CONFIG_LOCATIONS: &[&str] = &["http-probe.yaml", "http-probe.yml", "http-probe.json"];

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root address of the server under test
    pub base_url: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,

    /// Wait for a keypress before exiting
    pub pause_on_exit: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            pause_on_exit: true,
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Self = if is_yaml_file(path) {
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?
        } else {
            serde_json::from_str(&content).context("Failed to parse JSON config")?
        };

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_yaml_file(path) {
            serde_yaml::to_string(self).context("Failed to serialize config")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        };

        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Find a configuration file in `dir`
    pub fn find_in(dir: &Path) -> Option<PathBuf> {
        CONFIG_LOCATIONS
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Resolve configuration: explicit file, else `HTTP_PROBE_CONFIG`, else
    /// a file discovered in the working directory, else defaults;
    /// environment variables applied on top.
    pub fn resolve(explicit: Option<&Path>, env: &EnvConfig) -> Result<Self> {
        Self::resolve_in(explicit, env, Path::new("."))
    }

    fn resolve_in(explicit: Option<&Path>, env: &EnvConfig, search_dir: &Path) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env.config_file.as_ref().map(PathBuf::from))
            .or_else(|| Self::find_in(search_dir));

        let mut config = match path {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };

        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    /// Override fields that are set in the environment
    pub fn apply_env(&mut self, env: &EnvConfig) {
        if let Some(url) = &env.base_url {
            self.base_url = url.clone();
        }
        if let Some(timeout) = env.timeout {
            self.timeout_secs = timeout;
        }
        if let Some(pause) = env.pause {
            self.pause_on_exit = pause;
        }
        if let Some(level) = &env.log_level {
            self.log_level = level.clone();
        }
    }

    /// Override fields with the `run` flags that were given
    pub fn apply_run_args(&mut self, args: &RunArgs) -> Result<()> {
        if let Some(url) = &args.base_url {
            self.base_url = url.clone();
        }
        if let Some(timeout) = args.timeout {
            self.timeout_secs = timeout;
        }
        if args.no_pause {
            self.pause_on_exit = false;
        }
        self.validate()
    }

    pub fn log_level(&self) -> Result<LogLevel> {
        self.log_level
            .parse::<LogLevel>()
            .map_err(|e: String| anyhow!("log_level: {e}"))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            bail!("base_url must not be empty");
        }
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be greater than zero");
        }
        self.log_level()?;
        Ok(())
    }
}

fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}
