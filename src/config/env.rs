//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "HTTP_PROBE";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Base URL from HTTP_PROBE_BASE_URL
    pub base_url: Option<String>,
    /// Timeout from HTTP_PROBE_TIMEOUT
    pub timeout: Option<u64>,
    /// Pause on exit from HTTP_PROBE_PAUSE
    pub pause: Option<bool>,
    /// Log level from HTTP_PROBE_LOG
    pub log_level: Option<String>,
    /// Config file from HTTP_PROBE_CONFIG
    pub config_file: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            base_url: get_env("BASE_URL"),
            timeout: get_env_parse("TIMEOUT"),
            pause: get_env_bool("PAUSE"),
            log_level: get_env("LOG"),
            config_file: get_env("CONFIG"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.base_url.is_some()
            || self.timeout.is_some()
            || self.pause.is_some()
            || self.log_level.is_some()
            || self.config_file.is_some()
    }

    /// Print current environment configuration
    pub fn print_summary(&self) {
        println!("Environment Configuration:");
        println!("  {}_BASE_URL: {:?}", ENV_PREFIX, self.base_url);
        println!("  {}_TIMEOUT:  {:?}", ENV_PREFIX, self.timeout);
        println!("  {}_PAUSE:    {:?}", ENV_PREFIX, self.pause);
        println!("  {}_LOG:      {:?}", ENV_PREFIX, self.log_level);
        println!("  {}_CONFIG:   {:?}", ENV_PREFIX, self.config_file);
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.parse().ok())
}

/// Get environment variable as boolean; unrecognised values count as unset
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).and_then(|v| parse_bool(&v))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "enabled" => Some(true),
        "0" | "false" | "no" | "off" | "disabled" => Some(false),
        _ => None,
    }
}

/// Print all HTTP_PROBE environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_BASE_URL   Root URL of the server under test");
    println!("  {ENV_PREFIX}_TIMEOUT    Request timeout in seconds");
    println!("  {ENV_PREFIX}_PAUSE      Wait for a keypress before exiting (true/false)");
    println!("  {ENV_PREFIX}_LOG        Log level (trace, debug, info, warn, error)");
    println!("  {ENV_PREFIX}_CONFIG     Path to configuration file");
    println!();
    println!("Example:");
    println!("  export {ENV_PREFIX}_BASE_URL=http://localhost:9090/");
    println!("  http-probe run --no-pause");
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sets variables for the lifetime of the guard, restoring previous
    /// values on drop
    struct EnvGuard {
        previous: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn set(vars: &[(&str, &str)]) -> Self {
            let previous = vars
                .iter()
                .map(|(k, v)| {
                    let key = format!("{ENV_PREFIX}_{k}");
                    let old = env::var(&key).ok();
                    env::set_var(&key, v);
                    (key, old)
                })
                .collect();
            Self { previous }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.previous {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
        }
    }

    #[test]
    fn test_env_config_default() {
        let config = EnvConfig::default();
        assert!(config.base_url.is_none());
        assert!(!config.has_any());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE "), Some(true));
        assert_eq!(parse_bool(" off"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("y"), None);
        assert_eq!(parse_bool(""), None);
    }

    // Every variable is touched by this single test so parallel tests never
    // observe each other's values.
    #[test]
    fn test_env_load() {
        let _guard = EnvGuard::set(&[
            ("BASE_URL", "http://10.0.0.1:8080/"),
            ("TIMEOUT", "15"),
            ("PAUSE", "off"),
            ("LOG", "debug"),
        ]);

        let config = EnvConfig::load();
        assert_eq!(config.base_url.as_deref(), Some("http://10.0.0.1:8080/"));
        assert_eq!(config.timeout, Some(15));
        assert_eq!(config.pause, Some(false));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.has_any());
    }
}
