use crate::domain::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    #[serde(default = "default_service_url")]
    pub service_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    pub http_proxy: Option<String>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            http_proxy: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            logging: Logging::default(),
            client: ClientConfig::default(),
        }
    }
}

// Defaults
fn default_theme() -> String {
    "plain".to_string()
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}
fn default_service_url() -> String {
    "https://translate.googleapis.com".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_user_agent() -> String {
    concat!("translator-simplified/", env!("CARGO_PKG_VERSION")).to_string()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("translator-simplified").join("config.toml"))
}

/// Load the user's config file, falling back to defaults when it is missing
/// or cannot be parsed.
pub fn load_config() -> Result<Config, ConfigError> {
    if let Some(path) = get_config_path() {
        if path.exists() {
            return match load_config_from(&path) {
                Ok(config) => Ok(config),
                Err(ConfigError::Toml(e)) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                    Ok(Config::default())
                }
                Err(e) => Err(e),
            };
        }
    }

    Ok(Config::default())
}

pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str::<Config>(&content)?)
}

/// Write the default config to `path` unless a file is already there.
///
/// Returns `false` when the file existed and was left untouched.
pub fn write_config_sample(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml_content = toml::to_string_pretty(&Config::default())?;
    fs::write(path, toml_content)?;
    Ok(true)
}

pub fn generate_config_sample() -> Result<(), ConfigError> {
    let path = get_config_path().ok_or(ConfigError::NoConfigDir)?;

    if write_config_sample(&path)? {
        println!("Generated config file at: {}", path.display());
    } else {
        eprintln!("Config file already exists at: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, "plain");
        assert!(config.logging.enable);
        assert_eq!(config.logging.level, "WARN");
        assert!(config.logging.path.is_none());
        assert_eq!(config.client.service_url, "https://translate.googleapis.com");
        assert_eq!(config.client.timeout_secs, 10);
        assert!(config.client.user_agent.starts_with("translator-simplified/"));
        assert!(config.client.http_proxy.is_none());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
[client]
timeout_secs = 3
"#,
        )
        .unwrap();
        assert_eq!(config.client.timeout_secs, 3);
        assert_eq!(config.client.service_url, default_service_url());
        assert_eq!(config.logging, Logging::default());
        assert_eq!(config.theme, "plain");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_roundtrips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(text.contains("[logging]"));
        assert!(text.contains("[client]"));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
