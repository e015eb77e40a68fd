use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{ReplaceError, ReplaceResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> ReplaceResult<PathBuf> {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| ReplaceError::config_error(
                "Could not determine the home directory",
                Some("Set HOME or pass the content store URL explicitly"),
            ))
    }

    pub fn load() -> ReplaceResult<Config> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Reads the config at `path`, falling back to defaults when the file does
    /// not exist.
    pub fn load_from(path: &Path) -> ReplaceResult<Config> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| ReplaceError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config(path: &Path) -> ReplaceResult<()> {
        let sample_config = r#"# Bulk Replace Configuration

[gateway]
# Base URL of the content store's find & replace API
base_url = "http://localhost:1337/api/bulk-replace"

# Environment variable holding the API key sent as x-api-key
api_key_env = "BULK_REPLACE_API_KEY"

[workflow]
# Ask the content store for smart (AI-assisted) replacements by default
smart_mode = false

# Category used when none is given on the command line
# default_category = "articles"
"#;
        if path.exists() {
            return Err(ReplaceError::ConfigurationFileError {
                path: path.display().to_string(),
                reason: "file already exists".to_string(),
            });
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, sample_config)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match Url::parse(&config.gateway.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(format!("Gateway base_url must use http or https, got '{}'", url.scheme())),
            Err(e) => errors.push(format!("Gateway base_url '{}' is not a valid URL: {}", config.gateway.base_url, e)),
        }

        if config.gateway.api_key_env.as_deref().is_some_and(|name| name.trim().is_empty()) {
            errors.push("Gateway api_key_env must not be empty when set".to_string());
        }

        if config.workflow.default_category.as_deref().is_some_and(|id| id.trim().is_empty()) {
            errors.push("Workflow default_category must not be empty when set".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
