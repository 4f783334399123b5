use crate::artist_sort::{AlignerOptions, CacheKeyMode};
use crate::constants::env_vars;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Sort-name abbreviation behaviour.
    #[serde(default)]
    pub abbreviation: AbbreviationSettings,
}

/// Settings passed through to the aligner
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct AbbreviationSettings {
    /// Reject an abbreviation whose rebuilt unsorted text differs from the input.
    /// Defaults to true.
    #[serde(default = "default_strict_reconstruction")]
    pub strict_reconstruction: bool,
    /// What identifies a cached abbreviation: "sorted" (default) or "pair".
    #[serde(default)]
    pub cache_key: CacheKeyMode,
}

fn default_strict_reconstruction() -> bool {
    true
}

impl Default for AbbreviationSettings {
    fn default() -> Self {
        Self {
            strict_reconstruction: default_strict_reconstruction(),
            cache_key: CacheKeyMode::default(),
        }
    }
}

impl AbbreviationSettings {
    pub fn aligner_options(&self) -> AlignerOptions {
        AlignerOptions {
            strict_reconstruction: self.strict_reconstruction,
            cache_key: self.cache_key,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `ARTISTSORT_LOG_FILE` - Override log file path
    /// - `ARTISTSORT_STRICT_RECONSTRUCTION` - Override `abbreviation.strict_reconstruction`
    /// - `ARTISTSORT_CACHE_KEY` - Override `abbreviation.cache_key`
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Error occurred while reading, parsing or validating
    pub async fn load() -> Result<Self, AppError> {
        let mut config = Self::load_stored().await?;

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Loads the config file exactly as stored, without environment overrides.
    /// Falls back to defaults when no config file exists.
    ///
    /// Use this as the base for anything that is saved back to disk, so that
    /// per-run `ARTISTSORT_*` values never end up in the file.
    pub async fn load_stored() -> Result<Self, AppError> {
        let config_path = get_config_path();

        if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Applies `ARTISTSORT_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(strict) = std::env::var(env_vars::STRICT_RECONSTRUCTION) {
            self.abbreviation.strict_reconstruction =
                strict.trim().parse::<bool>().map_err(|_| {
                    AppError::config_error(format!(
                        "{} must be 'true' or 'false', got '{strict}'",
                        env_vars::STRICT_RECONSTRUCTION
                    ))
                })?;
        }

        if let Ok(cache_key) = std::env::var(env_vars::CACHE_KEY) {
            self.abbreviation.cache_key = cache_key
                .parse::<CacheKeyMode>()
                .map_err(|e| AppError::config_error(format!("{}: {e}", env_vars::CACHE_KEY)))?;
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using defaults)");
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Strict Reconstruction:");
        println!("{}", config.abbreviation.strict_reconstruction);
        println!("────────────────────────────────────");
        println!("Cache Key:");
        println!("{:?}", config.abbreviation.cache_key);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", crate::constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::STRICT_RECONSTRUCTION);
            std::env::remove_var(env_vars::CACHE_KEY);
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
log_file_path = "/custom/log/path"

[abbreviation]
strict_reconstruction = false
cache_key = "pair"
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert!(!config.abbreviation.strict_reconstruction);
        assert_eq!(config.abbreviation.cache_key, CacheKeyMode::Pair);
    }

    #[tokio::test]
    async fn test_config_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config, Config::default());
        assert!(config.abbreviation.strict_reconstruction);
        assert_eq!(config.abbreviation.cache_key, CacheKeyMode::Sorted);
    }

    #[tokio::test]
    async fn test_config_partial_abbreviation_section() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "[abbreviation]\ncache_key = \"pair\"\n")
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert!(config.abbreviation.strict_reconstruction);
        assert_eq!(config.abbreviation.cache_key, CacheKeyMode::Pair);
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "log_file_path = [unclosed")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_unknown_cache_key() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "[abbreviation]\ncache_key = \"both\"\n")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/path/config.toml").await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            log_file_path: Some("/custom/log/path".to_string()),
            abbreviation: AbbreviationSettings {
                strict_reconstruction: false,
                cache_key: CacheKeyMode::Pair,
            },
        };

        original_config
            .save_to_path(&config_path_str)
            .await
            .unwrap();
        assert!(config_path.exists());

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_config_without_log_file_path_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(!toml_string.contains("log_file_path"));
        assert!(toml_string.contains("strict_reconstruction = true"));
    }

    #[test]
    fn test_aligner_options_from_settings() {
        let settings = AbbreviationSettings {
            strict_reconstruction: false,
            cache_key: CacheKeyMode::Pair,
        };
        let options = settings.aligner_options();
        assert!(!options.strict_reconstruction);
        assert_eq!(options.cache_key, CacheKeyMode::Pair);
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("artistsort_abbrev"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("artistsort_abbrev"));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::LOG_FILE, "/env/log/path.log");
            std::env::set_var(env_vars::STRICT_RECONSTRUCTION, "false");
            std::env::set_var(env_vars::CACHE_KEY, "pair");
        }

        let mut config = Config::default();
        let result = config.apply_env_overrides();
        clear_env();

        result.unwrap();
        assert_eq!(config.log_file_path, Some("/env/log/path.log".to_string()));
        assert!(!config.abbreviation.strict_reconstruction);
        assert_eq!(config.abbreviation.cache_key, CacheKeyMode::Pair);
    }

    #[test]
    #[serial]
    fn test_environment_variable_invalid_bool() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::STRICT_RECONSTRUCTION, "sometimes");
        }

        let mut config = Config::default();
        let result = config.apply_env_overrides();
        clear_env();

        assert!(matches!(result.unwrap_err(), AppError::Config(_)));
    }

    #[test]
    #[serial]
    fn test_environment_variable_invalid_cache_key() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::CACHE_KEY, "everything");
        }

        let mut config = Config::default();
        let result = config.apply_env_overrides();
        clear_env();

        let error = result.unwrap_err();
        assert!(matches!(error, AppError::Config(_)));
        assert!(error.to_string().contains("ARTISTSORT_CACHE_KEY"));
    }
}
