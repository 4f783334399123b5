use std::path::{Path, PathBuf};

use crate::constants::APP_DIR_NAME;

/// Returns the application directory inside the platform config directory.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux,
///   honouring `XDG_CONFIG_HOME`)
/// - Falls back to the current directory if no config directory is available
fn app_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
}

/// Returns the platform-specific path for the config file.
///
/// # Returns
/// String containing the path to `artistsort_abbrev/config.toml`
pub fn get_config_path() -> String {
    app_config_dir()
        .join("config.toml")
        .to_string_lossy()
        .into_owned()
}

/// Returns the platform-specific path for the log directory.
///
/// # Returns
/// String containing the path to the `logs` directory next to the config file
pub fn get_log_dir_path() -> String {
    app_config_dir().join("logs").to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_is_next_to_config_file() {
        let config_path = PathBuf::from(get_config_path());
        let log_dir = PathBuf::from(get_log_dir_path());

        assert_eq!(config_path.file_name().unwrap(), "config.toml");
        assert_eq!(log_dir.file_name().unwrap(), "logs");
        assert_eq!(config_path.parent(), log_dir.parent());
        assert!(config_path.parent().unwrap().ends_with(APP_DIR_NAME));
    }
}
