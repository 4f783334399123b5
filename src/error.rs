use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an invalid input error with context
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Reasons a sort name could not be aligned with its unsorted credit.
///
/// These never escape `abbreviate` as `Err`; they ride along in
/// [`AbbreviationResult::diagnostic`](crate::artist_sort::AbbreviationResult)
/// so the caller can decide whether to log them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    #[error("surname not matched in unsorted text: surname='{surname}', unsorted='{unsorted}'")]
    SurnameNotFound { surname: String, unsorted: String },

    #[error("forename not matched: forename='{forename}', sorted remainder='{sorted_rest}'")]
    ForenameMismatch {
        forename: String,
        sorted_rest: String,
    },

    #[error("reconstructed unsorted text differs: expected='{expected}', rebuilt='{rebuilt}'")]
    ReconstructionMismatch { expected: String, rebuilt: String },
}

impl AlignmentError {
    pub fn surname_not_found(surname: impl Into<String>, unsorted: impl Into<String>) -> Self {
        Self::SurnameNotFound {
            surname: surname.into(),
            unsorted: unsorted.into(),
        }
    }

    pub fn forename_mismatch(forename: impl Into<String>, sorted_rest: impl Into<String>) -> Self {
        Self::ForenameMismatch {
            forename: forename.into(),
            sorted_rest: sorted_rest.into(),
        }
    }

    pub fn reconstruction_mismatch(expected: impl Into<String>, rebuilt: impl Into<String>) -> Self {
        Self::ReconstructionMismatch {
            expected: expected.into(),
            rebuilt: rebuilt.into(),
        }
    }

    /// Whether the error means the name pair could not be matched at all,
    /// as opposed to an internal consistency failure
    pub fn is_match_failure(&self) -> bool {
        matches!(
            self,
            AlignmentError::SurnameNotFound { .. } | AlignmentError::ForenameMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_invalid_input_helper() {
        let error = AppError::invalid_input("expected two names");
        assert!(matches!(error, AppError::InvalidInput(_)));
        assert_eq!(error.to_string(), "Invalid input: expected two names");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: AppError = io_error.into();
        assert!(matches!(error, AppError::Io(_)));
        assert_eq!(error.to_string(), "I/O error: missing");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let error: AppError = json_error.into();
        assert!(matches!(error, AppError::Json(_)));
        assert!(error.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Table>("= nope").unwrap_err();
        let error: AppError = toml_error.into();
        assert!(matches!(error, AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_surname_not_found_message() {
        let error = AlignmentError::surname_not_found("Verdi", "Joe Green");
        assert_eq!(
            error.to_string(),
            "surname not matched in unsorted text: surname='Verdi', unsorted='Joe Green'"
        );
        assert!(error.is_match_failure());
    }

    #[test]
    fn test_forename_mismatch_message() {
        let error = AlignmentError::forename_mismatch("Antonio", "A.");
        assert_eq!(
            error.to_string(),
            "forename not matched: forename='Antonio', sorted remainder='A.'"
        );
        assert!(error.is_match_failure());
    }

    #[test]
    fn test_reconstruction_mismatch_is_not_match_failure() {
        let error = AlignmentError::reconstruction_mismatch("a b", "a  b");
        assert!(!error.is_match_failure());
        assert!(error.to_string().contains("expected='a b'"));
    }
}
