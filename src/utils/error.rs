use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Rendered output is not valid TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Template rendering error: {message}")]
    TemplateError { message: String },
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Template,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScaffoldError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScaffoldError::IoError(_) => ErrorCategory::Io,
            ScaffoldError::MissingConfigError { .. }
            | ScaffoldError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            ScaffoldError::SerializationError(_)
            | ScaffoldError::TomlError(_)
            | ScaffoldError::TemplateError { .. } => ErrorCategory::Template,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Filesystem failures stop the run cold
            ScaffoldError::IoError(_) => ErrorSeverity::Critical,
            ScaffoldError::MissingConfigError { .. }
            | ScaffoldError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ScaffoldError::SerializationError(_)
            | ScaffoldError::TomlError(_)
            | ScaffoldError::TemplateError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ScaffoldError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Make sure requirements_dev.txt and requirements_test.txt exist in the working directory".to_string()
            }
            ScaffoldError::IoError(_) => {
                "Check filesystem permissions for the output directories and rerun".to_string()
            }
            ScaffoldError::MissingConfigError { field } => {
                format!("Set the '{}' field in the configuration block and rerun", field)
            }
            ScaffoldError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' field in the configuration block and rerun", field)
            }
            ScaffoldError::SerializationError(_) => {
                "Check the repository identifiers used to build the descriptor".to_string()
            }
            ScaffoldError::TomlError(_) | ScaffoldError::TemplateError { .. } => {
                "Check configuration values for characters that break TOML quoting".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScaffoldError::IoError(e) => format!("File operation failed: {}", e),
            ScaffoldError::SerializationError(_) => {
                "Could not serialize the repository descriptor".to_string()
            }
            ScaffoldError::TomlError(_) => {
                "The generated build configuration is not valid TOML".to_string()
            }
            ScaffoldError::MissingConfigError { field } => {
                format!("Configuration is missing the '{}' field", field)
            }
            ScaffoldError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            ScaffoldError::TemplateError { message } => {
                format!("Template rendering failed: {}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = ScaffoldError::MissingConfigError {
            field: "module_name".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("module_name"));
    }

    #[test]
    fn test_missing_file_suggestion_names_requirement_files() {
        let err = ScaffoldError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "requirements_dev.txt",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.recovery_suggestion().contains("requirements_dev.txt"));
    }
}
