use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("Cannot read {path} as TOML: {message}")]
    FormatError { path: String, message: String },

    #[error("Manifest schema error: {message}")]
    SchemaError { message: String },

    #[error("Input error: {message}")]
    InputError { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("JSON encoding error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Manifest,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EnvError {
    pub fn schema(message: impl Into<String>) -> Self {
        Self::SchemaError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FormatError { .. } | Self::SchemaError { .. } => ErrorCategory::Manifest,
            Self::InputError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::SerializationError(_) | Self::JsonError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InputError { .. } | Self::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            Self::FormatError { .. } | Self::SchemaError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) | Self::JsonError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// Process exit code for the CLI. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::FormatError { .. } => {
                "Check that --input_path points at the directory holding a valid pyproject.toml"
            }
            Self::SchemaError { .. } => {
                "Add the missing table or group to pyproject.toml, or pick another --dep_type"
            }
            Self::InputError { .. } => "Request at least one dependency group",
            Self::InvalidConfigValueError { .. } => "Fix the command line argument and retry",
            Self::IoError(_) => "Check that --output_path is writable",
            Self::SerializationError(_) | Self::JsonError(_) => {
                "Check the dependency strings in pyproject.toml"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::FormatError { path, .. } => format!("Could not load manifest {}", path),
            Self::SchemaError { message } => format!("pyproject.toml is missing data: {}", message),
            Self::InputError { message } => format!("Nothing to write: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad argument {}: {}", field, reason)
            }
            Self::IoError(e) => format!("Could not write environment file: {}", e),
            Self::SerializationError(e) => format!("Could not render environment file: {}", e),
            Self::JsonError(e) => format!("Could not render environment file: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, EnvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_non_zero() {
        let errors = vec![
            EnvError::schema("missing project table"),
            EnvError::FormatError {
                path: "pyproject.toml".to_string(),
                message: "not found".to_string(),
            },
            EnvError::InputError {
                message: "empty dependency dictionary".to_string(),
            },
            EnvError::IoError(std::io::Error::other("disk full")),
        ];

        for e in errors {
            assert_ne!(e.exit_code(), 0, "{} should fail the process", e);
        }
    }

    #[test]
    fn test_category_and_severity() {
        let e = EnvError::schema("missing dependencies sub-table");
        assert_eq!(e.category(), ErrorCategory::Manifest);
        assert_eq!(e.severity(), ErrorSeverity::High);
        assert_eq!(e.exit_code(), 1);
        assert!(e.to_string().contains("missing dependencies sub-table"));
    }
}
