use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandsError {
    #[error("IO error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CommandsError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ParseError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError { .. } => ErrorCategory::Io,
            Self::ParseError { .. } | Self::SerializationError(_) => ErrorCategory::Parse,
            Self::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::Parse => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    format!("Check that '{}' exists or pass a different path", path)
                }
                std::io::ErrorKind::PermissionDenied => {
                    format!("Check file permissions for '{}'", path)
                }
                _ => format!("Check that '{}' is readable and its directory writable", path),
            },
            Self::ParseError { path, .. } => format!(
                "Fix the JSON in '{}': it must be an array of well-formed records",
                path
            ),
            Self::SerializationError(_) => "Report this as a bug".to_string(),
            Self::InvalidConfigValueError { field, .. } => {
                format!("Pass a valid value for --{}", field.replace('_', "-"))
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError { path, source } => format!("Could not access '{}': {}", path, source),
            Self::ParseError { path, source } => {
                format!("'{}' is not valid input: {}", path, source)
            }
            Self::SerializationError(e) => format!("Could not encode output: {}", e),
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid {} '{}': {}", field, value, reason),
        }
    }

    /// The single line reported when a run fails.
    pub fn diagnostic(&self) -> String {
        format!("{} ({})", self.user_friendly_message(), self.recovery_suggestion())
    }
}

pub type Result<T> = std::result::Result<T, CommandsError>;
