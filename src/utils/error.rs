use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid numeric id '{input}': {reason}")]
    FormatError { input: String, reason: String },

    #[error("Offset {offset} is out of range for a sequence of length {len}")]
    IndexError { offset: usize, len: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl QueryError {
    /// 是否為設定相關錯誤（決定程式的退出碼）
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            QueryError::ConfigError { .. } | QueryError::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QueryError::FormatError { input, .. } => {
                format!("'{}' is not a store id that fits in four digits", input)
            }
            QueryError::IndexError { offset, len } => {
                format!("Cannot pick employee #{} out of {} entries", offset, len)
            }
            QueryError::IoError(e) => format!("Could not read a file: {}", e),
            QueryError::SerializationError(e) => format!("Could not render JSON output: {}", e),
            QueryError::ConfigError { message } => format!("Configuration problem: {}", message),
            QueryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QueryError::FormatError { .. } => "Pass a non-negative integer between 0 and 9999",
            QueryError::IndexError { .. } => "Use an offset smaller than the cycle target length",
            QueryError::IoError(_) => "Check that the file exists and is readable",
            QueryError::SerializationError(_) => "Retry with the text output format",
            QueryError::ConfigError { .. } => "Check the TOML syntax of the configuration file",
            QueryError::InvalidConfigValueError { .. } => {
                "Fix the reported setting or remove it to use the default"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
