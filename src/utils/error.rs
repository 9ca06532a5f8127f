use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverageError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Batch input error: {message}")]
    InputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CoverageError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CoverageError::ConfigValidationError { .. }
            | CoverageError::InvalidConfigValueError { .. }
            | CoverageError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CoverageError::CsvError(_) | CoverageError::InputError { .. } => ErrorCategory::Input,
            CoverageError::IoError(_) | CoverageError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 根據錯誤嚴重程度決定 CLI 退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CoverageError::IoError(e) => format!("Could not read or write a file: {}", e),
            CoverageError::CsvError(e) => format!("The batch file is not valid CSV: {}", e),
            CoverageError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            CoverageError::ConfigValidationError { field, message } => {
                format!("Coverage configuration problem in '{}': {}", field, message)
            }
            CoverageError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not accepted for '{}': {}", value, field, reason)
            }
            CoverageError::MissingConfigError { field } => {
                format!("Coverage configuration is missing '{}'", field)
            }
            CoverageError::InputError { message } => format!("Batch input problem: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CoverageError::IoError(_) => "Check that the path exists and is readable/writable",
            CoverageError::CsvError(_) => "Make sure the file has a header row and consistent columns",
            CoverageError::SerializationError(_) => "Try the csv or tsv output format instead",
            CoverageError::ConfigValidationError { .. } => {
                "Make sure the file is valid TOML with [deployment] and [coverage] tables"
            }
            CoverageError::InvalidConfigValueError { .. } => {
                "Zip codes must be written as 5-digit strings, e.g. \"60431\""
            }
            CoverageError::MissingConfigError { .. } => "Add the missing key to the coverage file",
            CoverageError::InputError { .. } => {
                "Use one zip per line, or a CSV file with the configured zip column"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CoverageError>;
