use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Search request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Config,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScoutError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScoutError::HttpError(_) => ErrorCategory::Network,
            ScoutError::CsvError(_) | ScoutError::ProcessingError { .. } => ErrorCategory::Data,
            ScoutError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            ScoutError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ScoutError::HttpError(_) => ErrorSeverity::Medium,
            ScoutError::CsvError(_) | ScoutError::ProcessingError { .. } => ErrorSeverity::High,
            ScoutError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ScoutError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ScoutError::HttpError(_) => {
                "Check network connectivity and the --search-endpoint URL, then rerun".to_string()
            }
            ScoutError::CsvError(_) => {
                "Check the input file for malformed rows or a missing header".to_string()
            }
            ScoutError::IoError(_) => {
                "Check that the output path exists and is writable".to_string()
            }
            ScoutError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value passed via --{}", field.replace('_', "-"))
            }
            ScoutError::ProcessingError { .. } => {
                "Check that the input file contains at least one phone name".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScoutError::HttpError(_) => "Could not reach the search endpoint".to_string(),
            ScoutError::CsvError(_) => "Could not process CSV data".to_string(),
            ScoutError::IoError(_) => "Could not read or write a file".to_string(),
            ScoutError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            ScoutError::ProcessingError { message } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_and_category_mapping() {
        let err = ScoutError::ProcessingError {
            message: "no phone names to look up".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.severity(), ErrorSeverity::High);

        let err = ScoutError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_config_error_suggestion_names_the_flag() {
        let err = ScoutError::InvalidConfigValueError {
            field: "request_timeout_secs".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 300".to_string(),
        };
        assert!(err.recovery_suggestion().contains("--request-timeout-secs"));
    }
}
