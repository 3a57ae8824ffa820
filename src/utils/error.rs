use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTP transport failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Fetch failed: {message}")]
    Fetch {
        message: String,
        status: Option<u16>,
    },

    #[error("Feed parsing failed: {message}")]
    Parse { message: String },

    #[error("Text generation failed: {message}")]
    Generation { message: String },

    #[error("Configuration error in '{field}': {message}")]
    Config { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Data,
    Generation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScraperError {
    pub fn validation(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } => ErrorCategory::Input,
            Self::Http(_) | Self::Fetch { .. } => ErrorCategory::Network,
            Self::Parse { .. } | Self::Serialization(_) => ErrorCategory::Data,
            Self::Generation { .. } => ErrorCategory::Generation,
            Self::Config { .. } => ErrorCategory::Configuration,
            Self::Io(_) => ErrorCategory::System,
        }
    }

    /// Parse failures degrade to an empty result set, so they never end the
    /// process on their own.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Parse { .. } => ErrorSeverity::Low,
            Self::Http(_) | Self::Fetch { .. } | Self::Generation { .. } => ErrorSeverity::Medium,
            Self::Validation { .. } | Self::Config { .. } | Self::Serialization(_) => {
                ErrorSeverity::High
            }
            Self::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Validation { .. } => {
                "Use a non-empty term, a start offset >= 0 and a limit between 1 and 100"
            }
            Self::Http(_) => "Check your network connection and the search endpoint, then retry",
            Self::Fetch { status: Some(503), .. } => {
                "The arXiv API is busy; wait a few seconds before searching again"
            }
            Self::Fetch { .. } => "Verify the search endpoint URL and try again later",
            Self::Parse { .. } => "The endpoint did not return an Atom feed; check the endpoint URL",
            Self::Generation { .. } => {
                "Check the generator endpoint and token, or run without --explain"
            }
            Self::Config { .. } => "Fix the configuration file or the command line flags",
            Self::Serialization(_) => "Try the text output format instead",
            Self::Io(_) => "Check that the terminal output is still writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Validation { field, reason, .. } => format!("Invalid {}: {}", field, reason),
            Self::Http(_) => "Error fetching data from ArXiv!".to_string(),
            Self::Fetch {
                status: Some(code), ..
            } => format!("Error fetching data from ArXiv! (HTTP {})", code),
            Self::Fetch { .. } => "Error fetching data from ArXiv!".to_string(),
            Self::Parse { .. } => "The ArXiv response could not be read".to_string(),
            Self::Generation { message } => format!("Could not generate an explanation: {}", message),
            Self::Config { field, message } => format!("Configuration problem in {}: {}", field, message),
            Self::Serialization(e) => format!("Could not serialize output: {}", e),
            Self::Io(e) => format!("Output error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScraperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message_carries_status() {
        let err = ScraperError::Fetch {
            message: "server error".to_string(),
            status: Some(500),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("HTTP 500"));
    }

    #[test]
    fn test_validation_error_is_input_category() {
        let err = ScraperError::validation("limit", 0, "Value must be between 1 and 100");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.to_string(),
            "Invalid value for 'limit' (0): Value must be between 1 and 100"
        );
    }

    #[test]
    fn test_parse_error_is_low_severity() {
        let err = ScraperError::Parse {
            message: "unexpected EOF".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }
}
