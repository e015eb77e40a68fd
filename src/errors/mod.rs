use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};
use crate::enums::workflow_action::WorkflowAction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplaceError {
    // One failure kind per group of boundary actions
    LoadFailure {
        target: String,
        reason: String,
    },
    ScanFailure {
        reason: String,
    },
    PreviewFailure {
        reason: String,
    },
    ApplyFailure {
        reason: String,
    },

    // Config file and settings
    ConfigurationError {
        message: String,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Content store transport
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Undecodable JSON or TOML
    ParseError {
        content_type: String,
        reason: String,
    },

    // Records the content store should never send
    ValidationError {
        field: String,
        constraint: String,
        suggestion: Option<String>,
    },

    SystemError {
        operation: String,
        reason: String,
    },

    // Bad command line arguments
    UserInputError {
        input: String,
        expected: String,
        suggestion: String,
    },
}

impl ReplaceError {
    pub fn config_error(message: &str, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            suggestion: suggestion.map(str::to_string),
        }
    }

    pub fn network_error(operation: &str, url: Option<&str>, status_code: Option<u16>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: url.map(str::to_string),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, reason: &str) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(str::to_string),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn user_input_error(input: &str, expected: &str, suggestion: &str) -> Self {
        Self::UserInputError {
            input: input.to_string(),
            expected: expected.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    /// Wraps a lower-level error into the failure kind of the action that
    /// triggered it. Errors that already are a workflow failure pass through.
    pub fn for_action(action: WorkflowAction, cause: ReplaceError) -> Self {
        if cause.is_workflow_failure() {
            return cause;
        }

        let reason = cause.reason();
        match action {
            WorkflowAction::LoadCategories => Self::LoadFailure { target: "categories".to_string(), reason },
            WorkflowAction::LoadEntries => Self::LoadFailure { target: "entries".to_string(), reason },
            WorkflowAction::Scan => Self::ScanFailure { reason },
            WorkflowAction::Preview => Self::PreviewFailure { reason },
            WorkflowAction::Apply => Self::ApplyFailure { reason },
        }
    }

    pub fn is_workflow_failure(&self) -> bool {
        matches!(
            self,
            Self::LoadFailure { .. } | Self::ScanFailure { .. } | Self::PreviewFailure { .. } | Self::ApplyFailure { .. }
        )
    }

    /// One-line description without suggestions, used when nesting errors.
    pub fn reason(&self) -> String {
        match self {
            Self::LoadFailure { reason, .. }
            | Self::ScanFailure { reason }
            | Self::PreviewFailure { reason }
            | Self::ApplyFailure { reason }
            | Self::ConfigurationFileError { reason, .. }
            | Self::SystemError { reason, .. } => reason.clone(),
            Self::NetworkError { operation, status_code, reason, .. } => match status_code {
                Some(code) => format!("{} failed with status {}: {}", operation, code, reason),
                None => format!("{} failed: {}", operation, reason),
            },
            Self::ParseError { content_type, reason } => format!("invalid {}: {}", content_type, reason),
            Self::ValidationError { field, constraint, suggestion } => match suggestion {
                Some(suggestion) => format!("{} {} ({})", field, constraint, suggestion),
                None => format!("{} {}", field, constraint),
            },
            Self::ConfigurationError { message, .. } => message.clone(),
            Self::UserInputError { input, expected, .. } => format!("invalid input '{}', expected {}", input, expected),
        }
    }

    /// Workflow failures leave the session usable, so the user can try again.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::ParseError { .. } | Self::ConfigurationFileError { .. } | Self::SystemError { .. }
        )
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ApplyFailure { .. } | Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::LoadFailure { .. }
            | Self::ScanFailure { .. }
            | Self::PreviewFailure { .. }
            | Self::NetworkError { .. }
            | Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } | Self::ConfigurationError { .. } | Self::UserInputError { .. } => {
                ErrorSeverity::Low
            }
        }
    }

    pub fn user_message(&self) -> String {
        let (headline, hint) = match self {
            Self::LoadFailure { target, reason } => (
                format!("Failed to load {}: {}", target, reason),
                Some("Check the content store URL and try again".to_string()),
            ),
            Self::ScanFailure { reason } => (
                format!("Scan failed: {}", reason),
                Some("Your selection is unchanged, you can retry the scan".to_string()),
            ),
            Self::PreviewFailure { reason } => (
                format!("Preview failed: {}", reason),
                Some("Your selection is unchanged, you can retry the preview".to_string()),
            ),
            Self::ApplyFailure { reason } => (
                format!("Apply failed, nothing was submitted: {}", reason),
                Some("The preview is still available, you can retry".to_string()),
            ),
            Self::ConfigurationError { message, suggestion } => {
                (format!("Bad configuration: {}", message), suggestion.clone())
            }
            Self::ConfigurationFileError { path, reason } => (
                format!("Cannot use config file {}: {}", path, reason),
                Some("Run 'bulk-replace init' to write a fresh sample".to_string()),
            ),
            Self::NetworkError { url, .. } => {
                let target = url.as_deref().map(|u| format!(" ({})", u)).unwrap_or_default();
                (
                    format!("Content store request failed: {}{}", self.reason(), target),
                    Some("Make sure the content store is running and reachable".to_string()),
                )
            }
            Self::ParseError { .. } | Self::ValidationError { .. } => {
                (format!("Unexpected data: {}", self.reason()), None)
            }
            Self::SystemError { operation, reason } => (format!("{} failed: {}", operation, reason), None),
            Self::UserInputError { suggestion, .. } => (self.reason(), Some(suggestion.clone())),
        };

        match hint {
            Some(hint) => format!("{}\n💡 {}", headline, hint),
            None => headline,
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for ReplaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for ReplaceError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn log_level(&self) -> log::Level {
        match self {
            Self::Low => log::Level::Warn,
            Self::Medium | Self::High | Self::Critical => log::Level::Error,
        }
    }
}

pub type ReplaceResult<T> = Result<T, ReplaceError>;

pub struct ErrorHandler;

impl ErrorHandler {
    /// Logs a command's final error at a level matching its severity.
    pub fn handle_error(error: &ReplaceError) {
        let severity = error.severity();

        log::debug!("{:?}: {}", severity, error.technical_details());
        log::log!(severity.log_level(), "❌ {}", error.user_message());

        if error.is_recoverable() {
            log::info!("🔄 Nothing was changed, you can run the command again");
        }
    }
}

impl From<std::io::Error> for ReplaceError {
    fn from(error: std::io::Error) -> Self {
        Self::system_error("file access", &error.to_string())
    }
}

impl From<serde_json::Error> for ReplaceError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse_error("JSON", &error.to_string())
    }
}

impl From<toml::de::Error> for ReplaceError {
    fn from(error: toml::de::Error) -> Self {
        Self::parse_error("TOML", error.message())
    }
}

impl From<reqwest::Error> for ReplaceError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
