use serde::Serialize;
use thiserror::Error;
use crate::enums::change_status::ChangeStatus;
use crate::enums::review_stage::ReviewStage;

#[derive(Debug, Clone, Serialize, Error)]
#[serde(tag = "kind")]
pub enum ReviewError {
    // Review gating
    #[error("{message}")]
    ValidationError {
        message: String,
        pending: Vec<String>,
    },
    #[error("change '{change_id}' cannot move from {from} to {to}")]
    StatusTransition {
        change_id: String,
        from: ChangeStatus,
        to: ChangeStatus,
    },
    #[error("change '{change_id}' not found")]
    ChangeNotFound {
        change_id: String,
    },

    // Merge errors
    #[error("could not apply span '{span}' of change '{change_id}' at line {line_number}: {reason}")]
    UnappliedSpan {
        change_id: String,
        line_number: usize,
        span: String,
        reason: String,
    },

    // Workflow errors
    #[error("cannot {operation} while {actual}; expected {expected}")]
    StageError {
        operation: String,
        expected: ReviewStage,
        actual: ReviewStage,
    },

    // Document source errors
    #[error("document '{document}' failed during {operation}: {reason}")]
    DocumentError {
        document: String,
        operation: String,
        reason: String,
    },

    // Configuration errors
    #[error("configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Parser errors
    #[error("parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // Session errors
    #[error("review session '{session_id}' not found")]
    SessionNotFound {
        session_id: String,
    },

    // System errors
    #[error("system error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl ReviewError {
    pub fn pending_changes(pending: Vec<String>) -> Self {
        Self::ValidationError {
            message: format!("{} change(s) still pending review", pending.len()),
            pending,
        }
    }

    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn document_error(document: &str, operation: &str, reason: &str) -> Self {
        Self::DocumentError {
            document: document.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn stage_error(operation: &str, expected: ReviewStage, actual: ReviewStage) -> Self {
        Self::StageError {
            operation: operation.to_string(),
            expected,
            actual,
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ValidationError { .. } => true,
            Self::StatusTransition { .. } => true,
            Self::ChangeNotFound { .. } => true,
            Self::StageError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::UnappliedSpan { .. } => false,
            Self::SessionNotFound { .. } => false,
            Self::SystemError { .. } => false,
            _ => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::DocumentError { .. } => ErrorSeverity::High,
            Self::UnappliedSpan { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::SessionNotFound { .. } => ErrorSeverity::Medium,
            Self::StageError { .. } => ErrorSeverity::Medium,
            Self::ChangeNotFound { .. } => ErrorSeverity::Medium,
            Self::StatusTransition { .. } => ErrorSeverity::Low,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ValidationError { message, pending } => {
                let mut msg = format!("Please review all changes before proceeding: {}", message);
                if !pending.is_empty() {
                    msg.push_str(&format!("\n💡 Pending: {}", pending.join(", ")));
                }
                msg
            }
            Self::StatusTransition { .. } => {
                format!("{}\n💡 Each change can be approved or rejected exactly once", self)
            }
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ParseError { content_type, line_number, reason } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                msg.push_str("\n💡 Check the format and syntax of the input");
                msg
            }
            Self::UnappliedSpan { .. } => {
                format!("{}\n💡 Switch merge.strategy to \"spliced\" or disable merge.strict", self)
            }
            Self::DocumentError { .. } => {
                format!("{}\n💡 Check the document path and permissions", self)
            }
            _ => self.to_string(),
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for review operations
pub type ReviewResult<T> = Result<T, ReviewError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &ReviewError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for ReviewError {
    fn from(error: std::io::Error) -> Self {
        ReviewError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReviewError {
    fn from(error: serde_json::Error) -> Self {
        ReviewError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for ReviewError {
    fn from(error: toml::de::Error) -> Self {
        ReviewError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}
