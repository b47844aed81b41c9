//! Unified error type for the Hanami client.
//!
//! `HanamiError` consolidates the domain-specific error types into a single
//! enum so services and forms can share one `Result` alias and one way of
//! turning failures into banner text.

use std::fmt;

use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::network::NetworkError;
use super::validation::ValidationError;
use crate::traits::HttpError;

/// Unified error type for the Hanami client.
#[derive(Debug)]
pub enum HanamiError {
    /// Transport or HTTP status failures.
    Network(NetworkError),

    /// A form was rejected before any request was made.
    Validation(ValidationError),

    /// A JSON payload could not be encoded or decoded.
    Decode { message: String },

    /// Invalid configuration.
    Config { message: String },

    /// An operation failed with a caller-supplied message (save callbacks).
    Message(String),

    /// An operation failed; `message` is the banner text and `cause` the
    /// underlying error.
    Failed {
        message: String,
        cause: Box<HanamiError>,
    },

    /// Wrapped error with additional context.
    WithContext {
        error: Box<HanamiError>,
        context: ErrorContext,
    },
}

impl HanamiError {
    /// Build an error carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        HanamiError::Message(message.into())
    }

    /// Wrap `cause` under a banner message of its own.
    pub fn failed(message: impl Into<String>, cause: HanamiError) -> Self {
        HanamiError::Failed {
            message: message.into(),
            cause: Box::new(cause),
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            HanamiError::Network(err) if err.is_server_side() => ErrorCategory::Server,
            HanamiError::Network(_) => ErrorCategory::Network,
            HanamiError::Validation(_) => ErrorCategory::User,
            HanamiError::Decode { .. } => ErrorCategory::Client,
            HanamiError::Config { .. } => ErrorCategory::Configuration,
            HanamiError::Message(_) => ErrorCategory::Server,
            HanamiError::Failed { cause, .. } => cause.category(),
            HanamiError::WithContext { error, .. } => error.category(),
        }
    }

    /// Get a user-friendly error message.
    ///
    /// Context is deliberately left out: it belongs in the log, not the banner.
    pub fn user_message(&self) -> String {
        match self {
            HanamiError::Network(err) => err.user_message(),
            HanamiError::Validation(err) => err.to_string(),
            HanamiError::Decode { .. } => {
                "Received an invalid response from the server. Please try again.".to_string()
            }
            HanamiError::Config { message } => message.clone(),
            HanamiError::Message(message) => message.clone(),
            HanamiError::Failed { message, .. } => message.clone(),
            HanamiError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            HanamiError::Network(err) => err.error_code(),
            HanamiError::Validation(err) => err.error_code(),
            HanamiError::Decode { .. } => "E_DECODE",
            HanamiError::Config { .. } => "E_CONFIG",
            HanamiError::Message(_) => "E_MESSAGE",
            HanamiError::Failed { cause, .. } => cause.error_code(),
            HanamiError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        HanamiError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            HanamiError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &HanamiError {
        match self {
            HanamiError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// The error this one was raised from, if any.
    pub fn cause(&self) -> Option<&HanamiError> {
        match self.inner() {
            HanamiError::Failed { cause, .. } => Some(cause),
            _ => None,
        }
    }

    /// The validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self.inner() {
            HanamiError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for HanamiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HanamiError::Network(err) => write!(f, "{}", err),
            HanamiError::Validation(err) => write!(f, "{}", err),
            HanamiError::Decode { message } => write!(f, "Decode error: {}", message),
            HanamiError::Config { message } => write!(f, "Configuration error: {}", message),
            HanamiError::Message(message) => write!(f, "{}", message),
            HanamiError::Failed { message, cause } => write!(f, "{}: {}", message, cause),
            HanamiError::WithContext { error, context } => {
                write!(f, "{} ({})", error, context)
            }
        }
    }
}

impl std::error::Error for HanamiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HanamiError::Network(err) => Some(err),
            HanamiError::Validation(err) => Some(err),
            HanamiError::Failed { cause, .. } => Some(cause.as_ref()),
            HanamiError::WithContext { error, .. } => error.source(),
            _ => None,
        }
    }
}

impl From<NetworkError> for HanamiError {
    fn from(err: NetworkError) -> Self {
        HanamiError::Network(err)
    }
}

impl From<ValidationError> for HanamiError {
    fn from(err: ValidationError) -> Self {
        HanamiError::Validation(err)
    }
}

impl From<HttpError> for HanamiError {
    fn from(err: HttpError) -> Self {
        HanamiError::Network(err.into())
    }
}

impl From<serde_json::Error> for HanamiError {
    fn from(err: serde_json::Error) -> Self {
        HanamiError::Decode {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let net: HanamiError = NetworkError::Timeout {
            operation: "list_content".to_string(),
            message: "30s".to_string(),
        }
        .into();
        assert_eq!(net.category(), ErrorCategory::Network);

        let server: HanamiError = NetworkError::HttpStatus {
            status: 502,
            message: "bad gateway".to_string(),
        }
        .into();
        assert_eq!(server.category(), ErrorCategory::Server);

        let validation: HanamiError = ValidationError::TitleRequired.into();
        assert_eq!(validation.category(), ErrorCategory::User);
    }

    #[test]
    fn test_user_message_skips_context() {
        let err: HanamiError = ValidationError::DescriptionRequired.into();
        let err = err.with_context(ErrorContext::new("submit_content"));
        assert_eq!(err.user_message(), "Description is required");
        assert!(err.to_string().contains("[submit_content]"));
    }

    #[test]
    fn test_as_validation_sees_through_context() {
        let err: HanamiError = ValidationError::StepsRequired.into();
        let err = err.with_context(ErrorContext::new("submit_content"));
        assert_eq!(err.as_validation(), Some(&ValidationError::StepsRequired));
        assert_eq!(err.error_code(), "E_VALIDATION");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: HanamiError = json_err.into();
        assert!(matches!(err, HanamiError::Decode { .. }));
        assert_eq!(err.category(), ErrorCategory::Client);
    }

    #[test]
    fn test_failed_keeps_cause() {
        let cause: HanamiError = NetworkError::HttpStatus {
            status: 503,
            message: "db down".to_string(),
        }
        .into();
        let err = HanamiError::failed("Failed to load games", cause)
            .with_context(ErrorContext::new("load_games"));

        assert_eq!(err.user_message(), "Failed to load games");
        assert!(err.to_string().contains("db down"));
        assert_eq!(err.category(), ErrorCategory::Server);
        assert!(matches!(
            err.cause(),
            Some(HanamiError::Network(NetworkError::HttpStatus { status: 503, .. }))
        ));
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert!(source.is_some_and(|s| s.contains("db down")));
    }

    #[test]
    fn test_http_error_conversion() {
        let err: HanamiError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert!(matches!(
            err,
            HanamiError::Network(NetworkError::ConnectionFailed { .. })
        ));
    }
}
