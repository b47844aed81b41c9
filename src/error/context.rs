//! Error context for enriched error information.

use chrono::{DateTime, Utc};

/// Context information attached to errors for logging.
///
/// Records which operation failed and in which component, so a message shown
/// in a form banner can be traced back in the log file.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Human-readable name of the operation that failed (e.g. `list_content`).
    pub operation: String,

    /// Component that issued the operation (e.g. `games_loader`).
    pub component: Option<String>,

    /// Resource identifier involved, if any (content id, game title).
    pub resource: Option<String>,

    /// Timestamp when the error occurred.
    pub timestamp: DateTime<Utc>,
}

impl ErrorContext {
    /// Create a new ErrorContext for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            component: None,
            resource: None,
            timestamp: Utc::now(),
        }
    }

    /// Set the component for this context.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Set the resource for this context.
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Get a formatted context string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];

        if let Some(ref component) = self.component {
            parts.push(format!("component={}", component));
        }

        if let Some(ref resource) = self.resource {
            parts.push(format!("resource={}", resource));
        }

        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));

        parts.join(" ")
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.operation)?;

        if let Some(ref resource) = self.resource {
            write!(f, " resource={}", resource)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_new() {
        let ctx = ErrorContext::new("list_content");

        assert_eq!(ctx.operation, "list_content");
        assert!(ctx.component.is_none());
        assert!(ctx.resource.is_none());
    }

    #[test]
    fn test_context_builder_pattern() {
        let ctx = ErrorContext::new("create_content")
            .with_component("games_loader")
            .with_resource("Breathing Bubbles");

        assert_eq!(ctx.component, Some("games_loader".to_string()));
        assert_eq!(ctx.resource, Some("Breathing Bubbles".to_string()));
    }

    #[test]
    fn test_context_log_string() {
        let ctx = ErrorContext::new("update_settings").with_component("settings_editor");
        let log = ctx.to_log_string();

        assert!(log.contains("operation=update_settings"));
        assert!(log.contains("component=settings_editor"));
        assert!(log.contains("timestamp="));
    }

    #[test]
    fn test_context_display() {
        let ctx = ErrorContext::new("delete_content").with_resource("c-42");
        assert_eq!(ctx.to_string(), "[delete_content] resource=c-42");
    }
}
