//! Result type alias for Hanami operations.

use super::context::ErrorContext;
use super::hanami_error::HanamiError;
use crate::traits::HttpError;

/// Type alias for Results using HanamiError.
pub type HanamiResult<T> = Result<T, HanamiError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    ///
    /// ```ignore
    /// use hanami::error::{ErrorContext, ResultExt};
    ///
    /// let items = source
    ///     .list_content(&query)
    ///     .await
    ///     .context(ErrorContext::new("list_content"))?;
    /// ```
    fn context(self, ctx: ErrorContext) -> HanamiResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> HanamiResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T> ResultExt<T> for HanamiResult<T> {
    fn context(self, ctx: ErrorContext) -> HanamiResult<T> {
        self.map_err(|e| e.with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> HanamiResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

impl<T> ResultExt<T> for Result<T, HttpError> {
    fn context(self, ctx: ErrorContext) -> HanamiResult<T> {
        self.map_err(|e| HanamiError::from(e).with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> HanamiResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| HanamiError::from(e).with_context(f()))
    }
}

impl<T> ResultExt<T> for Result<T, serde_json::Error> {
    fn context(self, ctx: ErrorContext) -> HanamiResult<T> {
        self.map_err(|e| HanamiError::from(e).with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> HanamiResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| HanamiError::from(e).with_context(f()))
    }
}
