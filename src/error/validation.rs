//! Client-side validation errors.
//!
//! Raised by the form state machines before any request is issued. The
//! `Display` text is exactly what the form banner shows.

use thiserror::Error;

use crate::models::Language;

/// A form failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Description is required")]
    DescriptionRequired,

    #[error("At least one step is required")]
    StepsRequired,

    #[error("Title in {} is required", .0.name())]
    TranslatedTitleRequired(Language),

    #[error("Description in {} is required", .0.name())]
    TranslatedDescriptionRequired(Language),

    /// A single named field was rejected (student form).
    #[error("{message}")]
    Field { field: &'static str, message: String },
}

impl ValidationError {
    /// Name of the form field the error points at.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::TitleRequired | ValidationError::TranslatedTitleRequired(_) => "title",
            ValidationError::DescriptionRequired
            | ValidationError::TranslatedDescriptionRequired(_) => "description",
            ValidationError::StepsRequired => "steps",
            ValidationError::Field { field, .. } => *field,
        }
    }

    pub fn error_code(&self) -> &'static str {
        "E_VALIDATION"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::TitleRequired.to_string(), "Title is required");
        assert_eq!(
            ValidationError::StepsRequired.to_string(),
            "At least one step is required"
        );
        assert_eq!(
            ValidationError::TranslatedTitleRequired(Language::Ja).to_string(),
            "Title in Japanese is required"
        );
        assert_eq!(
            ValidationError::TranslatedDescriptionRequired(Language::Es).to_string(),
            "Description in Spanish is required"
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(ValidationError::TitleRequired.field(), "title");
        assert_eq!(
            ValidationError::TranslatedDescriptionRequired(Language::En).field(),
            "description"
        );
        let err = ValidationError::Field {
            field: "grade",
            message: "Grade is required".to_string(),
        };
        assert_eq!(err.field(), "grade");
        assert_eq!(err.to_string(), "Grade is required");
    }
}
