//! Add/edit student modal state.
//!
//! Validation runs over every field before the save callback is called and
//! keeps one message per failing field. A failed save leaves the modal open
//! with the form intact; a successful one resets and closes it.

use std::future::Future;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{describe, HanamiError, HanamiResult, ValidationError};
use crate::models::{Student, StudentFormData, GRADES};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("Invalid email regex pattern")
});

/// Address check used by the student form.
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    Name,
    Grade,
    Email,
    ParentEmail,
    AccessCode,
}

impl StudentField {
    pub fn label(&self) -> &'static str {
        match self {
            StudentField::Name => "Student Name",
            StudentField::Grade => "Grade",
            StudentField::Email => "Student Email (Optional)",
            StudentField::ParentEmail => "Parent Email",
            StudentField::AccessCode => "Access Code",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            StudentField::Name => "name",
            StudentField::Grade => "grade",
            StudentField::Email => "email",
            StudentField::ParentEmail => "parentEmail",
            StudentField::AccessCode => "accessCode",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StudentModal {
    open: bool,
    editing: Option<Student>,
    form: StudentFormData,
    focus: usize,
    field_errors: Vec<ValidationError>,
    is_submitting: bool,
    error: Option<String>,
}

impl StudentModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_new(&mut self) {
        *self = Self {
            open: true,
            ..Self::default()
        };
    }

    pub fn open_edit(&mut self, student: &Student) {
        *self = Self {
            open: true,
            editing: Some(student.clone()),
            form: StudentFormData::from(student),
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The student being edited, if any.
    pub fn editing(&self) -> Option<&Student> {
        self.editing.as_ref()
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Student"
        } else {
            "Add Student"
        }
    }

    pub fn form(&self) -> &StudentFormData {
        &self.form
    }

    /// Fields shown, in tab order. The access code only exists for
    /// students the server has already issued one to.
    pub fn fields(&self) -> Vec<StudentField> {
        let mut fields = vec![
            StudentField::Name,
            StudentField::Grade,
            StudentField::Email,
            StudentField::ParentEmail,
        ];
        if self.editing.is_some() {
            fields.push(StudentField::AccessCode);
        }
        fields
    }

    pub fn focused(&self) -> StudentField {
        let fields = self.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let count = self.fields().len();
        self.focus = (self.focus + count - 1) % count;
    }

    pub fn is_read_only(&self, field: StudentField) -> bool {
        field == StudentField::AccessCode
    }

    pub fn value(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => &self.form.name,
            StudentField::Grade => &self.form.grade,
            StudentField::Email => &self.form.email,
            StudentField::ParentEmail => &self.form.parent_email,
            StudentField::AccessCode => &self.form.access_code,
        }
    }

    /// Set a field. Read-only fields are refused.
    pub fn set(&mut self, field: StudentField, value: impl Into<String>) -> bool {
        if self.is_read_only(field) {
            return false;
        }
        let value = value.into();
        match field {
            StudentField::Name => self.form.name = value,
            StudentField::Grade => self.form.grade = value,
            StudentField::Email => self.form.email = value,
            StudentField::ParentEmail => self.form.parent_email = value,
            StudentField::AccessCode => return false,
        }
        true
    }

    /// Advance the grade select: blank, 1st, ..., 6th, blank.
    pub fn cycle_grade(&mut self) {
        let next = match GRADES.iter().position(|g| *g == self.form.grade) {
            None => GRADES[0].to_string(),
            Some(i) if i + 1 < GRADES.len() => GRADES[i + 1].to_string(),
            Some(_) => String::new(),
        };
        self.form.grade = next;
    }

    pub fn field_error(&self, field: StudentField) -> Option<String> {
        self.field_errors
            .iter()
            .find(|e| e.field() == field.key())
            .map(|e| e.to_string())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    fn check(form: &StudentFormData) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut reject = |field: &'static str, message: &str| {
            errors.push(ValidationError::Field {
                field,
                message: message.to_string(),
            });
        };

        if form.name.chars().count() < 2 {
            reject("name", "Name must be at least 2 characters");
        }
        if !form.email.is_empty() && !is_valid_email(&form.email) {
            reject("email", "Invalid email address");
        }
        if form.grade.is_empty() {
            reject("grade", "Grade is required");
        }
        if !form.parent_email.is_empty() && !is_valid_email(&form.parent_email) {
            reject("parentEmail", "Invalid parent email address");
        }
        errors
    }

    /// Validate every field, keeping per-field messages. Returns the first.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.field_errors = Self::check(&self.form);
        match self.field_errors.first() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// Validate, then hand the form data to `save`.
    pub async fn submit<F, Fut>(&mut self, save: F) -> HanamiResult<()>
    where
        F: FnOnce(StudentFormData) -> Fut,
        Fut: Future<Output = HanamiResult<()>>,
    {
        self.validate()?;

        self.is_submitting = true;
        self.error = None;
        let result = save(self.form.clone()).await;
        self.is_submitting = false;

        match result {
            Ok(()) => {
                *self = Self::default();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(code = err.error_code(), "saving student failed: {}", err);
                let message = describe(&err, "Failed to save student");
                self.error = Some(message.clone());
                Err(HanamiError::message(message))
            }
        }
    }
}
