use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_nullable_string};

/// Grades offered by the student form.
pub const GRADES: [&str; 6] = ["1st", "2nd", "3rd", "4th", "5th", "6th"];

/// A student on a teacher's roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub grade: String,
    #[serde(default)]
    pub parent_email: Option<String>,
    /// Issued by the server; read-only once set.
    #[serde(default)]
    pub access_code: Option<String>,
}

/// What the student form submits. Empty strings stand for absent optional
/// fields, matching what the form inputs hold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StudentFormData {
    pub name: String,
    pub email: String,
    pub grade: String,
    pub parent_email: String,
    pub access_code: String,
}

impl From<&Student> for StudentFormData {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone().unwrap_or_default(),
            grade: student.grade.clone(),
            parent_email: student.parent_email.clone().unwrap_or_default(),
            access_code: student.access_code.clone().unwrap_or_default(),
        }
    }
}

impl StudentFormData {
    /// Turn submitted data into a roster entry with the given id.
    pub fn into_student(self, id: impl Into<String>) -> Student {
        fn non_empty(value: String) -> Option<String> {
            if value.trim().is_empty() {
                None
            } else {
                Some(value)
            }
        }

        Student {
            id: id.into(),
            name: self.name,
            email: non_empty(self.email),
            grade: self.grade,
            parent_email: non_empty(self.parent_email),
            access_code: non_empty(self.access_code),
        }
    }
}
