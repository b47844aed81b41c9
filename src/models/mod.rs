mod assessment;
mod content;
mod language;
mod parent_content;
pub mod settings;
mod student;

pub use assessment::Assessment;
pub use content::{Content, ContentPatch, ContentQuery, ContentStatus, ContentType, NewContent};
pub use language::Language;
pub use parent_content::{
    ActivityStep, ParentContent, ParentContentPayload, ParentContentType, StepImage, Translation,
    DEFAULT_TARGET_AGE,
};
pub use settings::{
    CalendarChange, CalendarView, DisplayChange, EmailChange, NotificationChange, PrivacyChange,
    SettingsChange, SettingsUpdate, TeacherSettings, Theme, WeekStart,
};
pub use student::{Student, StudentFormData, GRADES};

use serde::{Deserialize, Deserializer};

/// API envelope: every response body wraps its payload in `data`.
#[derive(Debug, Clone, Deserialize, serde::Serialize, PartialEq)]
pub struct Envelope<T> {
    pub data: T,
}

/// Helper to deserialize id as either string or integer
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Helper to deserialize nullable strings as empty string
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_unwraps_data() {
        let parsed: Envelope<Vec<u32>> = serde_json::from_str(r#"{"data": [1, 2]}"#).unwrap();
        assert_eq!(parsed.data, vec![1, 2]);
    }

    #[test]
    fn test_envelope_missing_data_fails() {
        let parsed: Result<Envelope<Vec<u32>>, _> = serde_json::from_str(r#"{"items": []}"#);
        assert!(parsed.is_err());
    }
}
