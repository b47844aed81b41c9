//! Parent-facing activities with per-language translations.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_id, ContentStatus, Language};

/// What kind of parent activity this is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParentContentType {
    #[default]
    Activity,
    Discussion,
    Exercise,
}

impl ParentContentType {
    pub const ALL: [ParentContentType; 3] = [
        ParentContentType::Activity,
        ParentContentType::Discussion,
        ParentContentType::Exercise,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ParentContentType::Activity => "Activity",
            ParentContentType::Discussion => "Discussion",
            ParentContentType::Exercise => "Exercise",
        }
    }
}

/// Image attached to a step. The binary lives in object storage; only the
/// reference travels with the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepImage {
    pub url: String,
    /// Alt text per language.
    pub alt: BTreeMap<Language, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// One step of an activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ActivityStep {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<StepImage>,
}

impl ActivityStep {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Localised fields of an activity for one language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Translation {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub steps: Vec<ActivityStep>,
}

impl Translation {
    /// An empty translation whose step list mirrors `step_count` base steps.
    pub fn seeded(step_count: usize) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            materials: Vec::new(),
            steps: vec![ActivityStep::empty(); step_count],
        }
    }
}

/// A stored parent activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParentContent {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub content_type: ParentContentType,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub emotional_focus: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub steps: Vec<ActivityStep>,
    #[serde(default)]
    pub target_age: Option<(u8, u8)>,
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub translations: BTreeMap<Language, Translation>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: String,
}

/// Everything the editor hands to its save callback: the record minus the
/// server-owned id, timestamps and author.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParentContentPayload {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub content_type: ParentContentType,
    pub duration: String,
    pub emotional_focus: Vec<String>,
    pub materials: Vec<String>,
    pub steps: Vec<ActivityStep>,
    pub target_age: (u8, u8),
    pub status: ContentStatus,
    pub languages: Vec<Language>,
    pub translations: BTreeMap<Language, Translation>,
}

/// Age range used when a record does not specify one.
pub const DEFAULT_TARGET_AGE: (u8, u8) = (5, 12);

impl Default for ParentContentPayload {
    /// A new activity: one empty step, English only.
    fn default() -> Self {
        let mut translations = BTreeMap::new();
        translations.insert(Language::En, Translation::seeded(1));
        Self {
            title: String::new(),
            description: String::new(),
            content_type: ParentContentType::Activity,
            duration: String::new(),
            emotional_focus: Vec::new(),
            materials: Vec::new(),
            steps: vec![ActivityStep::empty()],
            target_age: DEFAULT_TARGET_AGE,
            status: ContentStatus::Draft,
            languages: vec![Language::En],
            translations,
        }
    }
}

impl From<&ParentContent> for ParentContentPayload {
    fn from(content: &ParentContent) -> Self {
        let languages = if content.languages.is_empty() {
            vec![Language::En]
        } else {
            content.languages.clone()
        };
        Self {
            title: content.title.clone(),
            description: content.description.clone(),
            content_type: content.content_type,
            duration: content.duration.clone(),
            emotional_focus: content.emotional_focus.clone(),
            materials: content.materials.clone(),
            steps: content.steps.clone(),
            target_age: content.target_age.unwrap_or(DEFAULT_TARGET_AGE),
            status: content.status,
            languages,
            translations: content.translations.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_payload_shape() {
        let payload = ParentContentPayload::default();
        assert_eq!(payload.steps.len(), 1);
        assert_eq!(payload.languages, vec![Language::En]);
        assert_eq!(payload.translations[&Language::En].steps.len(), 1);
        assert_eq!(payload.target_age, (5, 12));
        assert_eq!(payload.status, ContentStatus::Draft);
    }

    #[test]
    fn test_seeded_translation_mirrors_step_count() {
        let translation = Translation::seeded(3);
        assert_eq!(translation.steps.len(), 3);
        assert!(translation.steps.iter().all(|s| s.text.is_empty()));
    }

    #[test]
    fn test_parent_content_deserializes() {
        let json = r#"{
            "id": "pc-1",
            "title": "Feelings walk",
            "description": "Name feelings you notice",
            "type": "discussion",
            "steps": [{"text": "Walk"}, {"text": "Talk", "image": {"url": "s3://a.png", "alt": {"en": "A"}}}],
            "targetAge": [6, 9],
            "status": "published",
            "languages": ["en", "ja"],
            "translations": {"en": {"title": "Feelings walk", "description": "Name feelings", "steps": []}}
        }"#;
        let content: ParentContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.content_type, ParentContentType::Discussion);
        assert_eq!(content.target_age, Some((6, 9)));
        assert_eq!(content.languages, vec![Language::En, Language::Ja]);
        let image = content.steps[1].image.as_ref().unwrap();
        assert_eq!(image.alt[&Language::En], "A");

        let payload = ParentContentPayload::from(&content);
        assert_eq!(payload.target_age, (6, 9));
        assert_eq!(payload.steps.len(), 2);
    }

    #[test]
    fn test_step_without_image_omits_field() {
        let json = serde_json::to_string(&ActivityStep::empty()).unwrap();
        assert_eq!(json, r#"{"text":""}"#);
    }
}
