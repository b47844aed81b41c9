//! Content items served by `/api/content`: games, activities, lessons.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// Kind of content item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Game,
    Activity,
    Lesson,
    Story,
    Exercise,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Game => "game",
            ContentType::Activity => "activity",
            ContentType::Lesson => "lesson",
            ContentType::Story => "story",
            ContentType::Exercise => "exercise",
        }
    }
}

/// Publication status, shared by content items and parent activities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Published => "published",
            ContentStatus::Archived => "archived",
        }
    }
}

/// A content item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub created_by: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Inclusive age range the item targets.
    #[serde(default)]
    pub age_range: Option<(u8, u8)>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Free-form game/activity configuration interpreted by the player.
    #[serde(default)]
    pub config: serde_json::Value,
}

fn default_version() -> u32 {
    1
}

/// Body of `POST /api/content`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewContent {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub category: String,
    pub status: ContentStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<(u8, u8)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub config: serde_json::Value,
}

impl NewContent {
    /// Materialise the item the server would return for this body.
    pub fn into_content(self, id: impl Into<String>, created_by: impl Into<String>) -> Content {
        let now = Utc::now();
        Content {
            id: id.into(),
            title: self.title,
            description: self.description,
            content_type: self.content_type,
            category: self.category,
            status: self.status,
            version: 1,
            created_by: created_by.into(),
            created_at: now,
            updated_at: now,
            tags: self.tags,
            age_range: self.age_range,
            duration_minutes: self.duration_minutes,
            config: self.config,
        }
    }
}

/// Body of `PUT /api/content/{id}`: only the fields being changed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ContentPatch {
    pub fn is_empty(&self) -> bool {
        *self == ContentPatch::default()
    }

    /// Apply the patch to an item, bumping its version.
    pub fn apply_to(&self, content: &mut Content) {
        if let Some(ref title) = self.title {
            content.title = title.clone();
        }
        if let Some(ref description) = self.description {
            content.description = description.clone();
        }
        if let Some(ref category) = self.category {
            content.category = category.clone();
        }
        if let Some(status) = self.status {
            content.status = status;
        }
        if let Some(ref tags) = self.tags {
            content.tags = tags.clone();
        }
        content.version += 1;
        content.updated_at = Utc::now();
    }
}

/// Filters accepted by `GET /api/content`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentQuery {
    pub content_type: Option<ContentType>,
    pub category: Option<String>,
    pub status: Option<ContentStatus>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

impl ContentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: ContentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the free-text search. Blank input clears it.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.trim().is_empty() {
            None
        } else {
            Some(search)
        };
        self
    }

    /// Query-string pairs in the order the API documents them.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(content_type) = self.content_type {
            pairs.push(("type", content_type.as_str().to_string()));
        }
        if let Some(ref category) = self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(ref search) = self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }

    /// Local filter: type, category and case-insensitive search over title
    /// and description. Status and paging are left to the server.
    pub fn matches(&self, content: &Content) -> bool {
        if let Some(content_type) = self.content_type {
            if content.content_type != content_type {
                return false;
            }
        }
        if let Some(ref category) = self.category {
            if &content.category != category {
                return false;
            }
        }
        if let Some(ref search) = self.search {
            let needle = search.to_lowercase();
            if !content.title.to_lowercase().contains(&needle)
                && !content.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}
