//! Predefined mini-games seeded into every installation.

use once_cell::sync::Lazy;
use serde_json::json;

use crate::models::{Content, ContentStatus, ContentType, NewContent};

/// A game definition embedded in the binary.
#[derive(Debug, Clone, PartialEq)]
pub struct PredefinedGame {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub age_range: (u8, u8),
    pub duration_minutes: u32,
    pub config: serde_json::Value,
}

impl PredefinedGame {
    /// Creation body; seeded games are published immediately.
    pub fn to_new_content(&self) -> NewContent {
        NewContent {
            title: self.title.to_string(),
            description: self.description.to_string(),
            content_type: ContentType::Game,
            category: self.category.to_string(),
            status: ContentStatus::Published,
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            age_range: Some(self.age_range),
            duration_minutes: Some(self.duration_minutes),
            config: self.config.clone(),
        }
    }

    /// The item as the offline catalog presents it (`game-1`, `game-2`, ...).
    pub fn to_content(&self, index: usize) -> Content {
        self.to_new_content()
            .into_content(format!("game-{}", index + 1), "admin")
    }
}

pub static PREDEFINED_GAMES: Lazy<Vec<PredefinedGame>> = Lazy::new(|| {
    vec![
        PredefinedGame {
            title: "Breathing Bubbles",
            description: "Pop floating bubbles in rhythm with slow, calm breaths in and out.",
            category: "mindfulness",
            tags: &["breath", "calm"],
            age_range: (5, 12),
            duration_minutes: 5,
            config: json!({ "inhaleSeconds": 4, "exhaleSeconds": 6, "rounds": 5 }),
        },
        PredefinedGame {
            title: "Calligraphy of Calm",
            description: "Trace kanji brush strokes slowly to settle the mind and practise focus.",
            category: "mindfulness",
            tags: &["focus", "kanji"],
            age_range: (8, 12),
            duration_minutes: 10,
            config: json!({ "kanji": ["心", "和", "静"], "strokeTolerance": 0.2 }),
        },
        PredefinedGame {
            title: "Emotion Match",
            description: "Match faces to feelings and learn a name for every emotion.",
            category: "emotional-awareness",
            tags: &["emotions", "memory"],
            age_range: (5, 9),
            duration_minutes: 8,
            config: json!({ "pairs": 8, "emotions": ["happy", "sad", "angry", "scared"] }),
        },
        PredefinedGame {
            title: "Kindness Garden",
            description: "Grow a garden by choosing kind responses to everyday situations.",
            category: "social-skills",
            tags: &["kindness", "choices"],
            age_range: (6, 12),
            duration_minutes: 12,
            config: json!({ "scenarios": 10 }),
        },
        PredefinedGame {
            title: "Mindful Maze",
            description: "Guide a lantern through the maze with steady breathing that lights the path.",
            category: "mindfulness",
            tags: &["breath", "patience"],
            age_range: (7, 12),
            duration_minutes: 7,
            config: json!({ "levels": 3, "breathingPace": "slow" }),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_titles_are_unique() {
        let titles: HashSet<_> = PREDEFINED_GAMES.iter().map(|g| g.title).collect();
        assert_eq!(titles.len(), PREDEFINED_GAMES.len());
    }

    #[test]
    fn test_to_content_ids_and_status() {
        let content = PREDEFINED_GAMES[1].to_content(1);
        assert_eq!(content.id, "game-2");
        assert_eq!(content.status, ContentStatus::Published);
        assert_eq!(content.content_type, ContentType::Game);
        assert_eq!(content.created_by, "admin");
        assert_eq!(content.version, 1);
    }
}
