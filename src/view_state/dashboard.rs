//! Student dashboard view state
//!
//! View switching between the dashboard, the learning path, the assessment
//! picker and a running assessment, plus the journal and mood check-in that
//! live on the dashboard itself.

use crate::catalog::{find_assessment, ASSESSMENTS};
use crate::models::Assessment;

// ============================================================================
// DashboardView
// ============================================================================

/// Which page of the student dashboard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Dashboard,
    Path,
    AssessmentSelect,
    /// Running the assessment with this catalog id.
    Assessment(&'static str),
}

impl DashboardView {
    pub fn title(&self) -> &'static str {
        match self {
            DashboardView::Dashboard => "Dashboard",
            DashboardView::Path => "Learning Path",
            DashboardView::AssessmentSelect => "Choose Your Assessment",
            DashboardView::Assessment(_) => "Assessment",
        }
    }
}

// ============================================================================
// Journal comic preview
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleKind {
    Speech,
    Thought,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeechBubble {
    pub id: String,
    pub text: String,
    /// Percent offsets inside the panel.
    pub position: (u8, u8),
    pub kind: BubbleKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComicPanel {
    pub id: String,
    pub image_url: String,
    pub bubbles: Vec<SpeechBubble>,
}

/// Comic generated from a journal entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ComicPreview {
    pub panels: Vec<ComicPanel>,
}

const PREVIEW_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1578632292335-df3abbb0d586?w=800&h=600";

impl ComicPreview {
    /// One panel whose single speech bubble carries the journal text.
    pub fn from_journal(text: &str) -> Self {
        Self {
            panels: vec![ComicPanel {
                id: "1".to_string(),
                image_url: PREVIEW_IMAGE_URL.to_string(),
                bubbles: vec![SpeechBubble {
                    id: "bubble-1".to_string(),
                    text: text.to_string(),
                    position: (50, 50),
                    kind: BubbleKind::Speech,
                }],
            }],
        }
    }
}

// ============================================================================
// Mood
// ============================================================================

/// Moods offered by the check-in.
pub const MOODS: [&str; 6] = ["happy", "calm", "excited", "tired", "sad", "worried"];

/// One day of the mood trend chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodPoint {
    pub date: &'static str,
    /// 0.0 (low) to 1.0 (high).
    pub value: f32,
    pub dominant_emotion: &'static str,
    pub confidence: f32,
}

/// Sample trend shown until real insight data exists.
pub const SAMPLE_MOOD_TREND: [MoodPoint; 5] = [
    MoodPoint {
        date: "2024-03-01",
        value: 0.8,
        dominant_emotion: "happy",
        confidence: 0.9,
    },
    MoodPoint {
        date: "2024-03-02",
        value: 0.6,
        dominant_emotion: "content",
        confidence: 0.85,
    },
    MoodPoint {
        date: "2024-03-03",
        value: 0.9,
        dominant_emotion: "excited",
        confidence: 0.95,
    },
    MoodPoint {
        date: "2024-03-04",
        value: 0.7,
        dominant_emotion: "happy",
        confidence: 0.8,
    },
    MoodPoint {
        date: "2024-03-05",
        value: 0.85,
        dominant_emotion: "joyful",
        confidence: 0.9,
    },
];

// ============================================================================
// StudentDashboardState
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct StudentDashboardState {
    view: DashboardView,
    journal: String,
    comic: Option<ComicPreview>,
    mood: Option<&'static str>,
    mood_cursor: usize,
    assessment_cursor: usize,
    last_score: Option<u32>,
}

impl StudentDashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> DashboardView {
        self.view
    }

    pub fn open_path(&mut self) {
        self.view = DashboardView::Path;
    }

    pub fn open_assessment_select(&mut self) {
        self.view = DashboardView::AssessmentSelect;
        self.assessment_cursor = 0;
    }

    /// Leave a sub-view. Backing out of a running assessment drops it
    /// without a score.
    pub fn back_to_dashboard(&mut self) {
        self.view = DashboardView::Dashboard;
    }

    /// Start an assessment by catalog id. Unknown ids are ignored.
    pub fn select_assessment(&mut self, id: &str) -> bool {
        match find_assessment(id) {
            Some(assessment) => {
                tracing::debug!(id = assessment.id, "starting assessment");
                self.view = DashboardView::Assessment(assessment.id);
                true
            }
            None => false,
        }
    }

    /// Assessment currently running.
    pub fn current_assessment(&self) -> Option<&'static Assessment> {
        match self.view {
            DashboardView::Assessment(id) => find_assessment(id),
            _ => None,
        }
    }

    /// Record a finished assessment and return to the dashboard.
    pub fn complete_assessment(&mut self, score: u32) {
        if let Some(assessment) = self.current_assessment() {
            tracing::info!(id = assessment.id, score, "assessment completed");
        }
        self.last_score = Some(score);
        self.view = DashboardView::Dashboard;
    }

    pub fn last_score(&self) -> Option<u32> {
        self.last_score
    }

    pub fn assessment_cursor(&self) -> usize {
        self.assessment_cursor
    }

    pub fn move_assessment_cursor(&mut self, forward: bool) {
        let len = ASSESSMENTS.len();
        self.assessment_cursor = if forward {
            (self.assessment_cursor + 1) % len
        } else {
            (self.assessment_cursor + len - 1) % len
        };
    }

    /// Start the assessment under the cursor.
    pub fn confirm_assessment(&mut self) -> bool {
        let id = ASSESSMENTS[self.assessment_cursor].id;
        self.select_assessment(id)
    }

    // ------------------------------------------------------------------
    // Journal
    // ------------------------------------------------------------------

    pub fn journal(&self) -> &str {
        &self.journal
    }

    pub fn set_journal(&mut self, text: impl Into<String>) {
        self.journal = text.into();
    }

    pub fn push_journal_char(&mut self, c: char) {
        self.journal.push(c);
    }

    pub fn pop_journal_char(&mut self) {
        self.journal.pop();
    }

    /// Turn the journal into a comic preview. Blank entries are ignored.
    pub fn submit_journal(&mut self) -> bool {
        if self.journal.trim().is_empty() {
            return false;
        }
        self.comic = Some(ComicPreview::from_journal(&self.journal));
        true
    }

    pub fn comic(&self) -> Option<&ComicPreview> {
        self.comic.as_ref()
    }

    pub fn close_comic(&mut self) {
        self.comic = None;
    }

    // ------------------------------------------------------------------
    // Mood
    // ------------------------------------------------------------------

    pub fn mood(&self) -> Option<&'static str> {
        self.mood
    }

    pub fn mood_cursor(&self) -> usize {
        self.mood_cursor
    }

    pub fn move_mood_cursor(&mut self, forward: bool) {
        let len = MOODS.len();
        self.mood_cursor = if forward {
            (self.mood_cursor + 1) % len
        } else {
            (self.mood_cursor + len - 1) % len
        };
    }

    /// Pick the mood under the cursor.
    pub fn select_mood(&mut self) {
        self.mood = Some(MOODS[self.mood_cursor]);
    }

    pub fn mood_trend(&self) -> &'static [MoodPoint] {
        &SAMPLE_MOOD_TREND
    }

    /// Mean of the trend values, 0.0 for an empty trend.
    pub fn average_mood(&self) -> f32 {
        let trend = self.mood_trend();
        if trend.is_empty() {
            return 0.0;
        }
        trend.iter().map(|p| p.value).sum::<f32>() / trend.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_complete_assessment() {
        let mut state = StudentDashboardState::new();
        state.open_assessment_select();
        assert_eq!(state.view(), DashboardView::AssessmentSelect);

        assert!(state.select_assessment("big-five"));
        assert_eq!(state.view(), DashboardView::Assessment("big-five"));
        assert_eq!(state.current_assessment().unwrap().title, "Big Five Personality");

        state.complete_assessment(17);
        assert_eq!(state.view(), DashboardView::Dashboard);
        assert!(state.current_assessment().is_none());
        assert_eq!(state.last_score(), Some(17));
    }

    #[test]
    fn test_unknown_assessment_ignored() {
        let mut state = StudentDashboardState::new();
        state.open_assessment_select();
        assert!(!state.select_assessment("iq"));
        assert_eq!(state.view(), DashboardView::AssessmentSelect);
    }

    #[test]
    fn test_cursor_confirm() {
        let mut state = StudentDashboardState::new();
        state.open_assessment_select();
        state.move_assessment_cursor(false);
        assert_eq!(state.assessment_cursor(), 1);
        assert!(state.confirm_assessment());
        assert_eq!(state.view(), DashboardView::Assessment("big-five"));
    }

    #[test]
    fn test_journal_comic_carries_text() {
        let mut state = StudentDashboardState::new();
        assert!(!state.submit_journal());

        state.set_journal("Today I shared my lunch");
        assert!(state.submit_journal());
        let comic = state.comic().unwrap();
        assert_eq!(comic.panels.len(), 1);
        assert_eq!(comic.panels[0].bubbles[0].text, "Today I shared my lunch");

        state.close_comic();
        assert!(state.comic().is_none());
    }

    #[test]
    fn test_mood_selection() {
        let mut state = StudentDashboardState::new();
        state.move_mood_cursor(true);
        state.select_mood();
        assert_eq!(state.mood(), Some("calm"));
        assert!((state.average_mood() - 0.77).abs() < 0.001);
    }

    #[test]
    fn test_path_and_back() {
        let mut state = StudentDashboardState::new();
        state.open_path();
        assert_eq!(state.view().title(), "Learning Path");
        state.back_to_dashboard();
        assert_eq!(state.view(), DashboardView::Dashboard);
    }
}
