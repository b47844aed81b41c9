/// A self-assessment a student can take from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Human-readable duration, e.g. `15-20 mins`.
    pub duration: &'static str,
    pub questions: u32,
}

impl Assessment {
    /// `15-20 mins • 20 questions`
    pub fn summary(&self) -> String {
        format!("{} • {} questions", self.duration, self.questions)
    }
}
