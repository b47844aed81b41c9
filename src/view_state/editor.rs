//! Which content editor field has keyboard focus.

/// Focusable fields. Title, description and steps are edited in the
/// active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Title,
    Description,
    Step(usize),
}

impl EditorField {
    pub fn next(self, step_count: usize) -> Self {
        match self {
            EditorField::Title => EditorField::Description,
            EditorField::Description if step_count > 0 => EditorField::Step(0),
            EditorField::Description => EditorField::Title,
            EditorField::Step(i) if i + 1 < step_count => EditorField::Step(i + 1),
            EditorField::Step(_) => EditorField::Title,
        }
    }

    pub fn prev(self, step_count: usize) -> Self {
        match self {
            EditorField::Title if step_count > 0 => EditorField::Step(step_count - 1),
            EditorField::Title => EditorField::Description,
            EditorField::Description => EditorField::Title,
            EditorField::Step(0) => EditorField::Description,
            EditorField::Step(i) => EditorField::Step(i - 1),
        }
    }

    /// Keep a step focus in range after a step was removed.
    pub fn clamp(self, step_count: usize) -> Self {
        match self {
            EditorField::Step(_) if step_count == 0 => EditorField::Description,
            EditorField::Step(i) if i >= step_count => EditorField::Step(step_count - 1),
            other => other,
        }
    }
}
